//! The public operation surface.
//!
//! Every operation validates its arguments, normalizes addresses and
//! tags, builds the wire command, and dispatches it — batched where the
//! command carries a chunkable collection, single-shot otherwise. A
//! validation failure returns without contacting the transport.

use serde_json::Value;
use tangle_commands::{
    AddNeighborsResponse, AttachToTangleResponse, CheckConsistencyResponse, Command,
    FindTransactionsResponse, GetBalancesResponse, GetInclusionStatesResponse,
    GetNeighborsResponse, GetNodeInfoResponse, GetTipsResponse,
    GetTransactionsToApproveResponse, GetTrytesResponse, RemoveNeighborsResponse,
    WereAddressesSpentFromResponse,
};
use tangle_transport::Broker;
use tangle_types::constants::TAG_LENGTH;
use tangle_types::SearchCriteria;
use tangle_validation::{
    is_array_of_attached_trytes, is_array_of_hashes, is_array_of_trytes, is_hash, is_trytes,
    is_uri, is_value, no_checksum, pad_tag,
};

use crate::attach::AttachmentPipeline;
use crate::client::{AttachmentStrategy, Client};
use crate::dispatch::BatchDispatcher;
use crate::error::{ApiError, ApiResult};

impl<B: Broker> Client<B> {
    fn dispatcher(&self) -> BatchDispatcher<'_, B> {
        BatchDispatcher::new(&self.broker, self.batch_size)
    }

    /// Look up transaction hashes by bundle, address, tag, or approvee.
    ///
    /// Addresses are stripped of checksums and tags right-padded to 27
    /// trytes before validation. Single-key searches whose value count
    /// exceeds the batch size are chunked; multi-key searches are always
    /// one node-side query.
    pub async fn find_transactions(
        &self,
        criteria: SearchCriteria,
    ) -> ApiResult<FindTransactionsResponse> {
        if criteria.is_empty() {
            return Err(ApiError::InvalidSearchCriteria(
                "no search values provided".into(),
            ));
        }

        let criteria = SearchCriteria {
            bundles: criteria.bundles,
            addresses: criteria.addresses.iter().map(|a| no_checksum(a)).collect(),
            tags: criteria.tags.iter().map(|t| pad_tag(t)).collect(),
            approvees: criteria.approvees,
        };

        if !criteria.bundles.is_empty() && !is_array_of_hashes(&criteria.bundles) {
            return Err(ApiError::InvalidTrytes("bundles"));
        }
        if !criteria.addresses.is_empty() && !is_array_of_hashes(&criteria.addresses) {
            return Err(ApiError::InvalidTrytes("addresses"));
        }
        if !criteria.approvees.is_empty() && !is_array_of_hashes(&criteria.approvees) {
            return Err(ApiError::InvalidTrytes("approvees"));
        }
        if !criteria.tags.iter().all(|t| is_trytes(t, TAG_LENGTH)) {
            return Err(ApiError::InvalidTrytes("tags"));
        }

        self.dispatcher()
            .send_batched(Command::FindTransactions { criteria })
            .await
    }

    /// Confirmed balances for a set of addresses.
    pub async fn get_balances(
        &self,
        addresses: &[String],
        threshold: u8,
    ) -> ApiResult<GetBalancesResponse> {
        let addresses: Vec<String> = addresses.iter().map(|a| no_checksum(a)).collect();
        if !is_array_of_hashes(&addresses) {
            return Err(ApiError::InvalidTrytes("addresses"));
        }
        self.dispatcher()
            .send_batched(Command::GetBalances {
                addresses,
                threshold,
            })
            .await
    }

    /// Raw record trytes for a set of transaction hashes.
    pub async fn get_trytes(&self, hashes: &[String]) -> ApiResult<GetTrytesResponse> {
        if !is_array_of_hashes(hashes) {
            return Err(ApiError::InvalidTrytes("hashes"));
        }
        self.dispatcher()
            .send_batched(Command::GetTrytes {
                hashes: hashes.to_vec(),
            })
            .await
    }

    /// Inclusion states of transactions as seen from the given tips.
    pub async fn get_inclusion_states(
        &self,
        transactions: &[String],
        tips: &[String],
    ) -> ApiResult<GetInclusionStatesResponse> {
        if !is_array_of_hashes(transactions) {
            return Err(ApiError::InvalidTrytes("transactions"));
        }
        if !is_array_of_hashes(tips) {
            return Err(ApiError::InvalidTrytes("tips"));
        }
        self.dispatcher()
            .send_batched(Command::GetInclusionStates {
                transactions: transactions.to_vec(),
                tips: tips.to_vec(),
            })
            .await
    }

    pub async fn get_node_info(&self) -> ApiResult<GetNodeInfoResponse> {
        self.dispatcher().send(&Command::GetNodeInfo).await
    }

    pub async fn get_neighbors(&self) -> ApiResult<GetNeighborsResponse> {
        self.dispatcher().send(&Command::GetNeighbors).await
    }

    pub async fn add_neighbors(&self, uris: &[String]) -> ApiResult<AddNeighborsResponse> {
        for uri in uris {
            if !is_uri(uri) {
                return Err(ApiError::InvalidUri(uri.clone()));
            }
        }
        self.dispatcher()
            .send(&Command::AddNeighbors {
                uris: uris.to_vec(),
            })
            .await
    }

    pub async fn remove_neighbors(&self, uris: &[String]) -> ApiResult<RemoveNeighborsResponse> {
        for uri in uris {
            if !is_uri(uri) {
                return Err(ApiError::InvalidUri(uri.clone()));
            }
        }
        self.dispatcher()
            .send(&Command::RemoveNeighbors {
                uris: uris.to_vec(),
            })
            .await
    }

    pub async fn get_tips(&self) -> ApiResult<GetTipsResponse> {
        self.dispatcher().send(&Command::GetTips).await
    }

    /// Two tip transactions to approve, found by a random walk of the
    /// given depth.
    pub async fn get_transactions_to_approve(
        &self,
        depth: u64,
        reference: Option<&str>,
    ) -> ApiResult<GetTransactionsToApproveResponse> {
        if !is_value(depth as i64) {
            return Err(ApiError::InvalidDepth(depth));
        }
        self.dispatcher()
            .send(&Command::GetTransactionsToApprove {
                depth,
                reference: reference.map(str::to_string),
            })
            .await
    }

    /// Seal an ordered bundle of records against the two anchors.
    ///
    /// With [`AttachmentStrategy::Delegate`] the node performs the work;
    /// with [`AttachmentStrategy::Local`] the injected engine seals the
    /// bundle through the [`AttachmentPipeline`] without any network
    /// traffic.
    pub async fn attach_to_tangle(
        &self,
        trunk_anchor: &str,
        branch_anchor: &str,
        min_weight_magnitude: u8,
        records: &[String],
    ) -> ApiResult<Vec<String>> {
        if !is_hash(trunk_anchor) {
            return Err(ApiError::InvalidHash {
                role: "trunk",
                value: trunk_anchor.to_string(),
            });
        }
        if !is_hash(branch_anchor) {
            return Err(ApiError::InvalidHash {
                role: "branch",
                value: branch_anchor.to_string(),
            });
        }
        if !is_array_of_trytes(records) {
            return Err(ApiError::InvalidTrytes("records"));
        }

        match &self.attachment {
            AttachmentStrategy::Delegate => {
                let response: AttachToTangleResponse = self
                    .dispatcher()
                    .send(&Command::AttachToTangle {
                        trunk_transaction: trunk_anchor.to_string(),
                        branch_transaction: branch_anchor.to_string(),
                        min_weight_magnitude,
                        trytes: records.to_vec(),
                    })
                    .await?;
                Ok(response.trytes)
            }
            AttachmentStrategy::Local(engine) => AttachmentPipeline::new(engine.as_ref()).attach(
                trunk_anchor,
                branch_anchor,
                min_weight_magnitude,
                records,
            ),
        }
    }

    /// Ask the node to stop an in-flight delegated attachment.
    pub async fn interrupt_attaching_to_tangle(&self) -> ApiResult<Value> {
        self.dispatcher()
            .send(&Command::InterruptAttachingToTangle)
            .await
    }

    pub async fn broadcast_transactions(&self, records: &[String]) -> ApiResult<Value> {
        if !is_array_of_attached_trytes(records) {
            return Err(ApiError::InvalidAttachedTrytes("records"));
        }
        self.dispatcher()
            .send(&Command::BroadcastTransactions {
                trytes: records.to_vec(),
            })
            .await
    }

    pub async fn store_transactions(&self, records: &[String]) -> ApiResult<Value> {
        if !is_array_of_attached_trytes(records) {
            return Err(ApiError::InvalidAttachedTrytes("records"));
        }
        self.dispatcher()
            .send(&Command::StoreTransactions {
                trytes: records.to_vec(),
            })
            .await
    }

    pub async fn check_consistency(&self, tails: &[String]) -> ApiResult<CheckConsistencyResponse> {
        if !is_array_of_hashes(tails) {
            return Err(ApiError::InvalidTrytes("tails"));
        }
        self.dispatcher()
            .send(&Command::CheckConsistency {
                tails: tails.to_vec(),
            })
            .await
    }

    pub async fn were_addresses_spent_from(
        &self,
        addresses: &[String],
    ) -> ApiResult<WereAddressesSpentFromResponse> {
        let addresses: Vec<String> = addresses.iter().map(|a| no_checksum(a)).collect();
        if !is_array_of_hashes(&addresses) {
            return Err(ApiError::InvalidTrytes("addresses"));
        }
        self.dispatcher()
            .send_batched(Command::WereAddressesSpentFrom { addresses })
            .await
    }

    pub async fn get_node_api_configuration(&self) -> ApiResult<Value> {
        self.dispatcher()
            .send(&Command::GetNodeApiConfiguration)
            .await
    }

    pub async fn get_missing_transactions(&self) -> ApiResult<Value> {
        self.dispatcher()
            .send(&Command::GetMissingTransactions)
            .await
    }
}
