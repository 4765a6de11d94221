use serde::{Deserialize, Serialize};
use tangle_types::SearchCriteria;

/// All commands in the node wire protocol.
///
/// Serializes as `{"command": "<name>", ...camelCase fields}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
    FindTransactions {
        #[serde(flatten)]
        criteria: SearchCriteria,
    },
    #[serde(rename_all = "camelCase")]
    GetBalances {
        addresses: Vec<String>,
        threshold: u8,
    },
    #[serde(rename_all = "camelCase")]
    GetTrytes { hashes: Vec<String> },
    #[serde(rename_all = "camelCase")]
    GetInclusionStates {
        transactions: Vec<String>,
        tips: Vec<String>,
    },
    GetNodeInfo,
    GetNeighbors,
    #[serde(rename_all = "camelCase")]
    AddNeighbors { uris: Vec<String> },
    #[serde(rename_all = "camelCase")]
    RemoveNeighbors { uris: Vec<String> },
    GetTips,
    #[serde(rename_all = "camelCase")]
    GetTransactionsToApprove {
        depth: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        reference: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    AttachToTangle {
        trunk_transaction: String,
        branch_transaction: String,
        min_weight_magnitude: u8,
        trytes: Vec<String>,
    },
    InterruptAttachingToTangle,
    #[serde(rename_all = "camelCase")]
    BroadcastTransactions { trytes: Vec<String> },
    #[serde(rename_all = "camelCase")]
    StoreTransactions { trytes: Vec<String> },
    #[serde(rename_all = "camelCase")]
    CheckConsistency { tails: Vec<String> },
    #[serde(rename_all = "camelCase")]
    WereAddressesSpentFrom { addresses: Vec<String> },
    #[serde(rename = "getNodeAPIConfiguration")]
    GetNodeApiConfiguration,
    GetMissingTransactions,
}

impl Command {
    /// Wire name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FindTransactions { .. } => "findTransactions",
            Self::GetBalances { .. } => "getBalances",
            Self::GetTrytes { .. } => "getTrytes",
            Self::GetInclusionStates { .. } => "getInclusionStates",
            Self::GetNodeInfo => "getNodeInfo",
            Self::GetNeighbors => "getNeighbors",
            Self::AddNeighbors { .. } => "addNeighbors",
            Self::RemoveNeighbors { .. } => "removeNeighbors",
            Self::GetTips => "getTips",
            Self::GetTransactionsToApprove { .. } => "getTransactionsToApprove",
            Self::AttachToTangle { .. } => "attachToTangle",
            Self::InterruptAttachingToTangle => "interruptAttachingToTangle",
            Self::BroadcastTransactions { .. } => "broadcastTransactions",
            Self::StoreTransactions { .. } => "storeTransactions",
            Self::CheckConsistency { .. } => "checkConsistency",
            Self::WereAddressesSpentFrom { .. } => "wereAddressesSpentFrom",
            Self::GetNodeApiConfiguration => "getNodeAPIConfiguration",
            Self::GetMissingTransactions => "getMissingTransactions",
        }
    }

    /// The collection the dispatcher may split into size-bounded chunks.
    ///
    /// `findTransactions` is chunkable only when exactly one search key is
    /// populated: a cross-key search is a single node-side query.
    /// `getInclusionStates` chunks on its transactions; the tips repeat
    /// per chunk.
    pub fn batch_items(&self) -> Option<&[String]> {
        match self {
            Self::FindTransactions { criteria } if criteria.key_count() == 1 => {
                [
                    &criteria.bundles,
                    &criteria.addresses,
                    &criteria.tags,
                    &criteria.approvees,
                ]
                .into_iter()
                .find(|values| !values.is_empty())
                .map(|values| values.as_slice())
            }
            Self::GetBalances { addresses, .. } => Some(addresses),
            Self::GetTrytes { hashes } => Some(hashes),
            Self::GetInclusionStates { transactions, .. } => Some(transactions),
            Self::WereAddressesSpentFrom { addresses } => Some(addresses),
            _ => None,
        }
    }

    /// A copy of this command carrying one chunk of the batchable
    /// collection. Commands without one are returned unchanged.
    pub fn with_batch_items(&self, items: Vec<String>) -> Self {
        match self.clone() {
            Self::FindTransactions { criteria } => {
                let mut chunked = criteria;
                if !chunked.bundles.is_empty() {
                    chunked.bundles = items;
                } else if !chunked.addresses.is_empty() {
                    chunked.addresses = items;
                } else if !chunked.tags.is_empty() {
                    chunked.tags = items;
                } else {
                    chunked.approvees = items;
                }
                Self::FindTransactions { criteria: chunked }
            }
            Self::GetBalances { threshold, .. } => Self::GetBalances {
                addresses: items,
                threshold,
            },
            Self::GetTrytes { .. } => Self::GetTrytes { hashes: items },
            Self::GetInclusionStates { tips, .. } => Self::GetInclusionStates {
                transactions: items,
                tips,
            },
            Self::WereAddressesSpentFrom { .. } => {
                Self::WereAddressesSpentFrom { addresses: items }
            }
            other => other,
        }
    }
}
