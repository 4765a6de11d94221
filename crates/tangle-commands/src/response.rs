use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the responses of a chunked command combine back into one logical
/// response. Chunk order is presentation order, so merging is plain
/// concatenation of the positional collections.
pub trait MergeBatch: Sized {
    fn merge(parts: Vec<Self>) -> Self;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindTransactionsResponse {
    pub hashes: Vec<String>,
}

impl MergeBatch for FindTransactionsResponse {
    fn merge(parts: Vec<Self>) -> Self {
        Self {
            hashes: parts.into_iter().flat_map(|p| p.hashes).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBalancesResponse {
    pub balances: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_index: Option<u64>,
}

impl MergeBatch for GetBalancesResponse {
    fn merge(parts: Vec<Self>) -> Self {
        let mut merged = Self::default();
        for part in parts {
            merged.balances.extend(part.balances);
            // The first chunk's ledger reference stands for the whole call.
            if merged.references.is_none() {
                merged.references = part.references;
            }
            if merged.milestone_index.is_none() {
                merged.milestone_index = part.milestone_index;
            }
        }
        merged
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTrytesResponse {
    pub trytes: Vec<String>,
}

impl MergeBatch for GetTrytesResponse {
    fn merge(parts: Vec<Self>) -> Self {
        Self {
            trytes: parts.into_iter().flat_map(|p| p.trytes).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetInclusionStatesResponse {
    pub states: Vec<bool>,
}

impl MergeBatch for GetInclusionStatesResponse {
    fn merge(parts: Vec<Self>) -> Self {
        Self {
            states: parts.into_iter().flat_map(|p| p.states).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WereAddressesSpentFromResponse {
    pub states: Vec<bool>,
}

impl MergeBatch for WereAddressesSpentFromResponse {
    fn merge(parts: Vec<Self>) -> Self {
        Self {
            states: parts.into_iter().flat_map(|p| p.states).collect(),
        }
    }
}

/// Node software identification and milestone state. Nodes report many
/// implementation-specific fields; unrecognized ones are kept verbatim.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNodeInfoResponse {
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub app_version: String,
    #[serde(default)]
    pub latest_milestone: Option<String>,
    #[serde(default)]
    pub latest_milestone_index: Option<u64>,
    #[serde(default)]
    pub latest_solid_subtangle_milestone: Option<String>,
    #[serde(default)]
    pub latest_solid_subtangle_milestone_index: Option<u64>,
    #[serde(default)]
    pub neighbors: Option<u64>,
    #[serde(default)]
    pub tips: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighbor {
    pub address: String,
    #[serde(default)]
    pub number_of_all_transactions: Option<u64>,
    #[serde(default)]
    pub number_of_new_transactions: Option<u64>,
    #[serde(default)]
    pub number_of_invalid_transactions: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GetNeighborsResponse {
    pub neighbors: Vec<Neighbor>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNeighborsResponse {
    pub added_neighbors: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveNeighborsResponse {
    pub removed_neighbors: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTipsResponse {
    pub hashes: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsToApproveResponse {
    pub trunk_transaction: String,
    pub branch_transaction: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachToTangleResponse {
    pub trytes: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConsistencyResponse {
    pub state: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_hashes_preserve_chunk_order() {
        let merged = FindTransactionsResponse::merge(vec![
            FindTransactionsResponse {
                hashes: vec!["A".into(), "B".into()],
            },
            FindTransactionsResponse {
                hashes: vec!["C".into()],
            },
        ]);
        assert_eq!(merged.hashes, vec!["A", "B", "C"]);
    }

    #[test]
    fn balances_merge_keeps_first_reference() {
        let merged = GetBalancesResponse::merge(vec![
            GetBalancesResponse {
                balances: vec!["1".into()],
                references: Some(vec!["R1".into()]),
                milestone_index: Some(7),
            },
            GetBalancesResponse {
                balances: vec!["2".into(), "3".into()],
                references: Some(vec!["R2".into()]),
                milestone_index: Some(8),
            },
        ]);
        assert_eq!(merged.balances, vec!["1", "2", "3"]);
        assert_eq!(merged.references, Some(vec!["R1".to_string()]));
        assert_eq!(merged.milestone_index, Some(7));
    }

    #[test]
    fn inclusion_states_concatenate() {
        let merged = GetInclusionStatesResponse::merge(vec![
            GetInclusionStatesResponse {
                states: vec![true, false],
            },
            GetInclusionStatesResponse {
                states: vec![true],
            },
        ]);
        assert_eq!(merged.states, vec![true, false, true]);
    }

    #[test]
    fn node_info_keeps_unknown_fields() {
        let raw = serde_json::json!({
            "appName": "IRI",
            "appVersion": "1.6.0",
            "jreVersion": "1.8.0",
            "time": 1234
        });
        let info: GetNodeInfoResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(info.app_name, "IRI");
        assert_eq!(info.extra["jreVersion"], "1.8.0");
    }

    #[test]
    fn balances_parse_from_wire_shape() {
        let raw = serde_json::json!({
            "balances": ["114544444"],
            "references": ["X"],
            "milestoneIndex": 128,
            "duration": 30
        });
        let parsed: GetBalancesResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.balances, vec!["114544444"]);
        assert_eq!(parsed.milestone_index, Some(128));
    }
}
