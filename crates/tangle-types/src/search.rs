//! Search criteria for transaction lookups.
//!
//! The node accepts exactly four search keys. Modeling them as struct
//! fields makes unknown keys unrepresentable instead of a runtime check.

use serde::{Deserialize, Serialize};

/// Criteria for a `findTransactions` query.
///
/// Keys are combinable; batching applies only when exactly one key is
/// populated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub approvees: Vec<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bundles(mut self, bundles: Vec<String>) -> Self {
        self.bundles = bundles;
        self
    }

    pub fn addresses(mut self, addresses: Vec<String>) -> Self {
        self.addresses = addresses;
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn approvees(mut self, approvees: Vec<String>) -> Self {
        self.approvees = approvees;
        self
    }

    /// Number of populated search keys.
    pub fn key_count(&self) -> usize {
        [
            !self.bundles.is_empty(),
            !self.addresses.is_empty(),
            !self.tags.is_empty(),
            !self.approvees.is_empty(),
        ]
        .iter()
        .filter(|&&populated| populated)
        .count()
    }

    /// Total number of query values across all keys.
    pub fn entry_count(&self) -> usize {
        self.bundles.len() + self.addresses.len() + self.tags.len() + self.approvees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}
