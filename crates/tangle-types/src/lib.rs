//! Foundation types for the tangle client SDK.
//!
//! This crate provides the balanced-ternary codec, the protocol constants,
//! and the core value types used throughout the SDK. Every other tangle
//! crate depends on `tangle-types`.
//!
//! # Key Types
//!
//! - [`Transaction`] — Typed view over a 2673-tryte ledger record
//! - [`SearchCriteria`] — Fixed-key search criteria for `findTransactions`
//! - [`trits`] — Tryte/trit/number conversions

pub mod constants;
pub mod error;
pub mod search;
pub mod transaction;
pub mod trits;

pub use error::TypeError;
pub use search::SearchCriteria;
pub use transaction::Transaction;
