//! Input validation for the tangle client SDK.
//!
//! Pure predicates over caller-supplied strings and collections, plus the
//! normalization helpers (checksum stripping, tag padding) applied before
//! validation. Nothing here touches the network or carries state.

pub mod normalize;
pub mod predicates;

pub use normalize::{no_checksum, pad_tag};
pub use predicates::{
    is_array_of_attached_trytes, is_array_of_hashes, is_array_of_trytes, is_hash, is_trytes,
    is_uri, is_value,
};
