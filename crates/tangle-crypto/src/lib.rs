//! Hashing and proof-of-work for the tangle client SDK.
//!
//! Provides the Curl-P-81 sponge used to derive record identifiers, the
//! [`PowEngine`] seam the attachment pipeline seals records through, and
//! the reference [`CurlPow`] nonce searcher.

pub mod curl;
pub mod error;
pub mod pow;

pub use curl::{transaction_hash, Curl};
pub use error::{PowError, PowResult};
pub use pow::{CurlPow, PowEngine};
