//! Pure validation predicates.
//!
//! Every predicate is side-effect free. Callers short-circuit on the first
//! failure and surface a field-identifying error without dispatching
//! anything.

use tangle_types::constants::{
    ATTACHMENT_REGION_LENGTH, HASH_LENGTH, MAX_SAFE_VALUE, TRANSACTION_LENGTH, TRYTE_ALPHABET,
};

/// Exact-length, fixed-alphabet tryte string.
pub fn is_trytes(input: &str, length: usize) -> bool {
    input.len() == length && input.chars().all(|c| TRYTE_ALPHABET.contains(c))
}

/// 81-tryte identifier.
pub fn is_hash(input: &str) -> bool {
    is_trytes(input, HASH_LENGTH)
}

/// Non-negative integer within the safely representable range.
pub fn is_value(value: i64) -> bool {
    (0..=MAX_SAFE_VALUE).contains(&value)
}

/// Scheme-qualified neighbor address (`udp://` or `tcp://` with a host).
pub fn is_uri(input: &str) -> bool {
    match url::Url::parse(input) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "udp" | "tcp") && parsed.host_str().is_some()
        }
        Err(_) => false,
    }
}

/// Non-empty collection in which every element is an 81-tryte identifier.
pub fn is_array_of_hashes(hashes: &[String]) -> bool {
    !hashes.is_empty() && hashes.iter().all(|h| is_hash(h))
}

/// Non-empty collection of full-length transaction trytes.
pub fn is_array_of_trytes(records: &[String]) -> bool {
    !records.is_empty() && records.iter().all(|r| is_trytes(r, TRANSACTION_LENGTH))
}

/// Non-empty collection of *attached* transaction trytes: full length and
/// the trailing linkage/timestamp/nonce region populated.
pub fn is_array_of_attached_trytes(records: &[String]) -> bool {
    !records.is_empty()
        && records.iter().all(|r| {
            is_trytes(r, TRANSACTION_LENGTH)
                && !r[TRANSACTION_LENGTH - ATTACHMENT_REGION_LENGTH..]
                    .chars()
                    .all(|c| c == '9')
        })
}
