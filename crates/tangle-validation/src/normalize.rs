//! Input normalization applied before validation.

use tangle_types::constants::{ADDRESS_WITH_CHECKSUM_LENGTH, HASH_LENGTH, TAG_LENGTH};

/// Strip the 9-tryte checksum from a 90-tryte address.
///
/// Bare 81-tryte addresses (and anything else) pass through unchanged;
/// validation decides their fate. Non-ASCII input cannot be a trytes
/// address, so it passes through untouched rather than being sliced at
/// a byte offset that may not be a character boundary.
pub fn no_checksum(address: &str) -> String {
    if address.len() == ADDRESS_WITH_CHECKSUM_LENGTH && address.is_ascii() {
        address[..HASH_LENGTH].to_string()
    } else {
        address.to_string()
    }
}

/// Right-pad a tag with `'9'` to exactly 27 trytes.
///
/// Over-long tags are returned unchanged so the length check fails where
/// the caller validates.
pub fn pad_tag(tag: &str) -> String {
    if tag.len() >= TAG_LENGTH {
        return tag.to_string();
    }
    let mut padded = String::with_capacity(TAG_LENGTH);
    padded.push_str(tag);
    padded.extend(std::iter::repeat('9').take(TAG_LENGTH - tag.len()));
    padded
}
