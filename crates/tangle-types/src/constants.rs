//! Wire-level protocol constants.

/// The tryte alphabet. `'9'` encodes zero; `A..M` encode `1..13`;
/// `N..Z` encode `-13..-1`.
pub const TRYTE_ALPHABET: &str = "9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Trits per tryte.
pub const TRITS_PER_TRYTE: usize = 3;

/// Length of a transaction, address, or bundle hash, in trytes.
pub const HASH_LENGTH: usize = 81;

/// Length of an address carrying its 9-tryte checksum.
pub const ADDRESS_WITH_CHECKSUM_LENGTH: usize = 90;

/// Length of a tag, in trytes. Shorter caller-supplied tags are
/// right-padded with `'9'` before validation.
pub const TAG_LENGTH: usize = 27;

/// Length of a full serialized transaction, in trytes.
pub const TRANSACTION_LENGTH: usize = 2673;

/// Length of the nonce region at the tail of a transaction, in trytes.
pub const NONCE_LENGTH: usize = 27;

/// The trailing region an attached transaction must have populated:
/// trunk + branch + tag + attachment timestamps + nonce.
pub const ATTACHMENT_REGION_LENGTH: usize = 243;

/// Largest value encodable in a 9-tryte (27-trit) timestamp field:
/// `(3^27 - 1) / 2`.
pub const MAX_TIMESTAMP_VALUE: i64 = 3_812_798_742_493;

/// Largest integer the protocol treats as safely representable.
pub const MAX_SAFE_VALUE: i64 = 9_007_199_254_740_991;

/// Tryte offsets of the transaction fields within the 2673-tryte record.
pub mod offsets {
    use std::ops::Range;

    pub const SIGNATURE_MESSAGE_FRAGMENT: Range<usize> = 0..2187;
    pub const ADDRESS: Range<usize> = 2187..2268;
    pub const VALUE: Range<usize> = 2268..2295;
    pub const OBSOLETE_TAG: Range<usize> = 2295..2322;
    pub const TIMESTAMP: Range<usize> = 2322..2331;
    pub const CURRENT_INDEX: Range<usize> = 2331..2340;
    pub const LAST_INDEX: Range<usize> = 2340..2349;
    pub const BUNDLE: Range<usize> = 2349..2430;
    pub const TRUNK: Range<usize> = 2430..2511;
    pub const BRANCH: Range<usize> = 2511..2592;
    pub const TAG: Range<usize> = 2592..2619;
    pub const ATTACHMENT_TIMESTAMP: Range<usize> = 2619..2628;
    pub const ATTACHMENT_TIMESTAMP_LOWER: Range<usize> = 2628..2637;
    pub const ATTACHMENT_TIMESTAMP_UPPER: Range<usize> = 2637..2646;
    pub const NONCE: Range<usize> = 2646..2673;
}
