//! Typed view over a serialized ledger record.
//!
//! A transaction travels on the wire as a single 2673-tryte string. This
//! module decodes it into named fields and re-encodes it after the linkage
//! and timestamp fields have been rewritten during attachment. Chaining
//! steps construct new values instead of mutating in place.

use serde::{Deserialize, Serialize};

use crate::constants::{offsets, TRANSACTION_LENGTH};
use crate::error::{TypeError, TypeResult};
use crate::trits;

/// One ledger record, decoded from its 2673-tryte wire form.
///
/// Invariant: `current_index <= last_index` (enforced at decode time).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub signature_message_fragment: String,
    pub address: String,
    pub value: i64,
    pub obsolete_tag: String,
    pub timestamp: i64,
    pub current_index: u64,
    pub last_index: u64,
    pub bundle: String,
    pub trunk: String,
    pub branch: String,
    pub tag: String,
    pub attachment_timestamp: i64,
    pub attachment_timestamp_lower_bound: i64,
    pub attachment_timestamp_upper_bound: i64,
    pub nonce: String,
}

impl Transaction {
    /// Decode a transaction from its wire trytes.
    pub fn from_trytes(trytes: &str) -> TypeResult<Self> {
        if trytes.len() != TRANSACTION_LENGTH {
            return Err(TypeError::InvalidLength {
                expected: TRANSACTION_LENGTH,
                actual: trytes.len(),
            });
        }
        // The field offsets below slice at byte positions; non-ASCII
        // input cannot be trytes and must not reach them.
        if let Some(bad) = trytes.chars().find(|c| !c.is_ascii()) {
            return Err(TypeError::InvalidTryte(bad));
        }

        let current_index = decode_index(&trytes[offsets::CURRENT_INDEX], "currentIndex")?;
        let last_index = decode_index(&trytes[offsets::LAST_INDEX], "lastIndex")?;
        if current_index > last_index {
            return Err(TypeError::IndexRange {
                current: current_index as i64,
                last: last_index as i64,
            });
        }

        Ok(Self {
            signature_message_fragment: trytes[offsets::SIGNATURE_MESSAGE_FRAGMENT].to_string(),
            address: trytes[offsets::ADDRESS].to_string(),
            value: decode_number(&trytes[offsets::VALUE], "value")?,
            obsolete_tag: trytes[offsets::OBSOLETE_TAG].to_string(),
            timestamp: decode_number(&trytes[offsets::TIMESTAMP], "timestamp")?,
            current_index,
            last_index,
            bundle: trytes[offsets::BUNDLE].to_string(),
            trunk: trytes[offsets::TRUNK].to_string(),
            branch: trytes[offsets::BRANCH].to_string(),
            tag: trytes[offsets::TAG].to_string(),
            attachment_timestamp: decode_number(
                &trytes[offsets::ATTACHMENT_TIMESTAMP],
                "attachmentTimestamp",
            )?,
            attachment_timestamp_lower_bound: decode_number(
                &trytes[offsets::ATTACHMENT_TIMESTAMP_LOWER],
                "attachmentTimestampLowerBound",
            )?,
            attachment_timestamp_upper_bound: decode_number(
                &trytes[offsets::ATTACHMENT_TIMESTAMP_UPPER],
                "attachmentTimestampUpperBound",
            )?,
            nonce: trytes[offsets::NONCE].to_string(),
        })
    }

    /// Re-encode the transaction into its 2673-tryte wire form.
    pub fn to_trytes(&self) -> TypeResult<String> {
        let mut out = String::with_capacity(TRANSACTION_LENGTH);
        out.push_str(&exact(
            &self.signature_message_fragment,
            offsets::SIGNATURE_MESSAGE_FRAGMENT.len(),
        )?);
        out.push_str(&exact(&self.address, offsets::ADDRESS.len())?);
        out.push_str(&encode_number(self.value, offsets::VALUE.len())?);
        out.push_str(&exact(&self.obsolete_tag, offsets::OBSOLETE_TAG.len())?);
        out.push_str(&encode_number(self.timestamp, offsets::TIMESTAMP.len())?);
        out.push_str(&encode_number(
            self.current_index as i64,
            offsets::CURRENT_INDEX.len(),
        )?);
        out.push_str(&encode_number(
            self.last_index as i64,
            offsets::LAST_INDEX.len(),
        )?);
        out.push_str(&exact(&self.bundle, offsets::BUNDLE.len())?);
        out.push_str(&exact(&self.trunk, offsets::TRUNK.len())?);
        out.push_str(&exact(&self.branch, offsets::BRANCH.len())?);
        out.push_str(&exact(&self.tag, offsets::TAG.len())?);
        out.push_str(&encode_number(
            self.attachment_timestamp,
            offsets::ATTACHMENT_TIMESTAMP.len(),
        )?);
        out.push_str(&encode_number(
            self.attachment_timestamp_lower_bound,
            offsets::ATTACHMENT_TIMESTAMP_LOWER.len(),
        )?);
        out.push_str(&encode_number(
            self.attachment_timestamp_upper_bound,
            offsets::ATTACHMENT_TIMESTAMP_UPPER.len(),
        )?);
        out.push_str(&exact(&self.nonce, offsets::NONCE.len())?);
        Ok(out)
    }

    /// A copy of this record with new trunk/branch references.
    pub fn with_links(&self, trunk: &str, branch: &str) -> Self {
        Self {
            trunk: trunk.to_string(),
            branch: branch.to_string(),
            ..self.clone()
        }
    }

    /// A copy of this record with the attachment timestamp window set.
    pub fn with_attachment_window(&self, timestamp: i64, lower: i64, upper: i64) -> Self {
        Self {
            attachment_timestamp: timestamp,
            attachment_timestamp_lower_bound: lower,
            attachment_timestamp_upper_bound: upper,
            ..self.clone()
        }
    }

    /// Whether this is the deepest record of its bundle.
    pub fn is_tail_of_bundle(&self) -> bool {
        self.current_index == self.last_index
    }
}

fn decode_number(trytes: &str, field: &'static str) -> TypeResult<i64> {
    let trits = trits::trits_from_trytes(trytes)?;
    let value = trits::value_from_trits(&trits);
    i64::try_from(value).map_err(|_| TypeError::ValueOutOfRange { field, value })
}

fn decode_index(trytes: &str, field: &'static str) -> TypeResult<u64> {
    let value = decode_number(trytes, field)?;
    if value < 0 {
        return Err(TypeError::NegativeIndex(value));
    }
    Ok(value as u64)
}

fn encode_number(value: i64, trytes_len: usize) -> TypeResult<String> {
    let trits = trits::trits_from_value(value, trytes_len * 3)?;
    trits::trytes_from_trits(&trits)
}

fn exact(field: &str, expected: usize) -> TypeResult<String> {
    if field.len() != expected {
        return Err(TypeError::InvalidLength {
            expected,
            actual: field.len(),
        });
    }
    Ok(field.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_transaction(current_index: u64, last_index: u64) -> Transaction {
        Transaction {
            signature_message_fragment: "9".repeat(2187),
            address: "9".repeat(81),
            value: 0,
            obsolete_tag: "9".repeat(27),
            timestamp: 1_500_000_000,
            current_index,
            last_index,
            bundle: "9".repeat(81),
            trunk: "9".repeat(81),
            branch: "9".repeat(81),
            tag: "9".repeat(27),
            attachment_timestamp: 0,
            attachment_timestamp_lower_bound: 0,
            attachment_timestamp_upper_bound: 0,
            nonce: "9".repeat(27),
        }
    }

    #[test]
    fn roundtrip_preserves_fields() {
        let tx = blank_transaction(1, 3);
        let trytes = tx.to_trytes().unwrap();
        assert_eq!(trytes.len(), TRANSACTION_LENGTH);
        let parsed = Transaction::from_trytes(&trytes).unwrap();
        assert_eq!(parsed, tx);
    }

    #[test]
    fn roundtrip_preserves_value_and_timestamps() {
        let mut tx = blank_transaction(0, 0);
        tx.value = -42_000;
        tx.attachment_timestamp = 1_700_000_000_000;
        tx.attachment_timestamp_upper_bound = crate::constants::MAX_TIMESTAMP_VALUE;
        let parsed = Transaction::from_trytes(&tx.to_trytes().unwrap()).unwrap();
        assert_eq!(parsed.value, -42_000);
        assert_eq!(parsed.attachment_timestamp, 1_700_000_000_000);
        assert_eq!(
            parsed.attachment_timestamp_upper_bound,
            crate::constants::MAX_TIMESTAMP_VALUE
        );
    }

    #[test]
    fn wrong_length_rejected() {
        let err = Transaction::from_trytes("ABC").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: TRANSACTION_LENGTH,
                actual: 3
            }
        );
    }

    #[test]
    fn multibyte_input_rejected_not_sliced() {
        // 2673 bytes, but the field offsets fall mid-character.
        let mut trytes = "9".repeat(2671);
        trytes.push('é');
        assert_eq!(trytes.len(), TRANSACTION_LENGTH);
        let err = Transaction::from_trytes(&trytes).unwrap_err();
        assert_eq!(err, TypeError::InvalidTryte('é'));
    }

    #[test]
    fn index_invariant_enforced() {
        let tx = blank_transaction(0, 0);
        let mut bad = tx.clone();
        bad.current_index = 2;
        bad.last_index = 2;
        // Encode a record whose currentIndex exceeds lastIndex by patching
        // the encoded form of a valid one.
        let good = bad.to_trytes().unwrap();
        let mut tampered = bad;
        tampered.last_index = 5;
        let trytes = tampered.to_trytes().unwrap();
        // Splice the smaller lastIndex back in.
        let patched = format!(
            "{}{}{}",
            &trytes[..offsets::LAST_INDEX.start],
            &good[offsets::LAST_INDEX.start..offsets::LAST_INDEX.end],
            &trytes[offsets::LAST_INDEX.end..]
        );
        // patched: currentIndex = 2, lastIndex = 2 -> fine
        assert!(Transaction::from_trytes(&patched).is_ok());

        let zero_last = blank_transaction(0, 0).to_trytes().unwrap();
        let broken = format!(
            "{}{}{}",
            &trytes[..offsets::LAST_INDEX.start],
            &zero_last[offsets::LAST_INDEX.start..offsets::LAST_INDEX.end],
            &trytes[offsets::LAST_INDEX.end..]
        );
        // broken: currentIndex = 2, lastIndex = 0
        let err = Transaction::from_trytes(&broken).unwrap_err();
        assert!(matches!(err, TypeError::IndexRange { current: 2, last: 0 }));
    }

    #[test]
    fn with_links_replaces_only_references() {
        let tx = blank_transaction(0, 1);
        let linked = tx.with_links(&"A".repeat(81), &"B".repeat(81));
        assert_eq!(linked.trunk, "A".repeat(81));
        assert_eq!(linked.branch, "B".repeat(81));
        assert_eq!(linked.address, tx.address);
        assert_eq!(linked.current_index, tx.current_index);
    }

    #[test]
    fn with_attachment_window_sets_bounds() {
        let tx = blank_transaction(0, 0);
        let stamped =
            tx.with_attachment_window(123, 0, crate::constants::MAX_TIMESTAMP_VALUE);
        assert_eq!(stamped.attachment_timestamp, 123);
        assert_eq!(stamped.attachment_timestamp_lower_bound, 0);
        assert_eq!(
            stamped.attachment_timestamp_upper_bound,
            crate::constants::MAX_TIMESTAMP_VALUE
        );
    }

    #[test]
    fn tail_detection() {
        assert!(blank_transaction(2, 2).is_tail_of_bundle());
        assert!(!blank_transaction(1, 2).is_tail_of_bundle());
    }
}
