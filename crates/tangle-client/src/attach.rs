//! The bundle-chaining attachment pipeline.
//!
//! Seals an ordered chain of unsealed records into a mutually-referencing
//! sequence ready for submission. Records arrive ordered by descending
//! `currentIndex`: the first record presented is the deepest of the
//! bundle (`currentIndex == lastIndex`) and receives the two anchor
//! references; every later record chains its trunk to the identifier of
//! the previously sealed record and reuses the trunk anchor as its
//! branch. Sealing is inherently sequential: each step needs the
//! previous step's derived identifier.

use chrono::Utc;
use tangle_crypto::{transaction_hash, PowEngine};
use tangle_types::constants::MAX_TIMESTAMP_VALUE;
use tangle_types::Transaction;
use tracing::debug;

use crate::error::{ApiError, ApiResult};

pub struct AttachmentPipeline<'a> {
    engine: &'a dyn PowEngine,
}

impl<'a> AttachmentPipeline<'a> {
    pub fn new(engine: &'a dyn PowEngine) -> Self {
        Self { engine }
    }

    /// Seal every record of the bundle, in presentation order.
    ///
    /// Fails before invoking the engine if the first record is not the
    /// bundle tail. An engine failure on any record aborts the whole
    /// bundle; partially sealed output is never returned.
    pub fn attach(
        &self,
        trunk_anchor: &str,
        branch_anchor: &str,
        min_weight_magnitude: u8,
        records: &[String],
    ) -> ApiResult<Vec<String>> {
        let mut previous_identifier: Option<String> = None;
        let mut sealed_records = Vec::with_capacity(records.len());

        for (position, record_trytes) in records.iter().enumerate() {
            let record = Transaction::from_trytes(record_trytes)?;

            let linked = match &previous_identifier {
                None => {
                    if !record.is_tail_of_bundle() {
                        return Err(ApiError::BundleOrder {
                            current: record.current_index,
                            last: record.last_index,
                        });
                    }
                    record.with_links(trunk_anchor, branch_anchor)
                }
                // Only the trunk advances along the chain; the branch
                // stays on the original trunk anchor.
                Some(previous) => record.with_links(previous, trunk_anchor),
            };

            let stamped = linked.with_attachment_window(
                Utc::now().timestamp_millis(),
                0,
                MAX_TIMESTAMP_VALUE,
            );

            let sealed = self
                .engine
                .seal(&stamped.to_trytes()?, min_weight_magnitude)
                .map_err(|e| ApiError::Pow {
                    position,
                    reason: e.to_string(),
                })?;

            // The seal rewrote the record, so its identifier moved.
            previous_identifier = Some(transaction_hash(&sealed)?);
            debug!(position, "record sealed");
            sealed_records.push(sealed);
        }

        Ok(sealed_records)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tangle_crypto::{PowError, PowResult};
    use tangle_types::constants::offsets;

    use super::*;

    /// Deterministic engine: stamps a distinct nonce per call and counts
    /// invocations; optionally fails at a given call index.
    struct CountingPow {
        calls: AtomicUsize,
        fail_at: Option<usize>,
    }

    impl CountingPow {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_at: None,
            }
        }

        fn failing_at(call: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_at: Some(call),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl PowEngine for CountingPow {
        fn seal(&self, trytes: &str, _min_weight_magnitude: u8) -> PowResult<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_at == Some(call) {
                return Err(PowError::Engine("difficulty not reached".into()));
            }
            let nonce = ((b'A' + (call % 26) as u8) as char).to_string().repeat(27);
            Ok(format!("{}{}", &trytes[..offsets::NONCE.start], nonce))
        }
    }

    fn record(current_index: u64, last_index: u64) -> String {
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
        .to_trytes()
        .unwrap()
    }

    #[test]
    fn two_record_bundle_chains_correctly() {
        let engine = CountingPow::new();
        let pipeline = AttachmentPipeline::new(&engine);
        let trunk_anchor = "A".repeat(81);
        let branch_anchor = "B".repeat(81);

        let sealed = pipeline
            .attach(
                &trunk_anchor,
                &branch_anchor,
                9,
                &[record(1, 1), record(0, 1)],
            )
            .unwrap();

        assert_eq!(sealed.len(), 2);
        assert_eq!(engine.call_count(), 2);

        let first = Transaction::from_trytes(&sealed[0]).unwrap();
        assert_eq!(first.trunk, trunk_anchor);
        assert_eq!(first.branch, branch_anchor);

        let second = Transaction::from_trytes(&sealed[1]).unwrap();
        assert_eq!(second.trunk, transaction_hash(&sealed[0]).unwrap());
        // Non-terminal branch references reuse the original trunk anchor.
        assert_eq!(second.branch, trunk_anchor);
    }

    #[test]
    fn longer_bundle_trunks_form_a_chain() {
        let engine = CountingPow::new();
        let pipeline = AttachmentPipeline::new(&engine);
        let trunk_anchor = "A".repeat(81);

        let sealed = pipeline
            .attach(
                &trunk_anchor,
                &"B".repeat(81),
                9,
                &[record(3, 3), record(2, 3), record(1, 3), record(0, 3)],
            )
            .unwrap();

        assert_eq!(sealed.len(), 4);
        for i in 1..sealed.len() {
            let tx = Transaction::from_trytes(&sealed[i]).unwrap();
            assert_eq!(tx.trunk, transaction_hash(&sealed[i - 1]).unwrap());
            assert_eq!(tx.branch, trunk_anchor);
        }
    }

    #[test]
    fn attachment_window_is_stamped() {
        let engine = CountingPow::new();
        let pipeline = AttachmentPipeline::new(&engine);
        let sealed = pipeline
            .attach(&"A".repeat(81), &"B".repeat(81), 9, &[record(0, 0)])
            .unwrap();

        let tx = Transaction::from_trytes(&sealed[0]).unwrap();
        assert!(tx.attachment_timestamp > 1_600_000_000_000);
        assert_eq!(tx.attachment_timestamp_lower_bound, 0);
        assert_eq!(tx.attachment_timestamp_upper_bound, MAX_TIMESTAMP_VALUE);
    }

    #[test]
    fn out_of_order_bundle_fails_without_sealing() {
        let engine = CountingPow::new();
        let pipeline = AttachmentPipeline::new(&engine);

        // First record is not the bundle tail.
        let err = pipeline
            .attach(
                &"A".repeat(81),
                &"B".repeat(81),
                9,
                &[record(0, 1), record(1, 1)],
            )
            .unwrap_err();

        assert!(matches!(err, ApiError::BundleOrder { current: 0, last: 1 }));
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn engine_failure_aborts_the_bundle() {
        let engine = CountingPow::failing_at(1);
        let pipeline = AttachmentPipeline::new(&engine);

        let err = pipeline
            .attach(
                &"A".repeat(81),
                &"B".repeat(81),
                9,
                &[record(1, 1), record(0, 1)],
            )
            .unwrap_err();

        match err {
            ApiError::Pow { position, reason } => {
                assert_eq!(position, 1);
                assert!(reason.contains("difficulty not reached"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn engine_failure_on_last_record_still_returns_nothing() {
        let engine = CountingPow::failing_at(2);
        let pipeline = AttachmentPipeline::new(&engine);

        let result = pipeline.attach(
            &"A".repeat(81),
            &"B".repeat(81),
            9,
            &[record(2, 2), record(1, 2), record(0, 2)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn single_record_bundle_gets_both_anchors() {
        let engine = CountingPow::new();
        let pipeline = AttachmentPipeline::new(&engine);
        let sealed = pipeline
            .attach(&"C".repeat(81), &"D".repeat(81), 9, &[record(0, 0)])
            .unwrap();

        assert_eq!(sealed.len(), 1);
        let tx = Transaction::from_trytes(&sealed[0]).unwrap();
        assert_eq!(tx.trunk, "C".repeat(81));
        assert_eq!(tx.branch, "D".repeat(81));
    }
}
