//! Proof-of-work sealing.
//!
//! The attachment pipeline treats the engine as an opaque collaborator:
//! fully-referenced record trytes plus a difficulty target in, sealed
//! trytes (or a failure with a readable reason) out.

use tangle_types::constants::TRANSACTION_LENGTH;
use tangle_types::trits;
use tracing::debug;

use crate::curl::{Curl, HASH_TRITS};
use crate::error::{PowError, PowResult};

/// Seals a record so its identifier satisfies a difficulty target.
///
/// Implementations may block; the pipeline invokes them sequentially.
pub trait PowEngine: Send + Sync {
    /// Seal `trytes` so the derived identifier ends in
    /// `min_weight_magnitude` zero trits.
    fn seal(&self, trytes: &str, min_weight_magnitude: u8) -> PowResult<String>;
}

/// Reference engine: brute-force search over the 27-tryte nonce region.
///
/// Correct but unoptimized; cost grows by a factor of three per unit of
/// difficulty.
pub struct CurlPow;

impl PowEngine for CurlPow {
    fn seal(&self, trytes: &str, min_weight_magnitude: u8) -> PowResult<String> {
        let difficulty = min_weight_magnitude as usize;
        if difficulty == 0 || difficulty > HASH_TRITS / 3 {
            return Err(PowError::InvalidDifficulty(min_weight_magnitude));
        }
        if trytes.len() != TRANSACTION_LENGTH {
            return Err(PowError::Codec(tangle_types::TypeError::InvalidLength {
                expected: TRANSACTION_LENGTH,
                actual: trytes.len(),
            }));
        }

        let mut record = trits::trits_from_trytes(trytes)?;
        let nonce_start = record.len() - 81;

        let mut attempts: i64 = 0;
        loop {
            let nonce = trits::trits_from_value(attempts, 81)?;
            record[nonce_start..].copy_from_slice(&nonce);

            let mut sponge = Curl::new();
            sponge.absorb(&record);
            let digest = sponge.squeeze(HASH_TRITS);
            if digest[HASH_TRITS - difficulty..].iter().all(|&t| t == 0) {
                debug!(attempts, difficulty, "nonce found");
                return trits::trytes_from_trits(&record).map_err(PowError::from);
            }

            attempts = attempts
                .checked_add(1)
                .ok_or_else(|| PowError::Engine("nonce space exhausted".into()))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curl::transaction_hash;

    #[test]
    fn zero_difficulty_rejected() {
        let err = CurlPow.seal(&"9".repeat(2673), 0).unwrap_err();
        assert_eq!(err, PowError::InvalidDifficulty(0));
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(CurlPow.seal("ABC", 1).is_err());
    }

    #[test]
    fn sealed_identifier_meets_difficulty() {
        let sealed = CurlPow.seal(&"9".repeat(2673), 2).unwrap();
        let hash = transaction_hash(&sealed).unwrap();
        let hash_trits = trits::trits_from_trytes(&hash).unwrap();
        assert!(hash_trits[HASH_TRITS - 2..].iter().all(|&t| t == 0));
    }

    #[test]
    fn seal_rewrites_only_the_nonce() {
        let record = "9".repeat(2673);
        let sealed = CurlPow.seal(&record, 1).unwrap();
        assert_eq!(sealed.len(), 2673);
        assert_eq!(&sealed[..2646], &record[..2646]);
    }
}
