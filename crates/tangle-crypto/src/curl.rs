//! The Curl-P-81 sponge.
//!
//! A record's identifier is the 243-trit squeeze of the sponge after
//! absorbing all 8019 trits of the serialized record. Sealing a record
//! rewrites its nonce region and therefore its identifier.

use tangle_types::error::TypeResult;
use tangle_types::trits;

/// Trits per squeeze block (one identifier).
pub const HASH_TRITS: usize = 243;

/// Sponge state width in trits.
pub const STATE_LENGTH: usize = 729;

/// Transform rounds per permutation.
pub const NUMBER_OF_ROUNDS: usize = 81;

// Indexed by a + 4b + 5 for trit pair (a, b); positions 3 and 7 are
// unreachable padding.
const TRUTH_TABLE: [i8; 11] = [1, 0, -1, 2, 1, -1, 0, 2, -1, 0, 1];

/// Curl sponge over balanced trits.
pub struct Curl {
    state: [i8; STATE_LENGTH],
}

impl Default for Curl {
    fn default() -> Self {
        Self::new()
    }
}

impl Curl {
    pub fn new() -> Self {
        Self {
            state: [0; STATE_LENGTH],
        }
    }

    /// Reset the sponge to its initial state.
    pub fn reset(&mut self) {
        self.state = [0; STATE_LENGTH];
    }

    /// Absorb trits in 243-trit blocks, permuting after each block.
    pub fn absorb(&mut self, input: &[i8]) {
        for block in input.chunks(HASH_TRITS) {
            self.state[..block.len()].copy_from_slice(block);
            self.transform();
        }
    }

    /// Squeeze `length` trits out of the sponge.
    pub fn squeeze(&mut self, length: usize) -> Vec<i8> {
        let mut output = Vec::with_capacity(length);
        let mut remaining = length;
        while remaining > 0 {
            let take = remaining.min(HASH_TRITS);
            output.extend_from_slice(&self.state[..take]);
            self.transform();
            remaining -= take;
        }
        output
    }

    fn transform(&mut self) {
        let mut index = 0usize;
        for _ in 0..NUMBER_OF_ROUNDS {
            let previous = self.state;
            for trit in self.state.iter_mut() {
                let a = previous[index];
                index = if index < 365 { index + 364 } else { index - 365 };
                let b = previous[index];
                *trit = TRUTH_TABLE[(a + (b << 2) + 5) as usize];
            }
        }
    }
}

/// Derive a record's 81-tryte identifier from its serialized trytes.
pub fn transaction_hash(trytes: &str) -> TypeResult<String> {
    let input = trits::trits_from_trytes(trytes)?;
    let mut sponge = Curl::new();
    sponge.absorb(&input);
    let digest = sponge.squeeze(HASH_TRITS);
    trits::trytes_from_trits(&digest)
}
