// src/core/witness_random.rs

use num::BigUint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded generator for Miller-Rabin witnesses.
///
/// The seed is fixed per tester, so a given input always sees the same
/// witnesses and the oracle stays deterministic.
pub struct WitnessRandom {
    rng: ChaCha8Rng,
}

impl WitnessRandom {
    pub fn new(seed: u64) -> Self {
        WitnessRandom {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.random()
    }

    /// Witness in `[2, n - 2]`. Callers guarantee `n > 4`.
    pub fn next_witness(&mut self, n: &BigUint) -> BigUint {
        let span = n - 3u32;
        let raw = BigUint::from(self.next_u64()) << 64 | BigUint::from(self.next_u64());
        raw % span + 2u32
    }
}
