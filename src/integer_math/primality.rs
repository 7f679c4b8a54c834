// src/integer_math/primality.rs
//
// Primality Oracle
//
// Two interchangeable tests behind one entry point:
//
// Input Size          Test                Cost
// ─────────────────────────────────────────────────────────
// <= 40 bits          Trial Division      O(sqrt(n))
// > 40 bits           Miller-Rabin        O(k log^3 n)
//
// The Miller-Rabin path always runs the first twelve prime bases, which is
// exact for every n < 3.3 * 10^24, so both tests agree everywhere trial
// division is still practical. Random witnesses on top of that come from a
// seeded generator and never make the answer depend on the run.

use lazy_static::lazy_static;
use log::{debug, trace};
use num::integer::Roots;
use num::{BigUint, Integer, One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use crate::core::witness_random::WitnessRandom;
use crate::integer_math::sieve::PrimeSieve;

/// Primes below this bound are used to pre-filter Miller-Rabin candidates.
pub const SMALL_PRIME_LIMIT: u64 = 1000;

const WITNESS_BASES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

lazy_static! {
    static ref SMALL_PRIMES: Vec<u64> = PrimeSieve::new(SMALL_PRIME_LIMIT).primes().collect();
}

/// Which test the oracle picked for an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimalityMethod {
    TrialDivision,
    MillerRabin,
}

impl PrimalityMethod {
    pub fn name(&self) -> &str {
        match self {
            Self::TrialDivision => "Trial Division",
            Self::MillerRabin => "Miller-Rabin",
        }
    }
}

/// Configurable primality oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimalityTester {
    /// Inputs with at most this many bits use trial division
    pub trial_division_max_bits: u64,

    /// Random Miller-Rabin witnesses tried after the fixed bases
    pub extra_rounds: u32,

    /// Seed for the witness generator
    pub seed: u64,
}

impl Default for PrimalityTester {
    fn default() -> Self {
        PrimalityTester {
            trial_division_max_bits: 40,
            extra_rounds: 4,
            seed: 0x5eed,
        }
    }
}

impl PrimalityTester {
    pub fn method_for(&self, n: &BigUint) -> PrimalityMethod {
        if n.bits() <= self.trial_division_max_bits {
            PrimalityMethod::TrialDivision
        } else {
            PrimalityMethod::MillerRabin
        }
    }

    pub fn is_prime(&self, n: &BigUint) -> bool {
        let method = self.method_for(n);
        trace!("Testing {}-bit candidate with {}", n.bits(), method.name());

        match method {
            PrimalityMethod::TrialDivision => is_prime_trial_division(n),
            PrimalityMethod::MillerRabin => {
                let mut rng = WitnessRandom::new(self.seed);
                is_probable_prime(n, self.extra_rounds, &mut rng)
            }
        }
    }

    pub fn is_prime_u64(&self, n: u64) -> bool {
        self.is_prime(&BigUint::from(n))
    }
}

/// Decides primality of `n` with the default oracle settings.
///
/// # Examples
/// ```
/// use num::BigUint;
/// use prime_puzzles::integer_math::primality::is_prime;
///
/// assert!(is_prime(&BigUint::from(97u32)));
/// assert!(!is_prime(&BigUint::from(91u32)));
/// ```
pub fn is_prime(n: &BigUint) -> bool {
    PrimalityTester::default().is_prime(n)
}

/// Trial division by 2 and every odd number up to `floor(sqrt(n))`.
pub fn is_prime_trial_division(n: &BigUint) -> bool {
    if let Some(small) = n.to_u64() {
        return is_prime_trial_division_u64(small);
    }

    // n >= 2^64 from here on, so it is neither 0, 1 nor 2
    if n.is_even() {
        return false;
    }

    let bound = n.sqrt();
    match bound.to_u64() {
        Some(bound) => {
            debug!("Trial division: checking divisors up to {}", bound);
            let mut divisor = 3u64;
            while divisor <= bound {
                if (n % divisor).is_zero() {
                    return false;
                }
                divisor += 2;
            }
        }
        None => {
            debug!("Trial division: checking divisors up to {} (BigUint)", bound);
            let mut divisor = BigUint::from(3u32);
            while divisor <= bound {
                if (n % &divisor).is_zero() {
                    return false;
                }
                divisor += 2u32;
            }
        }
    }

    true
}

fn is_prime_trial_division_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let bound = n.sqrt();
    let mut divisor = 3u64;
    while divisor <= bound {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Miller-Rabin with a small-prime pre-filter, the fixed bases 2..=37 and
/// `extra_rounds` random witnesses.
pub fn is_probable_prime(n: &BigUint, extra_rounds: u32, rng: &mut WitnessRandom) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }

    for &p in SMALL_PRIMES.iter() {
        if n == &BigUint::from(p) {
            return true;
        }
        if (n % p).is_zero() {
            return false;
        }
    }

    // No factor below SMALL_PRIME_LIMIT, so n > SMALL_PRIME_LIMIT^2 or n is prime.
    if n < &BigUint::from(SMALL_PRIME_LIMIT * SMALL_PRIME_LIMIT) {
        return true;
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    for &base in &WITNESS_BASES {
        if !is_strong_probable_prime(n, &n_minus_one, &d, s, &BigUint::from(base)) {
            return false;
        }
    }

    for round in 0..extra_rounds {
        let witness = rng.next_witness(n);
        if !is_strong_probable_prime(n, &n_minus_one, &d, s, &witness) {
            debug!("Miller-Rabin: random witness {} rejected candidate in round {}", witness, round);
            return false;
        }
    }

    true
}

/// One Miller-Rabin round: `n - 1 = d * 2^s` with `d` odd.
fn is_strong_probable_prime(n: &BigUint, n_minus_one: &BigUint, d: &BigUint, s: u64, base: &BigUint) -> bool {
    let mut x = base.modpow(d, n);
    if x.is_one() || &x == n_minus_one {
        return true;
    }

    for _ in 1..s {
        x = (&x * &x) % n;
        if &x == n_minus_one {
            return true;
        }
        if x.is_one() {
            return false;
        }
    }

    false
}
