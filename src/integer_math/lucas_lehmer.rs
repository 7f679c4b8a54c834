// src/integer_math/lucas_lehmer.rs
//
// Lucas-Lehmer: for an odd prime p, M = 2^p - 1 is prime iff s(p-2) == 0
// where s(0) = 4 and s(k+1) = s(k)^2 - 2 mod M.

use log::debug;
use num::{BigUint, One, Zero};
use crate::integer_math::primality::PrimalityTester;

/// Exact primality test for the Mersenne number `2^p - 1`.
///
/// `tester` decides whether the exponent itself is prime.
pub fn lucas_lehmer(p: u64, tester: &PrimalityTester) -> bool {
    if p == 2 {
        return true;
    }
    if !tester.is_prime_u64(p) {
        // 2^ab - 1 is divisible by 2^a - 1
        return false;
    }

    let m = (BigUint::one() << p) - 1u32;
    let two = BigUint::from(2u32);
    let mut s = BigUint::from(4u32);
    for _ in 0..p - 2 {
        s = (&s * &s + &m - &two) % &m;
    }

    debug!("Lucas-Lehmer: p = {}, residue zero = {}", p, s.is_zero());
    s.is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer_math::primality::is_prime;

    #[test]
    fn test_known_exponents_up_to_127() {
        let tester = PrimalityTester::default();
        let known = [2u64, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127];
        for p in 0..=127 {
            assert_eq!(lucas_lehmer(p, &tester), known.contains(&p), "p = {}", p);
        }
    }

    #[test]
    fn test_agrees_with_oracle() {
        let tester = PrimalityTester::default();
        for p in 2..=64u64 {
            let m = (BigUint::one() << p) - 1u32;
            assert_eq!(lucas_lehmer(p, &tester), is_prime(&m), "p = {}", p);
        }
    }

    #[test]
    fn test_uses_callers_tester_for_exponent() {
        // Pure trial division and pure Miller-Rabin both see 13 as prime and 15 as composite
        let trial_only = PrimalityTester { trial_division_max_bits: 64, ..PrimalityTester::default() };
        let mr_only = PrimalityTester { trial_division_max_bits: 0, ..PrimalityTester::default() };
        for tester in [trial_only, mr_only] {
            assert!(lucas_lehmer(13, &tester));
            assert!(!lucas_lehmer(15, &tester));
            assert!(!lucas_lehmer(11, &tester));
        }
    }

    #[test]
    fn test_exponent_2281() {
        let tester = PrimalityTester::default();
        assert!(lucas_lehmer(2281, &tester));
        assert!(!lucas_lehmer(2297, &tester));
    }
}
