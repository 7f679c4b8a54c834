// src/queries/goldbach.rs
//
// Problem 7: one Goldbach pair for an even n > 2.

use log::info;
use serde::Serialize;
use crate::error::{PuzzleError, PuzzleResult};
use crate::integer_math::primality::PrimalityTester;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoldbachPair {
    pub n: u64,
    pub pair: Option<(u64, u64)>,
}

/// Pair `(i, n - i)` of primes with the smallest `i`.
pub fn goldbach_pair(n: u64, tester: &PrimalityTester) -> PuzzleResult<GoldbachPair> {
    if n % 2 != 0 {
        return Err(PuzzleError::NotEven(n));
    }
    if n <= 2 {
        return Err(PuzzleError::TooSmall(n));
    }

    for i in 2..n {
        if tester.is_prime_u64(i) && tester.is_prime_u64(n - i) {
            info!("Goldbach pair for {}: ({}, {})", n, i, n - i);
            return Ok(GoldbachPair { n, pair: Some((i, n - i)) });
        }
    }

    Ok(GoldbachPair { n, pair: None })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty() {
        let result = goldbach_pair(20, &PrimalityTester::default()).unwrap();
        assert_eq!(result, GoldbachPair { n: 20, pair: Some((3, 17)) });
    }

    #[test]
    fn test_smallest_even() {
        let result = goldbach_pair(4, &PrimalityTester::default()).unwrap();
        assert_eq!(result.pair, Some((2, 2)));
    }

    #[test]
    fn test_pairs_are_prime_and_minimal() {
        let tester = PrimalityTester::default();
        for n in (4..2000u64).step_by(2) {
            let (a, b) = goldbach_pair(n, &tester).unwrap().pair.unwrap();
            assert_eq!(a + b, n);
            assert!(tester.is_prime_u64(a) && tester.is_prime_u64(b));
            for i in 2..a {
                assert!(!(tester.is_prime_u64(i) && tester.is_prime_u64(n - i)));
            }
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let tester = PrimalityTester::default();
        assert!(matches!(goldbach_pair(7, &tester), Err(PuzzleError::NotEven(7))));
        assert!(matches!(goldbach_pair(2, &tester), Err(PuzzleError::TooSmall(2))));
        assert!(matches!(goldbach_pair(0, &tester), Err(PuzzleError::TooSmall(0))));
    }
}
