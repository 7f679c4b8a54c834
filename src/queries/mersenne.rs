// src/queries/mersenne.rs
//
// Problem 3: prime exponents p in a range for which 2^p - 1 is prime.

use log::{debug, info};
use num::{BigUint, One};
use serde::Serialize;
use crate::core::search_range::SearchRange;
use crate::core::serialization::json_converters;
use crate::integer_math::lucas_lehmer::lucas_lehmer;
use crate::integer_math::primality::PrimalityTester;

/// How 2^p - 1 is tested once p is known to be prime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MersenneMethod {
    Oracle,
    LucasLehmer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MersenneEntry {
    pub p: u64,
    #[serde(serialize_with = "json_converters::serialize_biguint")]
    pub mersenne_prime: BigUint,
}

pub fn mersenne_number(p: u64) -> BigUint {
    (BigUint::one() << p) - 1u32
}

pub fn mersenne_search(range: &SearchRange, method: MersenneMethod, tester: &PrimalityTester) -> Vec<MersenneEntry> {
    info!("Mersenne search over p in [{}, {}] using {:?}", range.start, range.end, method);

    let mut results = Vec::new();
    for p in range.iter() {
        if !tester.is_prime_u64(p) {
            continue;
        }

        let candidate = mersenne_number(p);
        let is_prime = match method {
            MersenneMethod::Oracle => tester.is_prime(&candidate),
            MersenneMethod::LucasLehmer => lucas_lehmer(p, tester),
        };
        debug!("p = {}: 2^p - 1 prime = {}", p, is_prime);

        if is_prime {
            results.push(MersenneEntry { p, mersenne_prime: candidate });
        }
    }

    info!("Found {} Mersenne primes", results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exponents(entries: &[MersenneEntry]) -> Vec<u64> {
        entries.iter().map(|e| e.p).collect()
    }

    #[test]
    fn test_exponents_up_to_31() {
        let range = SearchRange::new(2, 31).unwrap();
        let results = mersenne_search(&range, MersenneMethod::Oracle, &PrimalityTester::default());
        assert_eq!(exponents(&results), vec![2, 3, 5, 7, 13, 17, 19, 31]);
        assert_eq!(results.last().unwrap().mersenne_prime, BigUint::from(2147483647u32));
    }

    #[test]
    fn test_methods_agree() {
        let range = SearchRange::new(2, 130).unwrap();
        let tester = PrimalityTester::default();
        let oracle = mersenne_search(&range, MersenneMethod::Oracle, &tester);
        let lucas = mersenne_search(&range, MersenneMethod::LucasLehmer, &tester);
        assert_eq!(oracle, lucas);
        assert_eq!(exponents(&oracle), vec![2, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127]);
    }

    #[test]
    fn test_empty_when_no_prime_exponent() {
        let range = SearchRange::new(8, 10).unwrap();
        assert!(mersenne_search(&range, MersenneMethod::Oracle, &PrimalityTester::default()).is_empty());
    }
}
