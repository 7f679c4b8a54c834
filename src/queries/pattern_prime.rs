// src/queries/pattern_prime.rs
//
// Problem 1: first n in a range whose pattern number 12...n...21 is prime.

use log::{debug, info};
use num::BigUint;
use serde::Serialize;
use crate::core::search_range::SearchRange;
use crate::core::serialization::json_converters;
use crate::integer_math::pattern::next_pattern_number;
use crate::integer_math::primality::PrimalityTester;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternPrimeResult {
    pub n: Option<u64>,
    #[serde(serialize_with = "json_converters::serialize_option_biguint")]
    pub pattern_number: Option<BigUint>,
    pub is_prime: bool,
}

impl PatternPrimeResult {
    pub fn not_found() -> Self {
        PatternPrimeResult {
            n: None,
            pattern_number: None,
            is_prime: false,
        }
    }
}

pub fn pattern_prime_search(range: &SearchRange, tester: &PrimalityTester) -> PatternPrimeResult {
    info!("Pattern-prime search over n in [{}, {}]", range.start, range.end);

    for n in range.iter() {
        let candidate = next_pattern_number(n);
        debug!("n = {}: pattern number has {} bits", n, candidate.bits());

        if tester.is_prime(&candidate) {
            info!("Pattern number for n = {} is prime", n);
            return PatternPrimeResult {
                n: Some(n),
                pattern_number: Some(candidate),
                is_prime: true,
            };
        }
    }

    info!("No prime pattern number in range");
    PatternPrimeResult::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_pattern_numbers_are_not_prime() {
        // 1 is not prime; 121 = 11^2, 12321 = 111^2, ... up to n = 9
        let range = SearchRange::new(1, 9).unwrap();
        let result = pattern_prime_search(&range, &PrimalityTester::default());
        assert_eq!(result, PatternPrimeResult::not_found());
    }

    #[test]
    fn test_not_found_record_serializes_nulls() {
        let json = serde_json::to_string(&PatternPrimeResult::not_found()).unwrap();
        assert_eq!(json, r#"{"n":null,"pattern_number":null,"is_prime":false}"#);
    }

    #[test]
    fn test_first_prime_pattern_number_is_n_ten() {
        // 12345678910987654321 is prime
        let range = SearchRange::new(1, 60).unwrap();
        let tester = PrimalityTester::default();
        let result = pattern_prime_search(&range, &tester);
        assert_eq!(result.n, Some(10));
        assert_eq!(result.pattern_number, Some(BigUint::from(12345678910987654321u64)));
        assert!(result.is_prime);
        assert_eq!(next_pattern_number(10), BigUint::from(12345678910987654321u64));
    }
}
