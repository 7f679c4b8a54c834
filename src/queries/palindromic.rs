// src/queries/palindromic.rs
//
// Problem 5: smallest palindromic prime with at least a given digit count.
//
// Even-length palindromes are multiples of 11, so beyond the two-digit case
// only odd lengths are searched, prefix by prefix in ascending order.

use log::{debug, info};
use num::BigUint;
use serde::Serialize;
use crate::core::serialization::json_converters;
use crate::integer_math::palindrome::odd_palindrome_from;
use crate::integer_math::primality::PrimalityTester;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalindromicPrimeResult {
    #[serde(serialize_with = "json_converters::serialize_option_biguint")]
    pub palindromic_prime: Option<BigUint>,
    pub digits: Option<usize>,
    pub candidates_tested: u64,
}

pub fn palindromic_prime_search(min_digits: u32, max_candidates: u64, tester: &PrimalityTester) -> PalindromicPrimeResult {
    info!("Palindromic prime search: at least {} digits, {} candidates max", min_digits, max_candidates);

    let mut tested = 0u64;
    let mut next_length = Some(min_digits.max(1));

    while let Some(length) = next_length {
        if tested >= max_candidates {
            break;
        }
        next_length = next_search_length(length);

        if length % 2 == 0 {
            if length == 2 {
                tested += 1;
                let eleven = BigUint::from(11u32);
                if tester.is_prime(&eleven) {
                    return found(eleven, tested);
                }
            }
            continue;
        }

        let half = length / 2 + 1;
        let mut prefix = BigUint::from(10u32).pow(half - 1);
        let end = BigUint::from(10u32).pow(half);
        debug!("Scanning {}-digit palindromes", length);

        while prefix < end && tested < max_candidates {
            // The palindrome ends in the prefix's leading digit.
            if length == 1 || has_odd_leading_digit(&prefix) {
                tested += 1;
                let candidate = odd_palindrome_from(&prefix);
                if tester.is_prime(&candidate) {
                    return found(candidate, tested);
                }
            }
            prefix += 1u32;
        }
    }

    info!("No palindromic prime within {} candidates", max_candidates);
    PalindromicPrimeResult {
        palindromic_prime: None,
        digits: None,
        candidates_tested: tested,
    }
}

/// Length scanned after `length`; even lengths step to the next odd one.
/// `None` once the next length would not fit in a `u32`.
fn next_search_length(length: u32) -> Option<u32> {
    if length % 2 == 0 {
        length.checked_add(1)
    } else {
        length.checked_add(2)
    }
}

fn has_odd_leading_digit(prefix: &BigUint) -> bool {
    match prefix.to_str_radix(10).as_bytes().first() {
        Some(b'1') | Some(b'3') | Some(b'7') | Some(b'9') => true,
        _ => false,
    }
}

fn found(value: BigUint, tested: u64) -> PalindromicPrimeResult {
    let digits = value.to_str_radix(10).len();
    info!("Found {}-digit palindromic prime after {} candidates", digits, tested);
    PalindromicPrimeResult {
        palindromic_prime: Some(value),
        digits: Some(digits),
        candidates_tested: tested,
    }
}
