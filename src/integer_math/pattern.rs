// src/integer_math/pattern.rs

use num::{BigUint, Num};

/// Builds the pattern number `12...n...21`.
///
/// The decimal forms of `1..=n` are concatenated, followed by those of
/// `n-1` down to `1`. Multi-digit terms are appended whole, so for `n = 11`
/// the digits read `1234567891011109876...1`. `n = 0` yields zero.
///
/// # Examples
/// ```
/// use num::BigUint;
/// use prime_puzzles::integer_math::pattern::next_pattern_number;
///
/// assert_eq!(next_pattern_number(4), BigUint::from(1234321u32));
/// ```
pub fn next_pattern_number(n: u64) -> BigUint {
    let digits = pattern_digits(n);
    if digits.is_empty() {
        return BigUint::from(0u32);
    }
    // The string holds only ASCII digits.
    BigUint::from_str_radix(&digits, 10).unwrap_or_default()
}

/// Decimal digit string of the pattern number for `n`.
pub fn pattern_digits(n: u64) -> String {
    let mut digits = String::new();
    for i in 1..=n {
        digits.push_str(&i.to_string());
    }
    for i in (1..n).rev() {
        digits.push_str(&i.to_string());
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the number arithmetically, handling the single-digit run and
    /// the multi-digit run as separate loops.
    fn split_at_nine(n: u64) -> BigUint {
        let mut acc = BigUint::from(0u32);
        let mut push = |i: u64| {
            let width = i.to_string().len() as u32;
            acc = &acc * BigUint::from(10u32).pow(width) + BigUint::from(i);
        };
        for i in 1..=n.min(9) {
            push(i);
        }
        for i in 10..=n {
            push(i);
        }
        for i in (10..n).rev() {
            push(i);
        }
        for i in (1..n.min(10)).rev() {
            push(i);
        }
        acc
    }

    #[test]
    fn test_small_patterns() {
        assert_eq!(next_pattern_number(1), BigUint::from(1u32));
        assert_eq!(next_pattern_number(2), BigUint::from(121u32));
        assert_eq!(next_pattern_number(3), BigUint::from(12321u32));
        assert_eq!(next_pattern_number(4), BigUint::from(1234321u32));
        assert_eq!(next_pattern_number(9), BigUint::from(12345678987654321u64));
    }

    #[test]
    fn test_zero_is_empty_pattern() {
        assert_eq!(next_pattern_number(0), BigUint::from(0u32));
    }

    #[test]
    fn test_multi_digit_terms_are_appended_whole() {
        assert_eq!(pattern_digits(10), "12345678910987654321");
        assert_eq!(pattern_digits(11), "123456789101110987654321");
    }

    #[test]
    fn test_single_loop_matches_split_loops() {
        for n in 1..=120 {
            assert_eq!(next_pattern_number(n), split_at_nine(n), "n = {}", n);
        }
    }

    #[test]
    fn test_digit_count() {
        // 1..=1000 has 2893 digits, 1..=999 has 2889
        assert_eq!(pattern_digits(1000).len(), 2893 + 2889);
    }
}
