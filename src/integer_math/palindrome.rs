// src/integer_math/palindrome.rs
//
// Every even-length palindrome is a multiple of 11, so searches for
// palindromic primes beyond 11 only need odd-length mirrors.

use num::{BigUint, Num};

/// Mirrors `s` in full: `"123"` becomes `"123321"`.
pub fn palindrome_number(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    out.push_str(s);
    out.extend(s.chars().rev());
    out
}

/// Mirrors `s` around its last character: `"123"` becomes `"12321"`.
pub fn odd_palindrome_number(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    out.push_str(s);
    out.extend(s.chars().rev().skip(1));
    out
}

pub fn is_palindrome(s: &str) -> bool {
    s.bytes().eq(s.bytes().rev())
}

/// Odd-length palindrome built from the decimal digits of `prefix`.
pub fn odd_palindrome_from(prefix: &BigUint) -> BigUint {
    let digits = odd_palindrome_number(&prefix.to_str_radix(10));
    // Mirrored decimal digits always parse.
    BigUint::from_str_radix(&digits, 10).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_mirror() {
        assert_eq!(palindrome_number("123"), "123321");
        assert_eq!(palindrome_number("1"), "11");
        assert_eq!(palindrome_number(""), "");
    }

    #[test]
    fn test_odd_mirror() {
        assert_eq!(odd_palindrome_number("123"), "12321");
        assert_eq!(odd_palindrome_number("7"), "7");
        assert_eq!(odd_palindrome_from(&BigUint::from(1000u32)), BigUint::from(1000001u32));
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("12321"));
        assert!(is_palindrome("1221"));
        assert!(is_palindrome(""));
        assert!(!is_palindrome("1231"));
    }

    #[test]
    fn test_even_length_palindromes_divisible_by_eleven() {
        for prefix in 1u32..500 {
            let value: u64 = palindrome_number(&prefix.to_string()).parse().unwrap();
            assert_eq!(value % 11, 0, "{}", value);
        }
    }
}
