// src/core/search_range.rs

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use crate::error::PuzzleError;

/// Inclusive range of candidates a query scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRange {
    pub start: u64,
    pub end: u64,
}

impl SearchRange {
    /// Rejects ranges whose start lies past their end.
    pub fn new(start: u64, end: u64) -> Result<Self, PuzzleError> {
        if start > end {
            return Err(PuzzleError::InvalidRange { start, end });
        }
        Ok(SearchRange { start, end })
    }

    pub fn iter(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }

    /// Number of candidates; `u128` so the full `u64` range is representable.
    pub fn len(&self) -> u128 {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as u128 + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_bounds() {
        let range = SearchRange::new(2, 5).unwrap();
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
        assert_eq!(range.len(), 4);
    }

    #[test]
    fn test_single_value() {
        let range = SearchRange::new(7, 7).unwrap();
        assert_eq!(range.len(), 1);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_full_u64_range() {
        let range = SearchRange::new(0, u64::MAX).unwrap();
        assert!(!range.is_empty());
        assert_eq!(range.len(), u64::MAX as u128 + 1);
    }

    #[test]
    fn test_reversed_range_rejected() {
        match SearchRange::new(10, 3) {
            Err(PuzzleError::InvalidRange { start, end }) => {
                assert_eq!((start, end), (10, 3));
            }
            other => panic!("expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialized_reversed_range_is_empty() {
        let range: SearchRange = serde_json::from_str(r#"{"start":9,"end":1}"#).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.iter().count(), 0);
    }
}
