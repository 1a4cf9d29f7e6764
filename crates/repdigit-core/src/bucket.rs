//! Splitting an interval by decimal length.
//!
//! A [`DigitBucket`] is a maximal sub-range whose members all have the same number
//! of decimal digits. [`DigitBuckets`] walks an interval bucket by bucket:
//!
//! ```text
//! [5, 1234] -> [5, 9] (1 digit), [10, 99] (2), [100, 999] (3), [1000, 1234] (4)
//! ```
//!
//! Buckets are disjoint, ordered by increasing start, and their union is exactly
//! the input interval.

use std::iter::FusedIterator;

use crate::{DomainError, MAX_DIGITS, digit_count, pow10};

/// A maximal sub-range whose members all have `digits` decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitBucket {
    digits: u32,
    start: u64,
    end: u64,
}

impl DigitBucket {
    /// Returns the decimal length shared by every member of the bucket.
    #[must_use]
    #[inline]
    pub const fn digits(&self) -> u32 {
        self.digits
    }

    /// Returns the first member of the bucket.
    #[must_use]
    #[inline]
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Returns the last member of the bucket (inclusive).
    #[must_use]
    #[inline]
    pub const fn end(&self) -> u64 {
        self.end
    }
}

/// Iterator over the [`DigitBucket`]s of an inclusive interval.
///
/// # Examples
///
/// ```
/// use repdigit_core::DigitBuckets;
///
/// let buckets = DigitBuckets::new(5, 1234)?
///     .map(|b| (b.digits(), b.start(), b.end()))
///     .collect::<Vec<_>>();
/// assert_eq!(
///     buckets,
///     [(1, 5, 9), (2, 10, 99), (3, 100, 999), (4, 1000, 1234)]
/// );
///
/// assert_eq!(DigitBuckets::new(10, 9)?.count(), 0);
/// # Ok::<(), repdigit_core::DomainError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DigitBuckets {
    next: Option<u64>,
    hi: u64,
}

impl DigitBuckets {
    /// Creates the bucket iterator for `[lo, hi]`.
    ///
    /// An inverted interval (`hi < lo`) yields no buckets.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TooManyDigits`] if the interval is non-empty and `hi`
    /// has more than [`MAX_DIGITS`] decimal digits.
    pub fn new(lo: u64, hi: u64) -> Result<Self, DomainError> {
        if hi < lo {
            return Ok(Self { next: None, hi });
        }
        let digits = digit_count(hi);
        if digits > MAX_DIGITS {
            return Err(DomainError::TooManyDigits { value: hi, digits });
        }
        Ok(Self { next: Some(lo), hi })
    }
}

impl Iterator for DigitBuckets {
    type Item = DigitBucket;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next?;
        let digits = digit_count(start);
        let limit = pow10(digits) - 1;
        let end = self.hi.min(limit);
        self.next = (end < self.hi).then_some(limit + 1);
        Some(DigitBucket { digits, start, end })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(start) = self.next else {
            return (0, Some(0));
        };
        let remaining = (digit_count(self.hi) - digit_count(start) + 1) as usize;
        (remaining, Some(remaining))
    }
}

impl FusedIterator for DigitBuckets {}
impl ExactSizeIterator for DigitBuckets {}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets(lo: u64, hi: u64) -> Vec<(u32, u64, u64)> {
        DigitBuckets::new(lo, hi)
            .unwrap()
            .map(|b| (b.digits(), b.start(), b.end()))
            .collect()
    }

    #[test]
    fn test_single_bucket() {
        assert_eq!(buckets(10, 99), [(2, 10, 99)]);
        assert_eq!(buckets(42, 42), [(2, 42, 42)]);
        assert_eq!(buckets(0, 9), [(1, 0, 9)]);
    }

    #[test]
    fn test_spanning_buckets() {
        assert_eq!(buckets(95, 115), [(2, 95, 99), (3, 100, 115)]);
        assert_eq!(buckets(9, 10), [(1, 9, 9), (2, 10, 10)]);
        assert_eq!(buckets(99, 1000), [(2, 99, 99), (3, 100, 999), (4, 1000, 1000)]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert!(buckets(100, 99).is_empty());
        // wide but inverted bounds are not a domain violation
        assert!(DigitBuckets::new(u64::MAX, 0).unwrap().next().is_none());
    }

    #[test]
    fn test_full_domain() {
        let all = buckets(0, pow10(MAX_DIGITS) - 1);
        assert_eq!(all.len(), MAX_DIGITS as usize);
        for window in all.windows(2) {
            assert_eq!(window[0].2 + 1, window[1].1);
            assert_eq!(window[0].0 + 1, window[1].0);
        }
        assert_eq!(all.last(), Some(&(18, pow10(17), pow10(18) - 1)));
    }

    #[test]
    fn test_size_hint_is_exact() {
        let mut iter = DigitBuckets::new(5, 1234).unwrap();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
        iter.by_ref().for_each(drop);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_too_many_digits() {
        assert_eq!(
            DigitBuckets::new(1, pow10(MAX_DIGITS)).unwrap_err(),
            DomainError::TooManyDigits {
                value: pow10(MAX_DIGITS),
                digits: 19,
            }
        );
    }
}
