//! Sums of numbers made of one block written exactly twice.

use crate::{MAX_DIGITS, periodic::repeated_block_sum, pow10};

/// Returns the sum of every mirror number of length `digits` lying in `[lo, hi]`.
///
/// A mirror number of even length `2L` is an `L`-digit block written twice,
/// `block * (10^L + 1)`. Odd lengths have no mirror numbers.
///
/// # Panics
///
/// Panics if `digits` exceeds [`MAX_DIGITS`].
///
/// # Examples
///
/// ```
/// use repdigit_core::mirror_bucket_sum;
///
/// assert_eq!(mirror_bucket_sum(2, 10, 99), 495);
/// // 1010 + 1111
/// assert_eq!(mirror_bucket_sum(4, 1000, 1200), 2121);
/// assert_eq!(mirror_bucket_sum(3, 100, 999), 0);
/// ```
#[must_use]
pub fn mirror_bucket_sum(digits: u32, lo: u64, hi: u64) -> u128 {
    assert!(digits <= MAX_DIGITS, "{digits}-digit mirror numbers overflow u64");
    if digits == 0 || !digits.is_multiple_of(2) {
        return 0;
    }
    let half = digits / 2;
    repeated_block_sum(half, pow10(half) + 1, lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::brute_force_mirror_sum;

    #[test]
    fn test_odd_lengths_are_empty() {
        for digits in [1, 3, 5, 17] {
            assert_eq!(mirror_bucket_sum(digits, 0, u64::MAX), 0);
        }
    }

    #[test]
    fn test_matches_brute_force() {
        for (digits, lo, hi) in [
            (2, 10, 99),
            (2, 12, 54),
            (4, 1000, 9999),
            (4, 1011, 1110),
            (4, 9899, 9999),
            (6, 123_122, 124_125),
        ] {
            assert_eq!(
                mirror_bucket_sum(digits, lo, hi),
                brute_force_mirror_sum(lo, hi),
                "digits={digits}, lo={lo}, hi={hi}"
            );
        }
    }

    #[test]
    fn test_largest_length() {
        // 999_999_999 repeated twice is the top of the 18-digit bucket
        let hi = pow10(18) - 1;
        assert_eq!(mirror_bucket_sum(18, hi, hi), u128::from(hi));
        assert_eq!(mirror_bucket_sum(18, hi - 1, hi - 1), 0);
    }

    #[test]
    #[should_panic(expected = "40-digit mirror numbers overflow u64")]
    fn test_too_many_digits_panics() {
        let _ = mirror_bucket_sum(40, 0, u64::MAX);
    }

    #[test]
    #[should_panic(expected = "19-digit mirror numbers overflow u64")]
    fn test_odd_length_past_max_digits_panics() {
        let _ = mirror_bucket_sum(19, 0, u64::MAX);
    }
}
