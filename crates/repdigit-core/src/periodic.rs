//! Sums of numbers built by repeating a digit block.
//!
//! A periodic number of length `D` with period `L` (where `L` divides `D`) is an
//! `L`-digit block without a leading zero, written `D / L` times. It equals
//! `block * mult(D, L)`, where `mult(D, L) = 1 + 10^L + 10^(2L) + ...` has `D / L`
//! terms. For example `123123123 = 123 * 1_001_001`.
//!
//! Summing every such number inside `[lo, hi]` therefore reduces to summing the
//! blocks in `[ceil(lo / mult), floor(hi / mult)]`, clamped to the `L`-digit
//! range, and scaling by `mult`.

use crate::{MAX_DIGITS, pow10, series_sum};

/// Returns `mult(digits, period)`, the number that turns a `period`-digit block
/// into its `digits`-digit repetition.
///
/// # Panics
///
/// Panics if `digits` exceeds [`MAX_DIGITS`].
///
/// # Examples
///
/// ```
/// use repdigit_core::repeat_multiplier;
///
/// assert_eq!(repeat_multiplier(6, 2), 10_101);
/// assert_eq!(repeat_multiplier(6, 3), 1_001);
/// assert_eq!(repeat_multiplier(4, 1), 1_111);
/// assert_eq!(123 * repeat_multiplier(9, 3), 123_123_123);
/// ```
#[must_use]
pub fn repeat_multiplier(digits: u32, period: u32) -> u64 {
    assert!(digits <= MAX_DIGITS, "{digits}-digit repetitions overflow u64");
    debug_assert!(period > 0 && digits.is_multiple_of(period));
    let step = pow10(period);
    (0..digits / period).fold(0, |mult, _| mult * step + 1)
}

/// Returns the sum of every periodic number of length `digits` and period
/// `period` lying in `[lo, hi]`.
///
/// A number is included once for each period it admits, so `1111` is counted by
/// both `period = 1` and `period = 2`. The [`table`](crate::table) terms remove
/// that overlap.
///
/// `period` must be a proper divisor of `digits`. This holds for every
/// [`PeriodTerm`](crate::PeriodTerm) in the coefficient table and is only checked
/// in debug builds.
///
/// # Panics
///
/// Panics if `digits` exceeds [`MAX_DIGITS`].
///
/// # Examples
///
/// ```
/// use repdigit_core::periodic_block_sum;
///
/// // every "abab" number: blocks 10..=99 times 101
/// assert_eq!(periodic_block_sum(4, 2, 1000, 9999), 495_405);
/// // 1212 and 1313
/// assert_eq!(periodic_block_sum(4, 2, 1200, 1399), 2525);
/// ```
#[must_use]
pub fn periodic_block_sum(digits: u32, period: u32, lo: u64, hi: u64) -> u128 {
    debug_assert!(period < digits, "period {period} must be shorter than {digits}");
    repeated_block_sum(period, repeat_multiplier(digits, period), lo, hi)
}

/// Sums `block * mult` over every `period`-digit block whose product lies in
/// `[lo, hi]`.
pub(crate) fn repeated_block_sum(period: u32, mult: u64, lo: u64, hi: u64) -> u128 {
    let lower = lo.div_ceil(mult).max(pow10(period - 1));
    let upper = (hi / mult).min(pow10(period) - 1);
    u128::from(mult) * series_sum(lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::digits_repeat;

    fn brute_force(digits: u32, period: u32, lo: u64, hi: u64) -> u128 {
        (lo..=hi)
            .filter(|&n| crate::digit_count(n) == digits && digits_repeat(n, period))
            .map(u128::from)
            .sum()
    }

    #[test]
    fn test_repeat_multiplier() {
        assert_eq!(repeat_multiplier(2, 1), 11);
        assert_eq!(repeat_multiplier(4, 2), 101);
        assert_eq!(repeat_multiplier(18, 1), 111_111_111_111_111_111);
        assert_eq!(repeat_multiplier(18, 9), 1_000_000_001);
        assert_eq!(repeat_multiplier(5, 5), 1);
    }

    #[test]
    fn test_full_length_bucket() {
        assert_eq!(periodic_block_sum(4, 2, 1000, 9999), 101 * 4905);
        assert_eq!(periodic_block_sum(2, 1, 10, 99), 495);
        assert_eq!(periodic_block_sum(3, 1, 100, 999), 111 * 45);
    }

    #[test]
    fn test_partial_bounds() {
        for (lo, hi) in [(1000, 1010), (1010, 1010), (1011, 1111), (4546, 9898), (9900, 9999)] {
            assert_eq!(periodic_block_sum(4, 2, lo, hi), brute_force(4, 2, lo, hi));
            assert_eq!(periodic_block_sum(4, 1, lo, hi), brute_force(4, 1, lo, hi));
        }
        for (lo, hi) in [(100_000, 999_999), (123_123, 123_124), (123_124, 124_123)] {
            for period in [1, 2, 3] {
                assert_eq!(
                    periodic_block_sum(6, period, lo, hi),
                    brute_force(6, period, lo, hi)
                );
            }
        }
    }

    #[test]
    fn test_empty_when_no_block_fits() {
        assert_eq!(periodic_block_sum(4, 2, 1011, 1110), 0);
        assert_eq!(periodic_block_sum(4, 2, 2000, 1000), 0);
    }

    #[test]
    fn test_largest_length() {
        let hi = pow10(18) - 1;
        assert_eq!(periodic_block_sum(18, 1, hi, hi), u128::from(hi));
        let mult = u128::from(repeat_multiplier(18, 9));
        let blocks = series_sum(pow10(8), pow10(9) - 1);
        assert_eq!(periodic_block_sum(18, 9, pow10(17), hi), mult * blocks);
    }

    #[test]
    #[should_panic(expected = "21-digit repetitions overflow u64")]
    fn test_too_many_digits_panics() {
        let _ = periodic_block_sum(21, 1, 0, u64::MAX);
    }

    #[test]
    #[should_panic(expected = "19-digit repetitions overflow u64")]
    fn test_multiplier_past_max_digits_panics() {
        let _ = repeat_multiplier(19, 1);
    }
}
