//! Brute-force reference implementations.
//!
//! These functions inspect decimal strings one number at a time. They are far too
//! slow for real inputs but trivially correct, which makes them the oracle for
//! unit tests, property tests and benchmarks of the closed-form sums.
//!
//! # Example
//!
//! ```
//! use repdigit_core::{periodic_range_sum, testing};
//!
//! let (lo, hi) = (95, 115);
//! assert_eq!(
//!     periodic_range_sum(lo, hi)?,
//!     testing::brute_force_periodic_sum(lo, hi)
//! );
//! # Ok::<(), repdigit_core::DomainError>(())
//! ```

/// Returns `true` if the decimal string of `n` is its first `period` digits
/// repeated with no leftover digits.
///
/// A number trivially repeats with its own length as period.
#[must_use]
pub fn digits_repeat(n: u64, period: u32) -> bool {
    let text = n.to_string();
    let bytes = text.as_bytes();
    let period = period as usize;
    period > 0
        && bytes.len().is_multiple_of(period)
        && bytes.chunks(period).all(|chunk| chunk == &bytes[..period])
}

/// Returns `true` if `n` is a block written exactly twice, e.g. `1212`.
#[must_use]
pub fn is_mirror(n: u64) -> bool {
    let digits = crate::digit_count(n);
    digits.is_multiple_of(2) && digits_repeat(n, digits / 2)
}

/// Returns `true` if `n` is a block written two or more times, e.g. `121212`.
#[must_use]
pub fn is_periodic(n: u64) -> bool {
    let digits = crate::digit_count(n);
    (1..digits).any(|period| digits.is_multiple_of(period) && digits_repeat(n, period))
}

/// Sums every mirror number in `[lo, hi]` by enumeration.
#[must_use]
pub fn brute_force_mirror_sum(lo: u64, hi: u64) -> u128 {
    (lo..=hi).filter(|&n| is_mirror(n)).map(u128::from).sum()
}

/// Sums every periodic number in `[lo, hi]` by enumeration.
#[must_use]
pub fn brute_force_periodic_sum(lo: u64, hi: u64) -> u128 {
    (lo..=hi).filter(|&n| is_periodic(n)).map(u128::from).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        for n in [11, 99, 1010, 123_123, 1_188_511_885] {
            assert!(is_mirror(n), "{n}");
            assert!(is_periodic(n), "{n}");
        }
        for n in [111, 121_212, 2_121_212_121, 824_824_824] {
            assert!(!is_mirror(n), "{n}");
            assert!(is_periodic(n), "{n}");
        }
        for n in [0, 7, 10, 101, 1001, 123_412_341] {
            assert!(!is_mirror(n), "{n}");
            assert!(!is_periodic(n), "{n}");
        }
    }

    #[test]
    fn test_digits_repeat() {
        assert!(digits_repeat(1111, 1));
        assert!(digits_repeat(1111, 2));
        assert!(digits_repeat(1111, 4));
        assert!(!digits_repeat(1111, 3));
        assert!(!digits_repeat(1111, 0));
    }

    #[test]
    fn test_small_sums() {
        assert_eq!(brute_force_mirror_sum(10, 99), 495);
        assert_eq!(brute_force_periodic_sum(95, 115), 99 + 111);
        assert_eq!(brute_force_periodic_sum(115, 95), 0);
    }
}
