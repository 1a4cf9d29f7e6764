//! Arithmetic-series primitive.

/// Returns `lo + (lo + 1) + ... + hi`, or `0` if `hi < lo`.
///
/// Uses the closed form `(hi - lo + 1)(lo + hi) / 2` in `u128`. One of the two
/// factors is always even; it is halved before multiplying so the product stays
/// below `2^128` for every pair of `u64` inputs.
///
/// # Examples
///
/// ```
/// use repdigit_core::series_sum;
///
/// assert_eq!(series_sum(1, 100), 5050);
/// assert_eq!(series_sum(5, 5), 5);
/// assert_eq!(series_sum(6, 5), 0);
/// ```
#[must_use]
pub fn series_sum(lo: u64, hi: u64) -> u128 {
    if hi < lo {
        return 0;
    }
    let count = u128::from(hi - lo) + 1;
    let ends = u128::from(lo) + u128::from(hi);
    if count.is_multiple_of(2) {
        (count / 2) * ends
    } else {
        // odd count => lo and hi share parity
        count * (ends / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_empty() {
        assert_eq!(series_sum(5, 5), 5);
        assert_eq!(series_sum(6, 5), 0);
        assert_eq!(series_sum(0, 0), 0);
        assert_eq!(series_sum(u64::MAX, 0), 0);
    }

    #[test]
    fn test_matches_iteration() {
        for lo in 0..40 {
            for hi in 0..40 {
                let expected: u128 = (lo..=hi).map(u128::from).sum();
                assert_eq!(series_sum(lo, hi), expected, "lo={lo}, hi={hi}");
            }
        }
    }

    #[test]
    fn test_full_u64_domain_is_exact() {
        let max = u128::from(u64::MAX);
        assert_eq!(series_sum(0, u64::MAX), max * (max + 1) / 2);
        assert_eq!(series_sum(1, u64::MAX), max * (max + 1) / 2);
        assert_eq!(series_sum(u64::MAX, u64::MAX), max);
        assert_eq!(series_sum(u64::MAX - 1, u64::MAX), 2 * max - 1);
    }
}
