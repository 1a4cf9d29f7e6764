//! Range sums over arbitrary intervals.
//!
//! The interval is split into [`DigitBucket`]s and each bucket is summed in
//! closed form: the mirror sum through [`mirror_bucket_sum`], the periodic sum
//! through the signed [`COEFFICIENT_TABLE`] terms applied to
//! [`periodic_block_sum`]. The cost is bounded by the number of buckets times the
//! number of terms per bucket, independent of the interval's width.

use std::{iter::Sum, ops::Add};

use crate::{
    COEFFICIENT_TABLE, DigitBucket, DigitBuckets, DomainError, Sign, mirror_bucket_sum,
    periodic_block_sum,
};

/// Both range sums of one interval.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Add, derive_more::AddAssign)]
pub struct RangeSums {
    /// Sum of the numbers made of a block written exactly twice.
    pub mirror: u128,
    /// Sum of the numbers made of a block written two or more times.
    pub periodic: u128,
}

impl Sum for RangeSums {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl DigitBucket {
    /// Returns the sum of the bucket's mirror numbers.
    #[must_use]
    pub fn mirror_sum(&self) -> u128 {
        mirror_bucket_sum(self.digits(), self.start(), self.end())
    }

    /// Returns the sum of the bucket's periodic numbers, each counted once.
    #[must_use]
    pub fn periodic_sum(&self) -> u128 {
        let digits = self.digits();
        let (mut added, mut removed) = (0, 0);
        // buckets never exceed MAX_DIGITS, so the entry always exists
        for term in COEFFICIENT_TABLE[digits as usize] {
            let sum = periodic_block_sum(digits, term.period, self.start(), self.end());
            match term.sign {
                Sign::Plus => added += sum,
                Sign::Minus => removed += sum,
            }
        }
        debug_assert!(removed <= added);
        added - removed
    }

    /// Returns both sums of the bucket.
    #[must_use]
    pub fn sums(&self) -> RangeSums {
        RangeSums {
            mirror: self.mirror_sum(),
            periodic: self.periodic_sum(),
        }
    }
}

/// Returns the sum of every mirror number in `[lo, hi]`.
///
/// A mirror number is a digit block written exactly twice, such as `55`, `1010` or
/// `123123`. An inverted interval sums to `0`.
///
/// # Errors
///
/// Returns [`DomainError::TooManyDigits`] if the interval is non-empty and `hi`
/// has more than [`MAX_DIGITS`](crate::MAX_DIGITS) digits.
///
/// # Examples
///
/// ```
/// use repdigit_core::mirror_range_sum;
///
/// assert_eq!(mirror_range_sum(10, 99)?, 495);
/// assert_eq!(mirror_range_sum(1, 9999)?, 495_900);
/// # Ok::<(), repdigit_core::DomainError>(())
/// ```
pub fn mirror_range_sum(lo: u64, hi: u64) -> Result<u128, DomainError> {
    Ok(DigitBuckets::new(lo, hi)?
        .map(|bucket| bucket.mirror_sum())
        .sum())
}

/// Returns the sum of every periodic number in `[lo, hi]`.
///
/// A periodic number is a digit block written two or more times, such as `777`,
/// `1212` or `123123123`. Each number is counted once even when it repeats with
/// several periods. An inverted interval sums to `0`.
///
/// # Errors
///
/// Returns [`DomainError::TooManyDigits`] if the interval is non-empty and `hi`
/// has more than [`MAX_DIGITS`](crate::MAX_DIGITS) digits.
///
/// # Examples
///
/// ```
/// use repdigit_core::periodic_range_sum;
///
/// assert_eq!(periodic_range_sum(1, 999)?, 5490);
/// assert_eq!(periodic_range_sum(1, 9999)?, 500_895);
/// # Ok::<(), repdigit_core::DomainError>(())
/// ```
pub fn periodic_range_sum(lo: u64, hi: u64) -> Result<u128, DomainError> {
    Ok(DigitBuckets::new(lo, hi)?
        .map(|bucket| bucket.periodic_sum())
        .sum())
}

/// Returns both sums of `[lo, hi]` in a single pass over its buckets.
///
/// # Errors
///
/// Returns [`DomainError::TooManyDigits`] under the same conditions as
/// [`mirror_range_sum`] and [`periodic_range_sum`].
pub fn range_sums(lo: u64, hi: u64) -> Result<RangeSums, DomainError> {
    Ok(DigitBuckets::new(lo, hi)?.map(|bucket| bucket.sums()).sum())
}
