//! Closed-form sums over repeated-digit numbers.
//!
//! This crate computes two aggregates over an inclusive interval `[lo, hi]` of
//! natural numbers without enumerating the interval:
//!
//! - the **mirror sum**: the sum of every number whose decimal string is a block
//!   written exactly twice (`77`, `1212`, `123123`);
//! - the **periodic sum**: the sum of every number whose decimal string is a block
//!   written two or more times (`777`, `1212`, `121212`), each counted once.
//!
//! # Overview
//!
//! The computation is layered, leaves first:
//!
//! 1. [`series`] - closed-form sum of a contiguous integer range.
//! 2. [`bucket`] - splits an interval into sub-ranges sharing a decimal length.
//! 3. [`periodic`] - sums repeated-block numbers of a fixed length and period.
//! 4. [`table`] - signed inclusion–exclusion terms over the divisors of a length.
//! 5. [`mirror`] - the two-repetition special case.
//! 6. [`aggregate`] - drives the buckets and combines the primitives.
//!
//! [`range`] adds the puzzle's textual range-list format on top, and [`testing`]
//! provides brute-force reference implementations.
//!
//! All functions are pure. Every intermediate value and every result is a `u128`,
//! so no supported input can overflow.
//!
//! # Examples
//!
//! ```
//! use repdigit_core::{mirror_range_sum, periodic_range_sum};
//!
//! // 11, 22, ..., 99
//! assert_eq!(mirror_range_sum(10, 99)?, 495);
//! // 99 and 111
//! assert_eq!(periodic_range_sum(95, 115)?, 210);
//! // inverted ranges are empty
//! assert_eq!(periodic_range_sum(115, 95)?, 0);
//! # Ok::<(), repdigit_core::DomainError>(())
//! ```

pub mod aggregate;
pub mod bucket;
pub mod digits;
pub mod error;
pub mod mirror;
pub mod periodic;
pub mod range;
pub mod series;
pub mod table;
pub mod testing;

pub use self::{
    aggregate::{RangeSums, mirror_range_sum, periodic_range_sum, range_sums},
    bucket::{DigitBucket, DigitBuckets},
    digits::{MAX_DIGITS, digit_count, pow10},
    error::DomainError,
    mirror::mirror_bucket_sum,
    periodic::{periodic_block_sum, repeat_multiplier},
    range::{IdRange, ParseRangeError, RangeList},
    series::series_sum,
    table::{COEFFICIENT_TABLE, PeriodTerm, Sign, coefficients, derive_coefficients},
};
