//! Error types for the range sums.

use crate::MAX_DIGITS;

/// An input outside the supported numeric domain.
///
/// The sums are only defined for numbers of at most [`MAX_DIGITS`] decimal digits.
/// Anything wider is a contract violation and is reported instead of being
/// truncated or silently counted as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DomainError {
    /// A range bound has more decimal digits than the coefficient table covers.
    #[display("{value} has {digits} decimal digits, at most {} are supported", MAX_DIGITS)]
    TooManyDigits {
        /// The offending bound.
        value: u64,
        /// Its decimal length.
        digits: u32,
    },
    /// A digit count with no coefficient table entry was requested.
    #[display("no coefficients for digit count {digits}, expected 1 to {}", MAX_DIGITS)]
    UnsupportedDigitCount {
        /// The requested digit count.
        digits: u32,
    },
}
