//! The puzzle's textual range list.
//!
//! A puzzle input is a single line of comma-separated inclusive ranges:
//!
//! ```text
//! 11-22,95-115,998-1012
//! ```
//!
//! The part 1 answer is the mirror sum over every range, the part 2 answer the
//! periodic sum.
//!
//! # Examples
//!
//! ```
//! use repdigit_core::RangeList;
//!
//! let ranges: RangeList = "11-22,95-115,998-1012".parse()?;
//! assert_eq!(ranges.len(), 3);
//! assert_eq!(ranges.mirror_sum()?, 11 + 22 + 99 + 1010);
//! assert_eq!(ranges.periodic_sum()?, 11 + 22 + 99 + 111 + 999 + 1010);
//! assert_eq!(ranges.to_string(), "11-22,95-115,998-1012");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{
    fmt::{self, Display},
    num::ParseIntError,
    ops::Deref,
    str::FromStr,
};

use crate::{DomainError, RangeSums, range_sums};

/// Errors returned when parsing a [`IdRange`] or [`RangeList`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseRangeError {
    /// The input contains no ranges.
    #[display("range list is empty")]
    Empty,
    /// A range has no `-` between its bounds.
    #[display("missing '-' in range {fragment:?}")]
    MissingSeparator {
        /// The offending range text.
        fragment: String,
    },
    /// A bound is not a decimal `u64`.
    #[display("invalid bound {fragment:?}: {source}")]
    InvalidBound {
        /// The offending bound text.
        fragment: String,
        /// The underlying integer parse error.
        source: ParseIntError,
    },
}

/// An inclusive range of IDs, `lo-hi`.
///
/// `hi < lo` is allowed and denotes an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdRange {
    lo: u64,
    hi: u64,
}

impl IdRange {
    /// Creates the range `[lo, hi]`.
    #[must_use]
    pub const fn new(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    /// Returns the first ID.
    #[must_use]
    pub const fn lo(&self) -> u64 {
        self.lo
    }

    /// Returns the last ID (inclusive).
    #[must_use]
    pub const fn hi(&self) -> u64 {
        self.hi
    }

    /// Returns `true` if the range contains no IDs.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hi < self.lo
    }

    /// Returns both sums of the range.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TooManyDigits`] if the range is non-empty and its
    /// upper bound has more than [`MAX_DIGITS`](crate::MAX_DIGITS) digits.
    pub fn sums(&self) -> Result<RangeSums, DomainError> {
        range_sums(self.lo, self.hi)
    }
}

impl Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

impl FromStr for IdRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (lo, hi) = s
            .split_once('-')
            .ok_or_else(|| ParseRangeError::MissingSeparator {
                fragment: s.to_owned(),
            })?;
        Ok(Self::new(parse_bound(lo)?, parse_bound(hi)?))
    }
}

fn parse_bound(s: &str) -> Result<u64, ParseRangeError> {
    let s = s.trim();
    s.parse().map_err(|source| ParseRangeError::InvalidBound {
        fragment: s.to_owned(),
        source,
    })
}

/// A list of [`IdRange`]s, as found in a puzzle input.
#[derive(Debug, Default, Clone, PartialEq, Eq, derive_more::From)]
pub struct RangeList(Vec<IdRange>);

impl RangeList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a range.
    pub fn push(&mut self, range: IdRange) {
        self.0.push(range);
    }

    /// Returns both sums added over every range.
    ///
    /// Overlapping ranges contribute once per range.
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] raised by any range.
    pub fn sums(&self) -> Result<RangeSums, DomainError> {
        self.0.iter().map(IdRange::sums).sum()
    }

    /// Returns the mirror sum over every range (the part 1 answer).
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] raised by any range.
    pub fn mirror_sum(&self) -> Result<u128, DomainError> {
        Ok(self.sums()?.mirror)
    }

    /// Returns the periodic sum over every range (the part 2 answer).
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] raised by any range.
    pub fn periodic_sum(&self) -> Result<u128, DomainError> {
        Ok(self.sums()?.periodic)
    }
}

impl Deref for RangeList {
    type Target = [IdRange];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<IdRange> for RangeList {
    fn from_iter<T: IntoIterator<Item = IdRange>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RangeList {
    type Item = &'a IdRange;
    type IntoIter = std::slice::Iter<'a, IdRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for RangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            Display::fmt(range, f)?;
        }
        Ok(())
    }
}

impl FromStr for RangeList {
    type Err = ParseRangeError;

    /// Parses comma-separated ranges. Whitespace around ranges and blank entries
    /// (such as a trailing comma) are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranges = s
            .split(',')
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(IdRange::from_str)
            .collect::<Result<Self, _>>()?;
        if ranges.is_empty() {
            return Err(ParseRangeError::Empty);
        }
        Ok(ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
        1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
        824824821-824824827,2121212118-2121212124";

    #[test]
    fn test_sample_answers() {
        let ranges = SAMPLE.parse::<RangeList>().unwrap();
        assert_eq!(ranges.len(), 11);
        assert_eq!(ranges.mirror_sum(), Ok(1_227_775_554));
        assert_eq!(ranges.periodic_sum(), Ok(4_174_379_265));
    }

    #[test]
    fn test_display_round_trip() {
        let ranges = SAMPLE.parse::<RangeList>().unwrap();
        assert_eq!(ranges.to_string(), SAMPLE);
    }

    #[test]
    fn test_whitespace_and_trailing_comma() {
        let ranges = " 11-22 ,\n 95 - 115,\n".parse::<RangeList>().unwrap();
        assert_eq!(&ranges[..], [IdRange::new(11, 22), IdRange::new(95, 115)]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<RangeList>(), Err(ParseRangeError::Empty));
        assert_eq!(" , ".parse::<RangeList>(), Err(ParseRangeError::Empty));
        assert_eq!(
            "11-22,95".parse::<RangeList>(),
            Err(ParseRangeError::MissingSeparator {
                fragment: "95".to_owned()
            })
        );
        let err = "11-x".parse::<IdRange>().unwrap_err();
        assert!(matches!(
            &err,
            ParseRangeError::InvalidBound { fragment, .. } if fragment == "x"
        ));
        assert_eq!(err.to_string(), "invalid bound \"x\": invalid digit found in string");
        assert!(matches!(
            "-5-10".parse::<IdRange>(),
            Err(ParseRangeError::InvalidBound { .. })
        ));
    }

    #[test]
    fn test_empty_range() {
        let range = IdRange::new(22, 11);
        assert!(range.is_empty());
        assert_eq!(range.sums(), Ok(RangeSums::default()));
    }

    #[test]
    fn test_domain_error_propagates() {
        let ranges = RangeList::from(vec![
            IdRange::new(11, 22),
            IdRange::new(0, u64::MAX),
        ]);
        assert!(matches!(
            ranges.sums(),
            Err(DomainError::TooManyDigits { digits: 20, .. })
        ));
    }
}
