//! Inclusion–exclusion coefficients over the divisors of a decimal length.
//!
//! A `D`-digit number is periodic when its minimal period is a proper divisor of
//! `D`. Every such period divides `D / p` for some prime `p | D`, so the periodic
//! numbers are the union of the sets `P(D / p)`, where `P(L)` holds the numbers
//! that repeat with period `L`. Since `P(a) ∩ P(b) = P(gcd(a, b))`,
//! inclusion–exclusion over the distinct primes of `D` gives
//!
//! ```text
//! periodic(D) = Σ_{k | D, k > 1 square-free} -μ(k) · P(D / k)
//! ```
//!
//! For `D = 6` that is `P(3) + P(2) - P(1)`: `111111` lies in both `P(2)` and
//! `P(3)` and is subtracted once through `P(1)`.
//!
//! [`COEFFICIENT_TABLE`] holds these terms for every supported length, and
//! [`derive_coefficients`] recomputes them from the divisor lattice.

use std::fmt::{self, Display};

use crate::{DomainError, MAX_DIGITS};

/// The sign of an inclusion–exclusion term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// The term is added.
    Plus,
    /// The term is subtracted.
    Minus,
}

impl Sign {
    /// Returns `+1` or `-1`.
    #[must_use]
    #[inline]
    pub const fn value(self) -> i8 {
        match self {
            Self::Plus => 1,
            Self::Minus => -1,
        }
    }

    /// Returns the sign for an inclusion–exclusion level, counted from 1.
    ///
    /// Odd levels add, even levels subtract.
    #[must_use]
    #[inline]
    pub const fn for_level(level: usize) -> Self {
        if level % 2 == 1 { Self::Plus } else { Self::Minus }
    }
}

/// A signed period length in a coefficient table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodTerm {
    /// The period length `L`, a proper divisor of the digit count.
    pub period: u32,
    /// Whether the term is added or subtracted.
    pub sign: Sign,
}

impl PeriodTerm {
    /// Creates an added term.
    #[must_use]
    pub const fn plus(period: u32) -> Self {
        Self {
            period,
            sign: Sign::Plus,
        }
    }

    /// Creates a subtracted term.
    #[must_use]
    pub const fn minus(period: u32) -> Self {
        Self {
            period,
            sign: Sign::Minus,
        }
    }
}

impl Display for PeriodTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{:+})", self.period, self.sign.value())
    }
}

const fn p(period: u32) -> PeriodTerm {
    PeriodTerm::plus(period)
}

const fn m(period: u32) -> PeriodTerm {
    PeriodTerm::minus(period)
}

/// Inclusion–exclusion terms for each decimal length, indexed by digit count.
///
/// Index `0` is unused. Within an entry, terms are ordered by inclusion–exclusion
/// level, then by ascending period.
///
/// # Examples
///
/// ```
/// use repdigit_core::{COEFFICIENT_TABLE, PeriodTerm};
///
/// assert_eq!(
///     COEFFICIENT_TABLE[6],
///     [PeriodTerm::plus(2), PeriodTerm::plus(3), PeriodTerm::minus(1)]
/// );
/// assert!(COEFFICIENT_TABLE[1].is_empty());
/// ```
pub const COEFFICIENT_TABLE: [&[PeriodTerm]; MAX_DIGITS as usize + 1] = [
    &[],
    &[],
    &[p(1)],
    &[p(1)],
    &[p(2)],
    &[p(1)],
    &[p(2), p(3), m(1)],
    &[p(1)],
    &[p(4)],
    &[p(3)],
    &[p(2), p(5), m(1)],
    &[p(1)],
    &[p(4), p(6), m(2)],
    &[p(1)],
    &[p(2), p(7), m(1)],
    &[p(3), p(5), m(1)],
    &[p(8)],
    &[p(1)],
    &[p(6), p(9), m(3)],
];

/// Returns the coefficient table entry for `digits`.
///
/// # Errors
///
/// Returns [`DomainError::UnsupportedDigitCount`] if `digits` is `0` or greater
/// than [`MAX_DIGITS`].
pub fn coefficients(digits: u32) -> Result<&'static [PeriodTerm], DomainError> {
    if digits == 0 || digits > MAX_DIGITS {
        return Err(DomainError::UnsupportedDigitCount { digits });
    }
    Ok(COEFFICIENT_TABLE[digits as usize])
}

/// Computes the inclusion–exclusion terms for any digit count from its prime
/// factors.
///
/// Produces the same terms, in the same order, as [`COEFFICIENT_TABLE`] for every
/// length it covers.
///
/// # Examples
///
/// ```
/// use repdigit_core::{PeriodTerm, derive_coefficients};
///
/// assert_eq!(
///     derive_coefficients(30),
///     [
///         PeriodTerm::plus(6),
///         PeriodTerm::plus(10),
///         PeriodTerm::plus(15),
///         PeriodTerm::minus(2),
///         PeriodTerm::minus(3),
///         PeriodTerm::minus(5),
///         PeriodTerm::plus(1),
///     ]
/// );
/// ```
#[must_use]
pub fn derive_coefficients(digits: u32) -> Vec<PeriodTerm> {
    let primes = distinct_prime_factors(digits);
    let mut terms = Vec::new();
    for level in 1..=primes.len() {
        let start = terms.len();
        for mask in 1_u32..(1 << primes.len()) {
            if mask.count_ones() as usize != level {
                continue;
            }
            let k: u32 = primes
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, prime)| prime)
                .product();
            terms.push(PeriodTerm {
                period: digits / k,
                sign: Sign::for_level(level),
            });
        }
        terms[start..].sort_unstable_by_key(|term| term.period);
    }
    terms
}

fn distinct_prime_factors(mut n: u32) -> Vec<u32> {
    let mut primes = Vec::new();
    let mut candidate = 2;
    while candidate * candidate <= n {
        if n.is_multiple_of(candidate) {
            primes.push(candidate);
            while n.is_multiple_of(candidate) {
                n /= candidate;
            }
        }
        candidate += 1;
    }
    if n > 1 {
        primes.push(n);
    }
    primes
}
