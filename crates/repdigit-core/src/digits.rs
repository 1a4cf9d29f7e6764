//! Decimal length helpers.

/// The largest decimal length the coefficient table covers.
///
/// Inputs with more digits than this are rejected with
/// [`DomainError::TooManyDigits`](crate::DomainError::TooManyDigits).
pub const MAX_DIGITS: u32 = 18;

/// Returns the number of decimal digits of `n`, without leading zeros.
///
/// Zero is written as `0` and therefore has one digit.
///
/// # Examples
///
/// ```
/// use repdigit_core::digit_count;
///
/// assert_eq!(digit_count(0), 1);
/// assert_eq!(digit_count(9), 1);
/// assert_eq!(digit_count(10), 2);
/// assert_eq!(digit_count(u64::MAX), 20);
/// ```
#[must_use]
#[inline]
pub const fn digit_count(n: u64) -> u32 {
    match n.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// Returns `10^exp`.
///
/// # Panics
///
/// Panics if the result does not fit in a `u64` (`exp > 19`).
#[must_use]
#[inline]
pub const fn pow10(exp: u32) -> u64 {
    match 10u64.checked_pow(exp) {
        Some(value) => value,
        None => panic!("10^exp overflows u64"),
    }
}
