//! Generator configuration.

use repdigit_core::MAX_DIGITS;

use crate::GenerateError;

/// The default answer bound: the largest value of a signed 60-bit integer.
pub const DEFAULT_ANSWER_BOUND: u128 = (1 << 59) - 1;

/// Parameters controlling the shape of a generated input.
///
/// # Examples
///
/// ```
/// use repdigit_generator::GeneratorConfig;
///
/// let config = GeneratorConfig {
///     count: 10,
///     max_digits: 6,
///     ..GeneratorConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of ranges in the input.
    pub count: usize,
    /// Largest decimal length of a range's lower bound. Upper bounds are clamped
    /// to the same length.
    pub max_digits: u32,
    /// Largest difference between a range's bounds.
    pub max_span: u64,
    /// Both answers (summed over all ranges) must not exceed this value.
    pub answer_bound: u128,
    /// Number of range draws allowed before giving up.
    pub max_attempts: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 38,
            max_digits: 10,
            max_span: 1_000_000,
            answer_bound: DEFAULT_ANSWER_BOUND,
            max_attempts: 100_000,
        }
    }
}

impl GeneratorConfig {
    /// Checks that the configuration can produce an input.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::ZeroCount`] if `count` is zero.
    /// - [`GenerateError::MaxDigitsOutOfRange`] if `max_digits` is not in
    ///   `1..=MAX_DIGITS`.
    /// - [`GenerateError::TooFewAttempts`] if `max_attempts` is below `count`.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.count == 0 {
            return Err(GenerateError::ZeroCount);
        }
        if !(1..=MAX_DIGITS).contains(&self.max_digits) {
            return Err(GenerateError::MaxDigitsOutOfRange {
                max_digits: self.max_digits,
            });
        }
        if self.max_attempts < self.count as u64 {
            return Err(GenerateError::TooFewAttempts {
                max_attempts: self.max_attempts,
                count: self.count,
            });
        }
        Ok(())
    }
}
