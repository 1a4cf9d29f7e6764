use repdigit_core::{DomainError, MAX_DIGITS};

/// Errors that can occur while generating an input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GenerateError {
    /// The configuration asks for zero ranges.
    #[display("range count must be at least 1")]
    ZeroCount,
    /// The configured digit count is outside the supported domain.
    #[display("max digits must be between 1 and {}, got {max_digits}", MAX_DIGITS)]
    MaxDigitsOutOfRange {
        /// The rejected digit count.
        max_digits: u32,
    },
    /// The attempt budget cannot cover the requested range count.
    #[display("{max_attempts} attempts cannot produce {count} ranges")]
    TooFewAttempts {
        /// The configured attempt budget.
        max_attempts: u64,
        /// The configured range count.
        count: usize,
    },
    /// The attempt budget ran out before enough ranges fit the answer bound.
    #[display(
        "only {accepted} of {requested} ranges fit within the answer bound after {attempts} attempts"
    )]
    BoundUnreachable {
        /// Ranges accepted so far.
        accepted: usize,
        /// Ranges requested.
        requested: usize,
        /// Draws made.
        attempts: u64,
    },
    /// A drawn range fell outside the supported numeric domain.
    #[display("range sum failed: {_0}")]
    Domain(#[from] DomainError),
    /// A sampling distribution could not be built.
    #[display("invalid sampling range: {_0}")]
    Sampling(#[from] rand::distr::uniform::Error),
}
