//! Reproducible generator seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed from which a whole generated input is reproduced.
///
/// Seeds are written as 64 hexadecimal digits.
///
/// # Examples
///
/// ```
/// use repdigit_generator::RangeSeed;
///
/// let text = "49d8c60ed9506fa2533df0da8d07981309758a014460514f68334510aedd5906";
/// let seed: RangeSeed = text.parse()?;
/// assert_eq!(seed.to_string(), text);
/// # Ok::<(), repdigit_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeSeed([u8; 32]);

impl RangeSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the random stream for one generation attempt.
    ///
    /// Each attempt gets an independent stream seeded with
    /// `SHA-256(seed || attempt)`, so redrawing a rejected range does not shift
    /// the ranges drawn after it.
    #[must_use]
    pub(crate) fn attempt_rng(&self, attempt: u64) -> Pcg64 {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(attempt.to_le_bytes());
        Pcg64::from_seed(hasher.finalize().into())
    }
}

impl Display for RangeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`RangeSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// The length of the rejected text.
        len: usize,
    },
    /// The text contains a character that is not a hexadecimal digit.
    #[display("invalid hex digit {found:?} at position {index}")]
    InvalidDigit {
        /// Character position of the offending digit.
        index: usize,
        /// The offending character.
        found: char,
    },
}

impl FromStr for RangeSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }
        let nibbles = s
            .chars()
            .enumerate()
            .map(|(index, found)| hex_value(index, found))
            .collect::<Result<Vec<_>, _>>()?;
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}

fn hex_value(index: usize, found: char) -> Result<u8, ParseSeedError> {
    found
        .to_digit(16)
        .and_then(|digit| u8::try_from(digit).ok())
        .ok_or(ParseSeedError::InvalidDigit { index, found })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "5ee38d6d665a3e2cb6e9ea75d5787fcb6a4f9ad2ea804b90d08df3cd448ce0a7";

    #[test]
    fn test_parse_and_display() {
        let seed = SEED.parse::<RangeSeed>().unwrap();
        assert_eq!(seed.as_bytes()[0], 0x5e);
        assert_eq!(seed.as_bytes()[31], 0xa7);
        assert_eq!(seed.to_string(), SEED);
        assert_eq!(SEED.to_uppercase().parse::<RangeSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<RangeSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
        let bad = format!("{}g", &SEED[..63]);
        assert_eq!(
            bad.parse::<RangeSeed>(),
            Err(ParseSeedError::InvalidDigit {
                index: 63,
                found: 'g'
            })
        );
    }

    #[test]
    fn test_attempt_streams_are_independent() {
        let seed = SEED.parse::<RangeSeed>().unwrap();
        assert_eq!(seed.attempt_rng(0), seed.attempt_rng(0));
        assert_ne!(seed.attempt_rng(0), seed.attempt_rng(1));
    }
}
