use std::io;

use repdigit_core::{DomainError, ParseRangeError};
use repdigit_generator::GenerateError;

/// Errors reported by the command-line front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
    #[display("invalid input: {_0}")]
    Parse(#[from] ParseRangeError),
    #[display("{_0}")]
    Domain(#[from] DomainError),
    #[display("generation failed: {_0}")]
    Generate(#[from] GenerateError),
}
