use std::path::PathBuf;

use clap::{Parser, Subcommand};
use repdigit_generator::{DEFAULT_ANSWER_BOUND, GeneratorConfig, RangeSeed};

#[derive(Debug, Parser)]
#[command(name = "repdigit")]
#[command(author, version, about = "Sum repeated-digit IDs over ranges")]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Generate a range-list input and print its answers
    Generate(GenerateArgs),

    /// Print both answers for a range-list input
    Solve {
        /// Input file; reads stdin when omitted
        path: Option<PathBuf>,
    },
}

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateArgs {
    /// Seed to reproduce (64 hex digits); random when omitted
    #[arg(long, value_name = "HEX")]
    pub(crate) seed: Option<RangeSeed>,

    /// Number of ranges
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 38)]
    pub(crate) count: usize,

    /// Largest decimal length of a range bound
    #[arg(long, value_name = "DIGITS", default_value_t = 10)]
    pub(crate) max_digits: u32,

    /// Largest difference between a range's bounds
    #[arg(long, value_name = "SPAN", default_value_t = 1_000_000)]
    pub(crate) max_span: u64,

    /// Upper bound for both answers
    #[arg(long, value_name = "BOUND", default_value_t = DEFAULT_ANSWER_BOUND)]
    pub(crate) bound: u128,

    /// Write the input here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,
}

impl GenerateArgs {
    pub(crate) fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            count: self.count,
            max_digits: self.max_digits,
            max_span: self.max_span,
            answer_bound: self.bound,
            ..GeneratorConfig::default()
        }
    }
}
