//! Command-line front end for the repeated-digit range sums.
//!
//! ```sh
//! repdigit generate --count 38 --output input.txt
//! repdigit solve input.txt
//! ```

use std::process::ExitCode;

use clap::Parser as _;

use crate::cli::{Cli, Commands};

mod cli;
mod commands;
mod error;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Solve { path } => commands::solve::run(path.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
