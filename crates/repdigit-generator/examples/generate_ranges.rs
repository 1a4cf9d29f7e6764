//! Example demonstrating range-list input generation.
//!
//! This example shows how to:
//! - Create a `RangeGenerator` from a `GeneratorConfig`
//! - Generate a random input, or reproduce one from a seed
//! - Display the input, both answers, and the seed
//! - Sample many inputs in parallel and keep the one with the largest answer
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_ranges
//! ```
//!
//! Reproduce an input from its seed:
//!
//! ```sh
//! cargo run --example generate_ranges -- --seed 5ee38d6d665a3e2cb6e9ea75d5787fcb6a4f9ad2ea804b90d08df3cd448ce0a7
//! ```
//!
//! Sample 10000 inputs and keep the one whose part 2 answer comes closest to the
//! bound:
//!
//! ```sh
//! cargo run --example generate_ranges -- --max-tries 10000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use repdigit_generator::{
    DEFAULT_ANSWER_BOUND, GeneratedRanges, GeneratorConfig, RangeGenerator, RangeSeed,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to reproduce (64 hex digits). Random when omitted.
    #[arg(long, value_name = "HEX", conflicts_with = "max_tries")]
    seed: Option<RangeSeed>,

    /// Number of ranges in the input.
    #[arg(long, value_name = "COUNT", default_value_t = 38)]
    count: usize,

    /// Largest decimal length of a range bound.
    #[arg(long, value_name = "DIGITS", default_value_t = 10)]
    max_digits: u32,

    /// Upper bound for both answers.
    #[arg(long, value_name = "BOUND", default_value_t = DEFAULT_ANSWER_BOUND)]
    bound: u128,

    /// Number of inputs to sample, keeping the largest part 2 answer.
    #[arg(long, value_name = "COUNT")]
    max_tries: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let config = GeneratorConfig {
        count: args.count,
        max_digits: args.max_digits,
        answer_bound: args.bound,
        ..GeneratorConfig::default()
    };
    let generator = match RangeGenerator::new(config) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(2);
        }
    };

    let result = match (args.seed, args.max_tries) {
        (Some(seed), _) => generator.generate_with_seed(seed),
        (None, None) => generator.generate(),
        (None, Some(0)) => {
            eprintln!("--max-tries must be at least 1.");
            process::exit(1);
        }
        (None, Some(max_tries)) => {
            let best = (0..max_tries)
                .into_par_iter()
                .filter_map(|_| generator.generate().ok())
                .max_by_key(|generated| generated.answers.periodic);
            let Some(best) = best else {
                eprintln!("No sampled input fit within the bound.");
                process::exit(1);
            };
            Ok(best)
        }
    };

    match result {
        Ok(generated) => print_generated(&generated, args.max_tries),
        Err(e) => {
            eprintln!("Generation failed: {e}");
            process::exit(1);
        }
    }
}

fn print_generated(generated: &GeneratedRanges, max_tries: Option<usize>) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    if let Some(max_tries) = max_tries {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!();
    }

    println!("Input:");
    println!("  {}", generated.ranges);
    println!();

    println!("Answers:");
    println!("  part 1: {}", generated.answers.mirror);
    println!("  part 2: {}", generated.answers.periodic);
    println!("  attempts: {}", generated.attempts);
}
