//! Puzzle input generator for the repeated-digit range puzzle.
//!
//! A generated input is a list of ID ranges, written `lo-hi,lo-hi,...`. Its part 1
//! answer is the sum of the mirror numbers in every range and its part 2 answer the
//! sum of the periodic numbers (see [`repdigit_core`]). Both answers are computed in
//! closed form while generating, which lets the generator reject ranges that would
//! push an answer above the configured bound.
//!
//! Generation is deterministic for a given [`RangeSeed`].
//!
//! # Examples
//!
//! ```
//! use repdigit_generator::{GeneratorConfig, RangeGenerator, RangeSeed};
//!
//! let seed: RangeSeed =
//!     "5ee38d6d665a3e2cb6e9ea75d5787fcb6a4f9ad2ea804b90d08df3cd448ce0a7".parse()?;
//! let generator = RangeGenerator::new(GeneratorConfig::default())?;
//! let generated = generator.generate_with_seed(seed)?;
//!
//! println!("{}", generated.ranges);
//! println!("part 1: {}", generated.answers.mirror);
//! println!("part 2: {}", generated.answers.periodic);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{config::*, error::*, generator::*, seed::*};

mod config;
mod error;
mod generator;
mod seed;
