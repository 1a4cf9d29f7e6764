use std::{
    fs,
    io::{self, Write},
};

use repdigit_generator::{GeneratedRanges, RangeGenerator};

use crate::{cli::GenerateArgs, error::CliError};

pub(crate) fn run(args: &GenerateArgs) -> Result<(), CliError> {
    let generator = RangeGenerator::new(args.config())?;
    let generated = match args.seed {
        Some(seed) => generator.generate_with_seed(seed)?,
        None => generator.generate()?,
    };
    log::info!(
        "generated {} ranges in {} attempts",
        generated.ranges.len(),
        generated.attempts
    );

    match &args.output {
        Some(path) => fs::write(path, format!("{}\n", generated.ranges))?,
        None => writeln!(io::stdout().lock(), "{}", generated.ranges)?,
    }
    write_summary(&mut io::stderr().lock(), &generated)?;
    Ok(())
}

pub(crate) fn write_summary(out: &mut impl Write, generated: &GeneratedRanges) -> io::Result<()> {
    writeln!(out, "Seed: {}", generated.seed)?;
    writeln!(out, "Part 1: {}", generated.answers.mirror)?;
    writeln!(out, "Part 2: {}", generated.answers.periodic)
}
