use std::{
    fs,
    io::{self, Read as _, Write},
    path::Path,
};

use repdigit_core::{RangeList, RangeSums};

use crate::error::CliError;

pub(crate) fn run(path: Option<&Path>) -> Result<(), CliError> {
    let input = if let Some(path) = path {
        fs::read_to_string(path)?
    } else {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input
    };
    let answers = solve(&input)?;
    write_answers(&mut io::stdout().lock(), answers)?;
    Ok(())
}

pub(crate) fn solve(input: &str) -> Result<RangeSums, CliError> {
    let ranges = input.parse::<RangeList>()?;
    log::info!("parsed {} ranges", ranges.len());
    Ok(ranges.sums()?)
}

pub(crate) fn write_answers(out: &mut impl Write, answers: RangeSums) -> io::Result<()> {
    writeln!(out, "Part 1: {}", answers.mirror)?;
    writeln!(out, "Part 2: {}", answers.periodic)
}
