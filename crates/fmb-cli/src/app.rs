//! The read-format-print loop.
//!
//! Numbers come from exactly one source, in priority order:
//! positional arguments, then `--input`/`INPUT_FILE`, then stdin. All of
//! them are collected before anything is printed, so a read failure never
//! leaves partial output behind.

use crate::args::Args;
use anyhow::{Context, Result};
use fmb_core::input::{read_numbers, MAX_NUMS};
use fmb_core::model::write_size;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use tracing::debug;

/// Format every requested byte count onto `stdout`, one per line.
///
/// `stdin` is only read when neither positional numbers nor an input file
/// were given.
pub fn run<R: BufRead, W: Write>(args: &Args, stdin: R, mut stdout: W) -> Result<()> {
    let numbers = collect_numbers(args, stdin)?;
    let options = args.format_options();
    debug!(
        "Formatting {} values (precision {}, base {})",
        numbers.len(),
        options.precision(),
        options.base().divisor()
    );

    let mut line = String::new();
    for bytes in numbers {
        line.clear();
        write_size(&mut line, bytes, &options)?;
        writeln!(stdout, "{line}")?;
    }
    stdout.flush().context("failed to flush output")?;
    Ok(())
}

fn collect_numbers<R: BufRead>(args: &Args, stdin: R) -> Result<Vec<u64>> {
    if !args.numbers.is_empty() {
        debug!("Using {} numbers from the command line", args.numbers.len());
        return Ok(args.numbers.clone());
    }

    if let Some(path) = &args.input {
        debug!("Reading numbers from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("failed to open input file {}", path.display()))?;
        return read_numbers(BufReader::new(file), MAX_NUMS)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    debug!("Reading numbers from stdin");
    Ok(read_numbers(stdin, MAX_NUMS)?)
}
