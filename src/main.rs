//! fmb — format raw byte counts as human-readable sizes.
//!
//! Thin binary entry point. All logic lives in the `fmb-core`
//! and `fmb-cli` crates.

use clap::Parser;
use std::io::{self, BufWriter};

fn main() -> anyhow::Result<()> {
    // Malformed arguments exit here with clap's message and usage text.
    let args = fmb_cli::Args::parse();

    // Structured logging on stderr; stdout carries only formatted sizes.
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("fmb starting");

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    fmb_cli::app::run(&args, stdin, stdout)
}
