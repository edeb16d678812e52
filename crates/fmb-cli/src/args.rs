//! Command-line arguments.

use clap::Parser;
use fmb_core::input::parse_u64;
use fmb_core::model::DEFAULT_PRECISION;
use fmb_core::FormatOptions;
use std::path::PathBuf;

/// Command-line arguments for the byte-count formatter.
///
/// ```rust
/// use clap::Parser;
/// use fmb_cli::Args;
///
/// let args = Args::parse_from(["fmb", "-p", "1", "1536"]);
/// assert_eq!(args.numbers, vec![1536]);
/// assert_eq!(args.format_options().precision(), 1);
/// ```
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Format raw byte counts as human-readable sizes (2048 -> 2KB)"
)]
pub struct Args {
    /// Byte counts to format (decimal, 0x hex, or 0-prefixed octal).
    /// Read from --input or stdin when omitted.
    #[arg(value_name = "NUMBERS", num_args = 0.., value_parser = parse_u64)]
    pub numbers: Vec<u64>,

    #[arg(
        short,
        long,
        default_value_t = i64::from(DEFAULT_PRECISION),
        allow_negative_numbers = true,
        help = "Digits after the decimal point, clamped to 0..=3"
    )]
    pub precision: i64,

    #[arg(short, long, help = "Text inserted between the value and its unit")]
    pub separator: Option<String>,

    #[arg(
        short,
        long,
        default_value_t = 1024,
        allow_negative_numbers = true,
        help = "Scaling base; 1000 selects decimal units, anything else 1024"
    )]
    pub base: i64,

    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "INPUT_FILE",
        value_hint = clap::ValueHint::FilePath,
        help = "Read numbers from FILE instead of stdin"
    )]
    pub input: Option<PathBuf>,

    #[arg(short, long, help = "Log input handling to stderr")]
    pub verbose: bool,
}

impl Args {
    /// Build the formatter options described by the flags.
    ///
    /// ```rust
    /// use clap::Parser;
    /// use fmb_cli::Args;
    /// use fmb_core::Base;
    ///
    /// let args = Args::parse_from(["fmb", "--base", "1000", "-s", " "]);
    /// let opts = args.format_options();
    /// assert_eq!(opts.base(), Base::Decimal);
    /// assert_eq!(opts.separator(), " ");
    /// ```
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::new(
            self.precision,
            self.base,
            self.separator.clone().unwrap_or_default(),
        )
    }
}
