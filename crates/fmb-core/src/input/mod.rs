//! Input collaborators — turn text into byte counts for the formatter.
//!
//! - [`parse`] — single-token parsing (`0x`, octal, decimal).
//! - [`reader`] — whitespace-separated tokens from a stream, bounded.
pub mod parse;
pub mod reader;

pub use parse::parse_u64;
pub use reader::{read_numbers, MAX_NUMS};
