//! Data model for byte-count formatting.
//!
//! Re-exports the option types and the scaler/formatter.
pub mod options;
pub mod size;

pub use options::{clamp_precision, Base, FormatOptions, DEFAULT_PRECISION, MAX_PRECISION};
pub use size::{format_size, format_size_into, write_size, FormattedSize, MIN_BUFFER_LEN, UNITS};
