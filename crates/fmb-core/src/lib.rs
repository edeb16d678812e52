//! fmb Core — byte-count scaling, formatting, and input parsing.
//!
//! This crate contains all business logic with zero terminal dependencies.
//! It is designed to be reusable across different frontends (CLI, TUI, GUI).
//!
//! # Modules
//!
//! - [`model`] — Format options and the scaler/formatter itself.
//! - [`input`] — Parsing byte counts from arguments and text streams.
//! - [`error`] — The crate's error type.
pub mod error;
pub mod input;
pub mod model;

pub use error::FmbError;
pub use model::{format_size, Base, FormatOptions, FormattedSize};
