//! fmb CLI — command-line frontend.
//!
//! This crate contains argument handling and the read-format-print loop.
//! Business logic lives in `fmb-core`.
pub mod app;
pub mod args;

pub use args::Args;
