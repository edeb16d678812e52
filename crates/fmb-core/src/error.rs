//! Error type shared by the input collaborators.
//!
//! The formatter itself is total and never fails; only turning text into
//! byte counts can go wrong.

/// Errors raised while collecting byte counts.
#[derive(Debug, thiserror::Error)]
pub enum FmbError {
    /// A token could not be parsed as an unsigned 64-bit integer.
    #[error("malformed input number: '{input}'")]
    MalformedNumber { input: String },
    /// The underlying stream failed while reading.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

impl FmbError {
    pub(crate) fn malformed(input: &str) -> Self {
        Self::MalformedNumber {
            input: input.to_owned(),
        }
    }
}
