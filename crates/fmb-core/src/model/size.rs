//! Size formatting — human-readable byte counts.
//!
//! All arithmetic is integral. The byte count is widened to `u128` and
//! multiplied by `10^precision` up front, so the fraction digits ride along
//! through every division and no floating point is ever involved.
//!
//! Rounding is round-half-up and is applied at *every* magnitude step, not
//! once at the end. `3_669_689` bytes therefore becomes `3584KB` and then
//! `3.5MB`, which rounds to `4MB` at precision 0, while a single division by
//! 1 MiB would give `3.4997` and round to 3.

use super::options::{FormatOptions, MAX_PRECISION};
use std::fmt;
use tracing::trace;

/// Unit suffixes indexed by magnitude. Index 0 is a plain byte count.
pub const UNITS: [&str; 7] = ["", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Powers of ten indexed by precision.
const POW10: [u64; MAX_PRECISION as usize + 1] = [1, 10, 100, 1_000];

/// Longest rendering without a separator: 20 whole digits, a decimal
/// point, `MAX_PRECISION` fraction digits and a two-letter unit.
const MAX_UNSEPARATED_LEN: usize = 20 + 1 + MAX_PRECISION as usize + 2;

/// Smallest buffer for [`format_size_into`] that can never truncate when
/// the separator is at most 6 bytes long.
pub const MIN_BUFFER_LEN: usize = 32;

/// A byte count after scaling and rounding, before rendering.
///
/// Holds the rounded value as `whole.fraction` where `fraction` has
/// exactly `digits` digits (zero-padded on output) with trailing zeros
/// already trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattedSize {
    whole: u64,
    fraction: u64,
    digits: u8,
    unit_index: usize,
}

impl FormattedSize {
    /// Scale `bytes` to the largest fitting unit and round it.
    pub fn new(bytes: u64, options: &FormatOptions) -> Self {
        let precision = options.precision();
        let pow = u128::from(POW10[usize::from(precision)]);
        let divisor = u128::from(options.base().divisor());
        let threshold = divisor * pow;

        // u64::MAX * 1000 needs 74 bits.
        let mut scaled = u128::from(bytes) * pow;
        let mut unit_index = 0;
        while scaled >= threshold && unit_index < UNITS.len() - 1 {
            scaled = (scaled + divisor / 2) / divisor;
            unit_index += 1;
        }

        // Each step only shrinks `scaled`, so the whole part never exceeds `bytes`.
        let whole = (scaled / pow) as u64;

        let (fraction, digits) = if unit_index == 0 || precision == 0 {
            (0, 0)
        } else {
            let mut fraction = (scaled % pow) as u64;
            let mut digits = precision;
            while digits > 0 && fraction % 10 == 0 {
                fraction /= 10;
                digits -= 1;
            }
            (fraction, digits)
        };

        trace!(bytes, unit_index, digits, "scaled byte count");

        Self {
            whole,
            fraction,
            digits,
            unit_index,
        }
    }

    /// Integer part of the rounded value.
    pub fn whole(&self) -> u64 {
        self.whole
    }

    /// Fraction digits as an integer, e.g. `5` for `2.5KB` or `5` for `2.05KB`.
    pub fn fraction(&self) -> u64 {
        self.fraction
    }

    /// How many fraction digits are rendered after trimming.
    pub fn digits(&self) -> u8 {
        self.digits
    }

    /// Position in [`UNITS`].
    pub fn unit_index(&self) -> usize {
        self.unit_index
    }

    pub fn unit(&self) -> &'static str {
        UNITS[self.unit_index]
    }

    /// Render into `out` with `separator` between the number and the unit.
    ///
    /// The separator only appears when there is a unit to separate.
    pub fn write_to<W: fmt::Write + ?Sized>(&self, out: &mut W, separator: &str) -> fmt::Result {
        write!(out, "{}", self.whole)?;
        if self.digits > 0 {
            write!(
                out,
                ".{:0width$}",
                self.fraction,
                width = usize::from(self.digits)
            )?;
        }
        if self.unit_index > 0 {
            out.write_str(separator)?;
            out.write_str(self.unit())?;
        }
        Ok(())
    }
}

impl fmt::Display for FormattedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, "")
    }
}

/// Write the human-readable form of `bytes` into any formatter sink.
pub fn write_size<W: fmt::Write + ?Sized>(
    out: &mut W,
    bytes: u64,
    options: &FormatOptions,
) -> fmt::Result {
    FormattedSize::new(bytes, options).write_to(out, options.separator())
}

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Uses a binary (1024) or decimal (1000) step depending on the options
/// and labels every step with a two-letter suffix (KB, MB, ..., EB).
/// Values that would need a unit above EB stay at EB with a larger whole
/// part.
pub fn format_size(bytes: u64, options: &FormatOptions) -> String {
    let mut out = String::with_capacity(MAX_UNSEPARATED_LEN + options.separator().len());
    // Writing into a String cannot fail.
    let _ = write_size(&mut out, bytes, options);
    out
}

/// Format into a caller-supplied buffer, returning the written prefix.
///
/// Never writes past `buf.len()`. Output that does not fit is silently
/// truncated on a character boundary, like `snprintf`. Buffers of at
/// least [`MIN_BUFFER_LEN`] bytes hold every rendering whose separator is
/// at most 6 bytes.
pub fn format_size_into<'a>(bytes: u64, options: &FormatOptions, buf: &'a mut [u8]) -> &'a str {
    let mut writer = BoundedWriter {
        buf,
        len: 0,
        truncated: false,
    };
    // BoundedWriter never reports an error.
    let _ = write_size(&mut writer, bytes, options);
    let BoundedWriter { buf, len, .. } = writer;
    std::str::from_utf8(&buf[..len]).unwrap_or_default()
}

/// `fmt::Write` sink over a fixed slice that drops whatever does not fit.
struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        let available = self.buf.len() - self.len;
        let mut take = s.len().min(available);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        self.truncated = take < s.len();
        Ok(())
    }
}
