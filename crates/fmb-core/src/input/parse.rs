//! Parsing of a single byte-count token.

use crate::error::FmbError;

/// Parse an unsigned 64-bit integer, auto-detecting the radix.
///
/// Accepts the notations of C's `strtoull(s, &end, 0)`:
///
/// - `0x1F` / `0X1F`: hexadecimal
/// - `017`: octal (any leading zero)
/// - `42`: decimal
///
/// Leading whitespace and a single leading `+` are allowed. Anything
/// trailing, a `-` sign, an empty string, or a value above `u64::MAX` is
/// rejected with [`FmbError::MalformedNumber`].
///
/// ```rust
/// use fmb_core::input::parse_u64;
///
/// assert_eq!(parse_u64("0x800").unwrap(), 2048);
/// assert!(parse_u64("12kb").is_err());
/// ```
pub fn parse_u64(input: &str) -> Result<u64, FmbError> {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // from_str_radix would also take a sign of its own.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(FmbError::malformed(input));
    }

    u64::from_str_radix(digits, radix).map_err(|_| FmbError::malformed(input))
}
