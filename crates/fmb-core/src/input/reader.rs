//! Reading byte counts from a text stream.

use super::parse::parse_u64;
use crate::error::FmbError;
use std::io::{self, BufRead};
use tracing::{debug, warn};

/// Maximum number of values taken from a single stream.
///
/// Anything after the 1024th token is left unread.
pub const MAX_NUMS: usize = 1_024;

/// Read whitespace-separated byte counts from `reader`.
///
/// Stops at end of input, after `limit` values, or at the first token that
/// is not a number. A malformed token, including one that is not valid
/// UTF-8, ends the stream quietly (it is logged, not returned) and the
/// values before it are kept. Only I/O failures are errors.
pub fn read_numbers<R: BufRead>(mut reader: R, limit: usize) -> Result<Vec<u64>, FmbError> {
    let mut numbers = Vec::with_capacity(limit.min(MAX_NUMS));
    let mut token = Vec::new();

    while numbers.len() < limit && next_token(&mut reader, &mut token)? {
        let parsed = std::str::from_utf8(&token)
            .map_err(|_| FmbError::malformed(&String::from_utf8_lossy(&token)))
            .and_then(parse_u64);
        match parsed {
            Ok(value) => numbers.push(value),
            Err(e) => {
                warn!("Stopping input at token {}: {e}", numbers.len() + 1);
                return Ok(numbers);
            }
        }
    }

    if limit > 0 && numbers.len() == limit {
        debug!("Input capacity of {limit} values reached");
    }
    Ok(numbers)
}

/// Fill `token` with the next run of non-whitespace bytes.
///
/// Returns `false` once the stream is exhausted with no token pending.
/// Consumes only up to the whitespace byte ending the token, so nothing
/// past the last value taken is buffered beyond the reader's own block.
fn next_token<R: BufRead>(reader: &mut R, token: &mut Vec<u8>) -> io::Result<bool> {
    token.clear();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            return Ok(!token.is_empty());
        }

        let mut used = 0;
        let mut complete = false;
        for &byte in buf {
            used += 1;
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    complete = true;
                    break;
                }
            } else {
                token.push(byte);
            }
        }
        reader.consume(used);
        if complete {
            return Ok(true);
        }
    }
}
