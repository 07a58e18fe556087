//! Reading the summation bound from an input stream.
//!
//! Bad input is not an error here: a first token that does not begin with
//! an in-range decimal integer yields [`DEFAULT_N`].

use std::io::Read;

use crate::debug_event;
use crate::error::InputError;

/// Bound used when no integer can be read.
pub const DEFAULT_N: i64 = 10;

/// Parse the longest `[+-]?[0-9]+` prefix of the first whitespace-delimited
/// token of `text` as a base-10 `i64`.
///
/// Trailing characters in the token are ignored, so `12abc` is 12 and `1.5`
/// is 1. Tokens after the first are ignored.
pub fn parse_n(text: &str) -> Result<i64, InputError> {
    let token = text.split_whitespace().next().ok_or(InputError::Empty)?;

    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits_len = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(InputError::Invalid {
            token: token.to_string(),
        });
    }

    let prefix = &token[..sign_len + digits_len];
    prefix.parse::<i64>().map_err(|_| InputError::OutOfRange {
        digits: prefix.to_string(),
    })
}

/// Read `source` to the end and return the bound it holds, or [`DEFAULT_N`].
///
/// Read failures, empty input, non-numeric or out-of-range tokens all fall
/// back to the default. Invalid UTF-8 is replaced before parsing, so it only
/// matters when it lands inside the first token.
pub fn read_n<R: Read>(mut source: R) -> i64 {
    let mut buf = Vec::new();
    if let Err(e) = source.read_to_end(&mut buf) {
        debug_event!("input", "read failed", "{e}, using default {DEFAULT_N}");
        return DEFAULT_N;
    }

    match parse_n(&String::from_utf8_lossy(&buf)) {
        Ok(n) => {
            debug_event!("input", "parsed", "n = {n}");
            n
        }
        Err(e) => {
            debug_event!("input", "fallback", "{e}, using default {DEFAULT_N}");
            DEFAULT_N
        }
    }
}
