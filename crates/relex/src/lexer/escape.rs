//! Backslash-escape decoding.

use crate::error::{LexError, LexErrorKind};
use crate::span::Span;

/// Result of decoding one escape: the byte it denotes and the position of
/// the first byte after the consumed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecodedEscape {
    pub byte: u8,
    pub next: usize,
}

/// Decodes the escape whose backslash sits at `backslash`.
///
/// `\xHH` denotes the byte with hex value `HH`; `\n`, `\t`, `\r`, `\f` and
/// `\a` denote the usual control bytes; any other byte after the backslash
/// denotes itself (so `\0` is the digit `0`, not NUL). The decoder never
/// reads past the end of `source`: a truncated `\x` or a trailing backslash
/// is an invalid escape.
pub(crate) fn decode_escape(source: &[u8], backslash: usize) -> Result<DecodedEscape, LexError> {
    let cursor = backslash + 1;
    let Some(&marker) = source.get(cursor) else {
        return Err(invalid(backslash, source.len()));
    };
    match marker {
        b'x' => match (hex_digit(source, cursor + 1), hex_digit(source, cursor + 2)) {
            (Some(hi), Some(lo)) => Ok(DecodedEscape {
                byte: (hi << 4) | lo,
                next: cursor + 3,
            }),
            _ => Err(invalid(backslash, source.len().min(cursor + 3))),
        },
        b'n' => single(0x0a, cursor),
        b't' => single(0x09, cursor),
        b'r' => single(0x0d, cursor),
        b'f' => single(0x0c, cursor),
        b'a' => single(0x07, cursor),
        other => single(other, cursor),
    }
}

fn single(byte: u8, cursor: usize) -> Result<DecodedEscape, LexError> {
    Ok(DecodedEscape {
        byte,
        next: cursor + 1,
    })
}

fn hex_digit(source: &[u8], pos: usize) -> Option<u8> {
    let byte = *source.get(pos)?;
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn invalid(start: usize, end: usize) -> LexError {
    LexError {
        span: Span::new(start, end),
        kind: LexErrorKind::InvalidEscape,
    }
}
