//! The parse driver and the regex object it populates.

use crate::error::Error;
use crate::lexer::{Scanner, Token};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Pattern-wide facts the lexer resolves in place.
///
/// Named booleans rather than packed bits: each flag is an independent,
/// self-documenting fact about the pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Flags {
    /// The pattern began with `^`: matches may only start at the beginning
    /// of the subject.
    pub start_anchored: bool,
    /// The pattern ended with an unescaped `$`: matches must run to the end
    /// of the subject.
    pub end_anchored: bool,
    /// Optimistically set when lexing begins. Lexing never clears it; the
    /// grammar consuming the token stream does, on the first metasyntactic
    /// token. A pattern that keeps the flag is a plain byte string and can
    /// be matched with a string comparison instead of the full engine.
    pub literal_string: bool,
}

/// A lexed pattern: the token stream and side-band flags a pattern grammar
/// consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Regex {
    pub flags: Flags,
    pub tokens: SmallVec<[Token; 8]>,
}

impl Regex {
    /// Lexes `pattern` to completion.
    ///
    /// The pattern is raw bytes; it need not be UTF-8 (classes admit the
    /// whole byte alphabet), but outside classes and escapes only printable
    /// ASCII is legal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] wrapping the first lexical error. Scanning
    /// stops there; later errors in the pattern are never observed.
    pub fn parse(pattern: impl AsRef<[u8]>) -> Result<Self, Error> {
        let source = pattern.as_ref();
        let mut scanner = Scanner::new(source);
        let mut flags = Flags {
            literal_string: true,
            ..Flags::default()
        };
        let mut tokens = SmallVec::new();
        while let Some(token) = scanner.next_token()? {
            tokens.push(token);
        }
        flags.start_anchored = scanner.start_anchored();
        flags.end_anchored = scanner.end_anchored();
        Ok(Self { flags, tokens })
    }
}
