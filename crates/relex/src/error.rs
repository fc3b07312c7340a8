//! Error types for pattern lexing.
//!
//! [`LexError`] carries the first lexical failure with its source span;
//! [`Error`] is the outcome the driver hands back to the caller. When the
//! `diagnostics` feature is enabled, both integrate with [`miette`] for
//! labeled source snippets.

use crate::span::Span;
use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// Lexical error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
#[error("{kind}")]
pub struct LexError {
    #[cfg_attr(feature = "diagnostics", label)]
    pub span: Span,
    #[source]
    pub kind: LexErrorKind,
}

/// The lexical failures the scanner can report. The `#[error]` strings are
/// user-visible and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum LexErrorKind {
    #[error("repeat interval too large")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::repeat_too_large)))]
    RepeatTooLarge,

    #[error("bad repeat interval")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::bad_repeat_interval)))]
    BadRepeatInterval,

    #[error("bad character range")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::bad_character_range)))]
    BadCharacterRange,

    #[error("missing terminating ] for character class")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::unterminated_class)))]
    UnterminatedClass,

    #[error("non-ascii character")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::non_ascii_character)))]
    NonAsciiChar,

    #[error("invalid escape")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexer::invalid_escape)))]
    InvalidEscape,
}

/// Failure returned by [`Regex::parse`](crate::Regex::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum Error {
    /// The pattern is not a valid regular expression; the payload is the
    /// first (and only) lexical error observed.
    #[error("invalid regular expression: {0}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(transparent))]
    Syntax(#[from] LexError),
}
