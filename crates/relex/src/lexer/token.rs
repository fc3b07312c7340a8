use crate::lexer::class::ClassBitmap;
use crate::span::Span;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// One lexed unit of the pattern, with the span it came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Token {
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(value: TokenValue, span: Span) -> Self {
        Self { value, span }
    }
}

/// The payload of a token.
///
/// Shorthand classes are tags rather than expanded bitmaps; the grammar
/// decides what byte set each stands for outside a character class. The
/// punctuation variants mirror the single metasyntax bytes `( ) | . + * ?`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum TokenValue {
    /// A single literal byte.
    Literal(u8),
    /// A completed character class. The bitmap is owned by the token and
    /// moves on to whatever syntax node the consumer builds from it.
    Class(Box<ClassBitmap>),
    /// A bounded repeat `{min,max}` with `min <= max <= 32767`.
    Repeat { min: u16, max: u16 },
    /// `\w`
    WordChar,
    /// `\W`
    NonWordChar,
    /// `\s`
    Space,
    /// `\S`
    NonSpace,
    /// `\d`
    Digit,
    /// `\D`
    NonDigit,
    /// `(`
    GroupStart,
    /// `)`
    GroupEnd,
    /// `|`
    Alternate,
    /// `.`
    AnyChar,
    /// `+`
    Plus,
    /// `*`
    Star,
    /// `?`
    Question,
}

impl TokenValue {
    /// True for a plain literal byte; every other variant is metasyntax. A
    /// stream consumer checks this to decide when the literal-string fast
    /// path is off the table.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}
