//! # Lexer Module
//!
//! Tokenization of the pattern sublanguage.
//!
//! ## Overview
//!
//! The lexer converts a pattern into a stream of typed tokens. It handles:
//!
//! - **Literal bytes** and the metasyntax bytes `( ) | . + * ?`
//! - **Character classes**: `[...]` and `[^...]`, materialized as 256-bit
//!   bitmaps built from literals, ranges, escapes and shorthands
//! - **Bounded repeats**: `{m,n}`, `{m,}`, `{,n}`, `{m}`
//! - **Escapes**: `\xHH`, the control escapes, and shorthand classes
//!   (`\w`, `\s`, `\d` and their negations)
//! - **Anchors**: a leading `^` and a trailing `$` are consumed in place and
//!   reported as flags rather than tokens
//!
//! Scanning is context-sensitive: the scanner keeps an explicit mode for
//! "inside a character class", where the token alphabet is entirely
//! different. See [`Scanner`] for the entry point.

pub mod class;
pub mod scan;
pub mod token;

mod escape;

pub use class::ClassBitmap;
pub use scan::{Scanner, REPEAT_MAX};
pub use token::{Token, TokenValue};
