//! # Relex
//!
//! Lexer for a byte-oriented regular-expression sublanguage.
//!
//! ## Overview
//!
//! Relex turns a pattern into the typed token stream a pattern grammar
//! consumes, plus a small amount of side-band state resolved during lexing:
//!
//! - **Anchors**: a leading `^` and a trailing unescaped `$` never become
//!   tokens; they surface as [`Flags`] on the result.
//! - **Character classes**: `[...]` is delivered as one token owning a
//!   256-bit [`ClassBitmap`] over the byte alphabet.
//! - **Fast-path hint**: [`Flags::literal_string`] starts set; the stream
//!   consumer clears it when it meets metasyntax, and a pattern that keeps
//!   it can be matched with a plain string comparison.
//!
//! The dialect is deliberately small: no capture names, no backreferences,
//! no lookaround, ASCII semantics only.
//!
//! ## Quick Start
//!
//! ```rust
//! use relex::{Regex, TokenValue};
//!
//! let regex = Regex::parse("^ab{2,5}$").unwrap();
//! assert!(regex.flags.start_anchored);
//! assert!(regex.flags.end_anchored);
//! assert_eq!(regex.tokens.len(), 3);
//! assert!(matches!(regex.tokens[0].value, TokenValue::Literal(b'a')));
//! assert!(matches!(regex.tokens[2].value, TokenValue::Repeat { min: 2, max: 5 }));
//! ```
//!
//! Errors keep their position and the exact user-visible message:
//!
//! ```rust
//! use relex::Regex;
//!
//! let error = Regex::parse("[abc").unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "invalid regular expression: missing terminating ] for character class",
//! );
//! ```
//!
//! ## Modules
//!
//! - [`lexer`] - Tokenization: scanner, tokens, class bitmaps
//! - [`regex`] - The parse driver and the flags it resolves
//! - [`error`] - Error types
//! - [`span`] - Byte spans into the pattern

pub mod error;
pub mod lexer;
pub mod regex;
pub mod span;

pub use error::{Error, LexError, LexErrorKind};
pub use lexer::{ClassBitmap, Scanner, Token, TokenValue, REPEAT_MAX};
pub use regex::{Flags, Regex};
pub use span::Span;
