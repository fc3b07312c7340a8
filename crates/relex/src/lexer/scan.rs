//! The two-state pattern scanner.
//!
//! The scanner walks the source bytes in one of two modes. In the default
//! mode it emits literal bytes, punctuation, shorthand-class tags and repeat
//! bounds, and it resolves the two global anchors: a `^` at offset zero and a
//! `$` adjacent to end of input set side-band flags instead of emitting
//! tokens. Inside a character class it accumulates members into a
//! [`ClassBitmap`] and emits the finished bitmap as a single token when the
//! class closes.
//!
//! All scratch state lives in the scanner value itself; two scanners over
//! disjoint inputs never share anything.

use crate::error::{LexError, LexErrorKind};
use crate::lexer::class::ClassBitmap;
use crate::lexer::escape::decode_escape;
use crate::lexer::token::{Token, TokenValue};
use crate::span::Span;

/// Largest representable repeat bound.
pub const REPEAT_MAX: u32 = 32767;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Default,
    CharClass,
}

/// Per-invocation scratch state: the class bitmap being built, its negation
/// flag, and the position just past the most recent `$`.
#[derive(Debug)]
struct LexEnv {
    class: ClassBitmap,
    negated: bool,
    last_dollar: Option<usize>,
}

impl LexEnv {
    fn new() -> Self {
        Self {
            class: ClassBitmap::empty(),
            negated: false,
            last_dollar: None,
        }
    }
}

/// Pull-based tokenizer over one pattern.
#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a [u8],
    pos: usize,
    mode: Mode,
    /// Offset of the `[` that opened the current class, for error spans.
    class_start: usize,
    start_anchored: bool,
    env: LexEnv,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            pos: 0,
            mode: Mode::Default,
            class_start: 0,
            start_anchored: false,
            env: LexEnv::new(),
        }
    }

    /// Produces the next token, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the first lexical error; the scanner stops there and must not
    /// be pumped further.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            let Some(&byte) = self.source.get(self.pos) else {
                return match self.mode {
                    Mode::Default => Ok(None),
                    Mode::CharClass => Err(LexError {
                        span: Span::new(self.class_start, self.source.len()),
                        kind: LexErrorKind::UnterminatedClass,
                    }),
                };
            };
            let token = match self.mode {
                Mode::Default => self.scan_default(byte)?,
                Mode::CharClass => self.scan_class(byte)?,
            };
            if token.is_some() {
                return Ok(token);
            }
        }
    }

    /// True when the pattern began with `^`.
    #[must_use]
    pub fn start_anchored(&self) -> bool {
        self.start_anchored
    }

    /// True when the most recent `$` sat at the very end of the input.
    /// Meaningful once [`next_token`](Self::next_token) has returned `None`.
    #[must_use]
    pub fn end_anchored(&self) -> bool {
        self.env.last_dollar == Some(self.source.len())
    }

    fn scan_default(&mut self, byte: u8) -> Result<Option<Token>, LexError> {
        match byte {
            // An initial `^` anchors; anywhere else it is an ordinary byte.
            b'^' if self.pos == 0 => {
                self.start_anchored = true;
                self.pos += 1;
                Ok(None)
            }
            // `$` never emits: it is swallowed and its position recorded, and
            // end of input decides whether the last sighting anchors.
            b'$' => {
                self.pos += 1;
                self.env.last_dollar = Some(self.pos);
                Ok(None)
            }
            b'{' => self.scan_repeat().map(Some),
            b'[' => {
                self.open_class();
                Ok(None)
            }
            b'\\' => self.scan_escape().map(Some),
            b'(' => Ok(Some(self.punct(TokenValue::GroupStart))),
            b')' => Ok(Some(self.punct(TokenValue::GroupEnd))),
            b'|' => Ok(Some(self.punct(TokenValue::Alternate))),
            b'.' => Ok(Some(self.punct(TokenValue::AnyChar))),
            b'+' => Ok(Some(self.punct(TokenValue::Plus))),
            b'*' => Ok(Some(self.punct(TokenValue::Star))),
            b'?' => Ok(Some(self.punct(TokenValue::Question))),
            0x20..=0x7e => {
                self.pos += 1;
                Ok(Some(Token::new(
                    TokenValue::Literal(byte),
                    Span::new(self.pos - 1, self.pos),
                )))
            }
            _ => Err(LexError {
                span: Span::new(self.pos, self.pos + 1),
                kind: LexErrorKind::NonAsciiChar,
            }),
        }
    }

    fn punct(&mut self, value: TokenValue) -> Token {
        self.pos += 1;
        Token::new(value, Span::new(self.pos - 1, self.pos))
    }

    /// Called on `{`. Emits a repeat token when the brace form matches, and
    /// falls back to a literal `{` when it does not (`{}`, `{,}`, `{a}`).
    #[allow(clippy::cast_possible_truncation)]
    fn scan_repeat(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let mut cursor = start + 1;
        let min = scan_decimal(self.source, &mut cursor);
        let has_comma = self.source.get(cursor) == Some(&b',');
        let max = if has_comma {
            cursor += 1;
            scan_decimal(self.source, &mut cursor)
        } else {
            None
        };
        let closed = self.source.get(cursor) == Some(&b'}');
        if !closed || (min.is_none() && max.is_none()) {
            self.pos += 1;
            return Ok(Token::new(
                TokenValue::Literal(b'{'),
                Span::new(start, self.pos),
            ));
        }
        cursor += 1;

        let lower = min.unwrap_or(0);
        let upper = match (has_comma, max) {
            (false, _) => lower,
            (true, Some(bound)) => bound,
            (true, None) => REPEAT_MAX,
        };
        if upper > REPEAT_MAX {
            return Err(LexError {
                span: Span::new(start, cursor),
                kind: LexErrorKind::RepeatTooLarge,
            });
        }
        if upper < lower {
            return Err(LexError {
                span: Span::new(start, cursor),
                kind: LexErrorKind::BadRepeatInterval,
            });
        }
        self.pos = cursor;
        // Both bounds fit in u16: upper <= REPEAT_MAX and lower <= upper.
        let value = TokenValue::Repeat {
            min: lower as u16,
            max: upper as u16,
        };
        Ok(Token::new(value, Span::new(start, cursor)))
    }

    /// Called on `\` in the default mode: shorthand-class tags first, then
    /// the generic decoder.
    fn scan_escape(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let shorthand = match self.source.get(start + 1) {
            Some(&b'w') => Some(TokenValue::WordChar),
            Some(&b'W') => Some(TokenValue::NonWordChar),
            Some(&b's') => Some(TokenValue::Space),
            Some(&b'S') => Some(TokenValue::NonSpace),
            Some(&b'd') => Some(TokenValue::Digit),
            Some(&b'D') => Some(TokenValue::NonDigit),
            _ => None,
        };
        if let Some(value) = shorthand {
            self.pos = start + 2;
            return Ok(Token::new(value, Span::new(start, self.pos)));
        }
        let escape = decode_escape(self.source, start)?;
        self.pos = escape.next;
        Ok(Token::new(
            TokenValue::Literal(escape.byte),
            Span::new(start, escape.next),
        ))
    }

    /// Called on `[`. A `^` right after the opener negates the class, and a
    /// `]` right after that (or right after a plain `[`) is a member rather
    /// than a terminator.
    fn open_class(&mut self) {
        self.class_start = self.pos;
        self.env.class.clear_all();
        self.env.negated = false;
        self.pos += 1;
        if self.source.get(self.pos) == Some(&b'^') {
            self.env.negated = true;
            self.pos += 1;
        }
        if self.source.get(self.pos) == Some(&b']') {
            self.env.class.set(b']');
            self.pos += 1;
        }
        self.mode = Mode::CharClass;
    }

    fn scan_class(&mut self, byte: u8) -> Result<Option<Token>, LexError> {
        match byte {
            b']' => {
                self.pos += 1;
                self.mode = Mode::Default;
                let mut bits = std::mem::take(&mut self.env.class);
                if self.env.negated {
                    bits.complement_in_place();
                }
                Ok(Some(Token::new(
                    TokenValue::Class(Box::new(bits)),
                    Span::new(self.class_start, self.pos),
                )))
            }
            b'\\' => self.scan_class_escape().map(|()| None),
            _ => {
                let start = self.pos;
                self.pos += 1;
                self.class_member(byte, start)?;
                Ok(None)
            }
        }
    }

    fn scan_class_escape(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        match self.source.get(start + 1) {
            // `\]` contributes the bracket without terminating the class;
            // unlike other escapes it never begins a range.
            Some(&b']') => {
                self.env.class.set(b']');
                self.pos = start + 2;
                Ok(())
            }
            Some(&b'w') => Ok(self.union_shorthand(ClassBitmap::word(), false)),
            Some(&b'W') => Ok(self.union_shorthand(ClassBitmap::word(), true)),
            Some(&b's') => Ok(self.union_shorthand(ClassBitmap::space(), false)),
            Some(&b'S') => Ok(self.union_shorthand(ClassBitmap::space(), true)),
            Some(&b'd') => Ok(self.union_shorthand(ClassBitmap::digit(), false)),
            Some(&b'D') => Ok(self.union_shorthand(ClassBitmap::digit(), true)),
            _ => {
                let escape = decode_escape(self.source, start)?;
                self.pos = escape.next;
                self.class_member(escape.byte, start)
            }
        }
    }

    /// Negative shorthand sets are the complement of the positive ones; there
    /// is exactly one table per set.
    fn union_shorthand(&mut self, mut set: ClassBitmap, negate: bool) {
        if negate {
            set.complement_in_place();
        }
        self.env.class.union_with(&set);
        self.pos += 2;
    }

    /// A decoded class member starting at `member_start`, already consumed.
    /// If a `-` and a range end follow, the whole span joins the bitmap;
    /// otherwise just the member byte. A `-` before the terminator (or at end
    /// of input) stays an ordinary member.
    fn class_member(&mut self, low: u8, member_start: usize) -> Result<(), LexError> {
        if self.source.get(self.pos) != Some(&b'-') {
            self.env.class.set(low);
            return Ok(());
        }
        let high = match self.source.get(self.pos + 1) {
            None | Some(&b']') => {
                self.env.class.set(low);
                return Ok(());
            }
            Some(&b'\\') => {
                let escape = decode_escape(self.source, self.pos + 1)?;
                self.pos = escape.next;
                escape.byte
            }
            Some(&high) => {
                self.pos += 2;
                high
            }
        };
        if high < low {
            return Err(LexError {
                span: Span::new(member_start, self.pos),
                kind: LexErrorKind::BadCharacterRange,
            });
        }
        self.env.class.set_range(low, high);
        Ok(())
    }
}

fn scan_decimal(source: &[u8], cursor: &mut usize) -> Option<u32> {
    let start = *cursor;
    let mut value = 0u32;
    while let Some(&byte) = source.get(*cursor) {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add(u32::from(byte - b'0'));
        *cursor += 1;
    }
    if *cursor == start {
        None
    } else {
        Some(value)
    }
}
