//! Scenario tests for the pattern lexer.

use relex::{ClassBitmap, Error, LexErrorKind, Regex, TokenValue};

fn values(regex: &Regex) -> Vec<&TokenValue> {
    regex.tokens.iter().map(|token| &token.value).collect()
}

fn lex_err(pattern: &[u8]) -> LexErrorKind {
    match Regex::parse(pattern) {
        Err(Error::Syntax(error)) => error.kind,
        Ok(_) => panic!("pattern {pattern:?} lexed successfully"),
    }
}

fn single_class(pattern: &[u8]) -> ClassBitmap {
    let regex = Regex::parse(pattern).expect("pattern should lex");
    assert_eq!(regex.tokens.len(), 1, "expected exactly one token");
    match &regex.tokens[0].value {
        TokenValue::Class(bits) => (**bits).clone(),
        other => panic!("expected a class token, got {other:?}"),
    }
}

#[test]
fn test_anchored_literal() {
    let regex = Regex::parse("^abc$").unwrap();
    assert!(regex.flags.start_anchored);
    assert!(regex.flags.end_anchored);
    assert!(regex.flags.literal_string);
    assert_eq!(
        values(&regex),
        vec![
            &TokenValue::Literal(b'a'),
            &TokenValue::Literal(b'b'),
            &TokenValue::Literal(b'c'),
        ]
    );
}

#[test]
fn test_bounded_repeat() {
    let regex = Regex::parse("a{2,5}").unwrap();
    assert_eq!(
        values(&regex),
        vec![
            &TokenValue::Literal(b'a'),
            &TokenValue::Repeat { min: 2, max: 5 },
        ]
    );
}

#[test]
fn test_bad_repeat_interval() {
    assert_eq!(lex_err(b"a{6,3}"), LexErrorKind::BadRepeatInterval);
}

#[test]
fn test_repeat_too_large() {
    assert_eq!(lex_err(b"a{2,40000}"), LexErrorKind::RepeatTooLarge);
    // `{m}` means both bounds are m, so the upper check fires as well.
    assert_eq!(lex_err(b"a{32768}"), LexErrorKind::RepeatTooLarge);
}

#[test]
fn test_repeat_boundary_values() {
    let regex = Regex::parse("a{0,32767}").unwrap();
    assert_eq!(
        regex.tokens[1].value,
        TokenValue::Repeat { min: 0, max: 32767 }
    );
    let regex = Regex::parse("a{32767}").unwrap();
    assert_eq!(
        regex.tokens[1].value,
        TokenValue::Repeat {
            min: 32767,
            max: 32767,
        }
    );
}

#[test]
fn test_negated_class_keeps_bracket_member() {
    let bits = single_class(b"[^]abc]");
    for excluded in [b']', b'a', b'b', b'c'] {
        assert!(!bits.contains(excluded));
    }
    assert_eq!(bits.len(), 252);
    assert!(bits.contains(b'd'));
    assert!(bits.contains(0x00));
    assert!(bits.contains(0xff));
}

#[test]
fn test_class_ranges_and_members() {
    let bits = single_class(b"[a-z0-9_]");
    assert_eq!(bits.len(), 37);
    for byte in b'a'..=b'z' {
        assert!(bits.contains(byte));
    }
    for byte in b'0'..=b'9' {
        assert!(bits.contains(byte));
    }
    assert!(bits.contains(b'_'));
    assert!(!bits.contains(b'A'));
    assert!(!bits.contains(b'-'));
}

#[test]
fn test_hex_escapes() {
    let regex = Regex::parse("\\x41\\x42").unwrap();
    assert_eq!(
        values(&regex),
        vec![&TokenValue::Literal(0x41), &TokenValue::Literal(0x42)]
    );
    assert!(regex.flags.literal_string);
}

#[test]
fn test_unterminated_class() {
    assert_eq!(lex_err(b"[abc"), LexErrorKind::UnterminatedClass);
}

#[test]
fn test_escaped_trailing_dollar_does_not_anchor() {
    let regex = Regex::parse("a\\$").unwrap();
    assert_eq!(
        values(&regex),
        vec![&TokenValue::Literal(b'a'), &TokenValue::Literal(b'$')]
    );
    assert!(!regex.flags.end_anchored);
}

#[test]
fn test_double_backslash_then_dollar_anchors() {
    // `\\` lexes to a literal backslash; the `$` then takes the anchor path.
    let regex = Regex::parse("\\\\$").unwrap();
    assert_eq!(values(&regex), vec![&TokenValue::Literal(b'\\')]);
    assert!(regex.flags.end_anchored);
}

#[test]
fn test_mid_pattern_dollar_is_swallowed() {
    let regex = Regex::parse("a$b").unwrap();
    assert_eq!(
        values(&regex),
        vec![&TokenValue::Literal(b'a'), &TokenValue::Literal(b'b')]
    );
    assert!(!regex.flags.end_anchored);
}

#[test]
fn test_dollar_only_pattern() {
    let regex = Regex::parse("$").unwrap();
    assert!(regex.tokens.is_empty());
    assert!(regex.flags.end_anchored);
    assert!(!regex.flags.start_anchored);
}

#[test]
fn test_caret_only_at_start_anchors() {
    let regex = Regex::parse("a^b").unwrap();
    assert!(!regex.flags.start_anchored);
    assert_eq!(
        values(&regex),
        vec![
            &TokenValue::Literal(b'a'),
            &TokenValue::Literal(b'^'),
            &TokenValue::Literal(b'b'),
        ]
    );
}

#[test]
fn test_punctuation_stream() {
    let regex = Regex::parse("(a|b)+.?*").unwrap();
    assert_eq!(
        values(&regex),
        vec![
            &TokenValue::GroupStart,
            &TokenValue::Literal(b'a'),
            &TokenValue::Alternate,
            &TokenValue::Literal(b'b'),
            &TokenValue::GroupEnd,
            &TokenValue::Plus,
            &TokenValue::AnyChar,
            &TokenValue::Question,
            &TokenValue::Star,
        ]
    );
}

#[test]
fn test_shorthand_tokens_outside_class() {
    let regex = Regex::parse("\\w\\S").unwrap();
    assert_eq!(
        values(&regex),
        vec![&TokenValue::WordChar, &TokenValue::NonSpace]
    );
}

#[test]
fn test_class_shorthand_space_is_narrow() {
    let bits = single_class(b"[\\s]");
    assert_eq!(bits.len(), 2);
    assert!(bits.contains(b' '));
    assert!(bits.contains(b'\t'));
    assert!(!bits.contains(b'\n'));
}

#[test]
fn test_class_negative_shorthand_is_complement() {
    let digits = single_class(b"[\\d]");
    let mut complement = single_class(b"[\\D]");
    complement.complement_in_place();
    assert_eq!(digits, complement);
}

#[test]
fn test_unknown_escape_is_following_byte() {
    let regex = Regex::parse("\\0\\e").unwrap();
    assert_eq!(
        values(&regex),
        vec![&TokenValue::Literal(b'0'), &TokenValue::Literal(b'e')]
    );
}

#[test]
fn test_invalid_escapes() {
    assert_eq!(lex_err(b"\\x4"), LexErrorKind::InvalidEscape);
    assert_eq!(lex_err(b"\\xzz"), LexErrorKind::InvalidEscape);
    assert_eq!(lex_err(b"ab\\"), LexErrorKind::InvalidEscape);
    assert_eq!(lex_err(b"[\\x9]"), LexErrorKind::InvalidEscape);
}

#[test]
fn test_brace_without_repeat_shape_is_literal() {
    let regex = Regex::parse("{a}").unwrap();
    assert_eq!(
        values(&regex),
        vec![
            &TokenValue::Literal(b'{'),
            &TokenValue::Literal(b'a'),
            &TokenValue::Literal(b'}'),
        ]
    );
}

#[test]
fn test_non_printable_outside_class() {
    assert_eq!(lex_err(b"a\x1fb"), LexErrorKind::NonAsciiChar);
    assert_eq!(lex_err(b"caf\xc3\xa9"), LexErrorKind::NonAsciiChar);
}

#[test]
fn test_first_error_wins() {
    // Both the class range and the repeat are malformed; only the first is
    // ever reported.
    assert_eq!(lex_err(b"[z-a]{6,3}"), LexErrorKind::BadCharacterRange);
}

#[test]
fn test_error_is_positioned() {
    let error = match Regex::parse("ab[z-a]") {
        Err(Error::Syntax(error)) => error,
        Ok(_) => panic!("pattern lexed successfully"),
    };
    assert_eq!(error.span.start(), 3);
    assert_eq!(error.kind, LexErrorKind::BadCharacterRange);
}

#[test]
fn test_empty_pattern() {
    let regex = Regex::parse("").unwrap();
    assert!(regex.tokens.is_empty());
    assert!(regex.flags.literal_string);
    assert!(!regex.flags.start_anchored);
    assert!(!regex.flags.end_anchored);
}

#[test]
fn test_lexing_is_idempotent() {
    for pattern in ["^a[b-d]{2,3}$", "\\w+@\\w+", "[^\\d]*", "a|b|c"] {
        let first = Regex::parse(pattern).unwrap();
        let second = Regex::parse(pattern).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_class_bitmap_is_exactly_32_bytes() {
    let bits = single_class(b"[a-z]");
    assert_eq!(bits.as_bytes().len(), 32);
}
