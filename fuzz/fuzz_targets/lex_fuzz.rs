#![no_main]
use libfuzzer_sys::fuzz_target;
use relex::{ClassBitmap, Regex, TokenValue};

fuzz_target!(|data: &[u8]| {
    let Ok(regex) = Regex::parse(data) else {
        return;
    };

    // Anchors are positional facts about the input.
    if regex.flags.start_anchored {
        assert_eq!(data.first(), Some(&b'^'));
    }
    if regex.flags.end_anchored {
        assert_eq!(data.last(), Some(&b'$'));
    }

    // Lexing seeds the literal-string flag and never clears it; that move
    // belongs to the stream consumer.
    assert!(regex.flags.literal_string);

    // Every emitted class is a full-width bitmap.
    for token in &regex.tokens {
        if let TokenValue::Class(bits) = &token.value {
            assert_eq!(bits.as_bytes().len(), ClassBitmap::LEN);
        }
    }

    // Lexing has no hidden state across invocations.
    let again = Regex::parse(data).expect("accepted once, accepted twice");
    assert_eq!(regex, again);
});
