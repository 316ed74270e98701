use super::*;
use pretty_assertions::assert_eq;
use stoker_source::BufferSource;

// === Fixed shapes ===

#[test]
fn nothing_eof_and_eol() {
    assert_eq!(
        format_token(TokenKind::Nothing, "", 0.0, 1),
        "Token[NOTHING], line 1"
    );
    assert_eq!(format_token(TokenKind::Eof, "", 0.0, 3), "Token[EOF], line 3");
    assert_eq!(format_token(TokenKind::Eol, "", 0.0, 2), "Token[EOL], line 2");
}

#[test]
fn word_renders_its_text() {
    assert_eq!(
        format_token(TokenKind::Word, "hello", 0.0, 1),
        "Token[hello], line 1"
    );
}

#[test]
fn ordinary_renders_quoted_char() {
    assert_eq!(
        format_token(TokenKind::Ordinary(b'+'), "", 0.0, 2),
        "Token['+'], line 2"
    );
}

#[test]
fn quoted_renders_between_delimiters() {
    assert_eq!(
        format_token(TokenKind::Quoted(b'\''), "hello", 0.0, 1),
        "Token['hello'], line 1"
    );
    assert_eq!(
        format_token(TokenKind::Quoted(b'"'), "hi", 0.0, 4),
        "Token[\"hi\"], line 4"
    );
}

#[test]
fn quoted_body_is_not_reescaped() {
    // Decoded control characters pass through as themselves.
    assert_eq!(
        format_token(TokenKind::Quoted(b'\''), "a\tb", 0.0, 1),
        "Token['a\tb'], line 1"
    );
}

// === Number rendering ===

#[test]
fn whole_numbers_render_without_fraction() {
    assert_eq!(
        format_token(TokenKind::Number, "", 12.0, 1),
        "Token[n=12], line 1"
    );
    assert_eq!(
        format_token(TokenKind::Number, "", -34.0, 1),
        "Token[n=-34], line 1"
    );
}

#[test]
fn fractional_numbers_keep_their_digits() {
    assert_eq!(
        format_token(TokenKind::Number, "", 1.3453, 2),
        "Token[n=1.3453], line 2"
    );
}

// === Display on the engine ===

#[test]
fn engine_displays_its_current_token() {
    let mut t = Tokenizer::new(BufferSource::from("pi 'x'"));
    assert_eq!(t.to_string(), "Token[NOTHING], line 1");

    match t.next_token() {
        Ok(TokenKind::Word) => {}
        other => panic!("expected a word, got {other:?}"),
    }
    assert_eq!(t.to_string(), "Token[pi], line 1");

    match t.next_token() {
        Ok(TokenKind::Quoted(_)) => {}
        other => panic!("expected a quoted string, got {other:?}"),
    }
    assert_eq!(t.to_string(), "Token['x'], line 1");
}
