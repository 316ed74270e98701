//! Diagnostic rendering of tokens.
//!
//! Every token renders as `Token[...], line N`. The bracket payload varies
//! by kind; quoted bodies are surfaced as decoded text between their
//! delimiters, never re-escaped.

use std::fmt;

use crate::token::TokenKind;
use crate::tokenizer::Tokenizer;

/// Render one token record into its diagnostic line.
///
/// Shapes: `Token[EOF]`, `Token[EOL]`, `Token[NOTHING]`, `Token[n=12.5]`
/// for numbers, `Token[hello]` for words, `Token['hello']` for a
/// `'`-quoted string, and `Token['+']` for an ordinary character, each
/// followed by `, line N`. `text` is consulted for word and quoted kinds,
/// `value` for numbers.
pub fn format_token(kind: TokenKind, text: &str, value: f64, line: u32) -> String {
    let payload = match kind {
        TokenKind::Nothing => "NOTHING".to_string(),
        TokenKind::Eof => "EOF".to_string(),
        TokenKind::Eol => "EOL".to_string(),
        TokenKind::Number => format!("n={value}"),
        TokenKind::Word => text.to_string(),
        TokenKind::Quoted(delim) => {
            let delim = char::from(delim);
            format!("{delim}{text}{delim}")
        }
        TokenKind::Ordinary(code) => format!("'{}'", char::from(code)),
    };
    format!("Token[{payload}], line {line}")
}

/// Renders the engine's current token, `Token[NOTHING], line 1` before the
/// first advance.
impl<S> fmt::Display for Tokenizer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_token(
            self.kind(),
            self.text(),
            self.value(),
            self.line(),
        ))
    }
}

#[cfg(test)]
mod tests;
