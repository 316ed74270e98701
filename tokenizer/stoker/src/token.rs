//! Token kinds produced by the tokenizer.

/// Kind of the token most recently produced.
///
/// [`Quoted`](Self::Quoted) and [`Ordinary`](Self::Ordinary) carry the
/// character code involved (the quote delimiter, or the ordinary character
/// itself), so callers can match on a specific delimiter without consulting
/// the classification table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// No token has been produced yet (fresh tokenizer, before the first
    /// advance).
    Nothing,
    /// Input exhausted.
    Eof,
    /// A line terminator, reported only when end-of-line significance is
    /// switched on.
    Eol,
    /// A number literal; its value is available from the tokenizer.
    Number,
    /// A word run; its text is available from the tokenizer.
    Word,
    /// A quoted string with the delimiter code that bounded it; the decoded
    /// body is available from the tokenizer.
    Quoted(u8),
    /// A single character with no special classification.
    Ordinary(u8),
}

impl TokenKind {
    /// Whether this is the end-of-file token.
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Whether the tokenizer's text accessor is meaningful for this kind.
    pub const fn has_text(self) -> bool {
        matches!(self, Self::Word | Self::Quoted(_))
    }
}
