//! The tokenizer engine: a table-driven state machine over a character
//! source.
//!
//! One call to [`Tokenizer::next_token`] runs the full phase chain and
//! produces exactly one token (or restarts after a comment). The engine owns
//! its [`SyntaxTable`], the line counter, the one-token pushback gate, and a
//! one-character pending slot used for two-character lookahead (`/*`,
//! `\r\n`, `-4`).
//!
//! # Design
//!
//! Phases run in a fixed order inside an explicit restart loop -- never by
//! recursion, so comment-only input cannot grow the stack:
//!
//! 1. pushback replay
//! 2. whitespace skip (line counting, optional end-of-line tokens)
//! 3. end of input
//! 4. comment character, to end of line, restart
//! 5. number, falling back to word for digit-less runs
//! 6. word (a run of WORD or NUMERIC constituents)
//! 7. quoted string with inline escape resolution
//! 8. `/* */` and `//` under their flags, for an attribute-free `/`
//! 9. single ordinary character
//!
//! Token text and value accumulate in locals and are committed only when a
//! token is complete, so a read failure leaves the previous token
//! observable.

use stoker_source::CharSource;

use crate::error::{CharOutOfRange, ScanError};
use crate::table::{CharClass, SyntaxTable};
use crate::token::TokenKind;

/// Behavior switches gating the engine. They never touch the table, with
/// one historical exception documented on [`Tokenizer::parse_numbers`].
#[derive(Clone, Copy, Debug)]
struct Flags {
    eol_significant: bool,
    slash_star: bool,
    slash_slash: bool,
    lower_case: bool,
    parse_numbers: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            eol_significant: false,
            slash_star: false,
            slash_slash: false,
            lower_case: false,
            // Matches the default table, which enables the numeric codes.
            parse_numbers: true,
        }
    }
}

/// One-slot raw lookahead carried between reads.
#[derive(Clone, Copy, Debug)]
enum Pending {
    /// Nothing buffered; pull from the source.
    None,
    /// A character was read but not consumed.
    Byte(u8),
    /// An end-of-line token was just produced for `\r`; a directly
    /// following `\n` belongs to the same terminator and must be swallowed
    /// without a second count.
    SkipLf,
}

/// Outcome of inspecting the character after an attribute-free `/`.
enum SlashOutcome {
    /// A comment was consumed; restart scanning at this character.
    Restart(u8),
    /// A comment was consumed and the input ended.
    RestartEof,
    /// Not a comment: the `/` itself is the token.
    Ordinary,
}

/// Outcome of consuming one whitespace character in the skip phase.
enum SkipStep {
    /// Skip goes on; classify this character next.
    Next(u8),
    /// A terminator was consumed with end-of-line significance on.
    Eol,
    /// The input ended inside the skip phase.
    Eof,
}

/// Table-driven tokenizer over any [`CharSource`].
///
/// Produces one token per [`next_token`](Self::next_token) call: a word, a
/// number, a quoted string, an end-of-line marker, a single ordinary
/// character, or end of file. Which is which is decided entirely by the
/// owned [`SyntaxTable`] and five behavior flags, all reconfigurable
/// between calls on a live stream.
pub struct Tokenizer<S> {
    source: S,
    table: SyntaxTable,
    flags: Flags,
    pending: Pending,
    pushed_back: bool,
    line: u32,
    kind: TokenKind,
    text: String,
    value: f64,
}

impl<S> Tokenizer<S> {
    /// Tokenizer with the default table over `source`.
    pub fn new(source: S) -> Self {
        Self::with_table(source, SyntaxTable::default())
    }

    /// Tokenizer over `source` with a caller-configured table.
    ///
    /// The table is owned by the engine from here on; reconfigure it
    /// through the forwarding methods or [`table_mut`](Self::table_mut).
    pub fn with_table(source: S, table: SyntaxTable) -> Self {
        Self {
            source,
            table,
            flags: Flags::default(),
            pending: Pending::None,
            pushed_back: false,
            line: 1,
            kind: TokenKind::Nothing,
            text: String::new(),
            value: 0.0,
        }
    }

    /// Kind of the most recently produced token ([`TokenKind::Nothing`]
    /// before the first advance).
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Text of the most recent word or quoted token. Unchanged by tokens of
    /// other kinds.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Value of the most recent number token. Unchanged by tokens of other
    /// kinds.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current line number, starting at 1. Incremented once per recognized
    /// terminator; `\r\n` counts once.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Replay the current token on the next [`next_token`](Self::next_token)
    /// call.
    ///
    /// Idempotent until the replay happens. Legal before the first token;
    /// the replayed kind is then [`TokenKind::Nothing`]. Consumes no input
    /// and leaves the line counter alone.
    pub fn push_back(&mut self) {
        self.pushed_back = true;
    }

    /// The owned classification table.
    pub fn table(&self) -> &SyntaxTable {
        &self.table
    }

    /// Mutable access to the table for configuration not covered by the
    /// forwarding methods.
    pub fn table_mut(&mut self) -> &mut SyntaxTable {
        &mut self.table
    }

    /// Give the source back, dropping any pending lookahead character.
    pub fn into_source(self) -> S {
        self.source
    }

    // === Flag configuration ===

    /// Report line terminators as end-of-line tokens instead of folding
    /// them into whitespace. Off by default.
    pub fn eol_is_significant(&mut self, flag: bool) {
        self.flags.eol_significant = flag;
    }

    /// Recognize `/* ... */` comments on an attribute-free `/`. Off by
    /// default. Note the default table classifies `/` as a comment
    /// character, which takes precedence; strip it with
    /// [`ordinary_char`](Self::ordinary_char) first.
    pub fn slash_star_comments(&mut self, flag: bool) {
        self.flags.slash_star = flag;
    }

    /// Recognize `// ...` comments on an attribute-free `/`. Off by
    /// default; same precedence note as
    /// [`slash_star_comments`](Self::slash_star_comments).
    pub fn slash_slash_comments(&mut self, flag: bool) {
        self.flags.slash_slash = flag;
    }

    /// Lowercase the text of word tokens as they are produced. Off by
    /// default. Quoted bodies are never lowercased.
    pub fn lower_case_mode(&mut self, flag: bool) {
        self.flags.lower_case = flag;
    }

    /// Switch number recognition on or off.
    ///
    /// Enabling also layers NUMERIC onto the digit, dot, and minus codes
    /// (the one place a flag touches the table). Disabling only
    /// clears the flag: the codes keep their classification, so word runs
    /// still absorb them, but no number phase is entered.
    pub fn parse_numbers(&mut self, flag: bool) {
        self.flags.parse_numbers = flag;
        if flag {
            self.table.enable_numbers();
        }
    }

    // === Table configuration (forwarders) ===

    /// See [`SyntaxTable::word_chars`].
    pub fn word_chars(&mut self, low: char, high: char) -> Result<(), CharOutOfRange> {
        self.table.word_chars(low, high)
    }

    /// See [`SyntaxTable::whitespace_chars`].
    pub fn whitespace_chars(&mut self, low: char, high: char) -> Result<(), CharOutOfRange> {
        self.table.whitespace_chars(low, high)
    }

    /// See [`SyntaxTable::ordinary_chars`].
    pub fn ordinary_chars(&mut self, low: char, high: char) -> Result<(), CharOutOfRange> {
        self.table.ordinary_chars(low, high)
    }

    /// See [`SyntaxTable::ordinary_char`].
    pub fn ordinary_char(&mut self, ch: char) -> Result<(), CharOutOfRange> {
        self.table.ordinary_char(ch)
    }

    /// See [`SyntaxTable::comment_char`].
    pub fn comment_char(&mut self, ch: char) -> Result<(), CharOutOfRange> {
        self.table.comment_char(ch)
    }

    /// See [`SyntaxTable::quote_char`].
    pub fn quote_char(&mut self, ch: char) -> Result<(), CharOutOfRange> {
        self.table.quote_char(ch)
    }

    /// Clear every code to ordinary, as [`SyntaxTable::reset`].
    pub fn reset_syntax(&mut self) {
        self.table.reset();
    }

    /// Record `kind` as the current token and hand it back.
    fn commit(&mut self, kind: TokenKind) -> TokenKind {
        self.kind = kind;
        kind
    }
}

impl<S: CharSource> Tokenizer<S> {
    /// Produce the next token.
    ///
    /// # Contract
    ///
    /// Exactly one token per call, end of input included (every call at or
    /// past exhaustion yields [`TokenKind::Eof`]). A pushed-back token is
    /// replayed first. Read failures surface as [`ScanError`] and leave the
    /// kind, text, and value of the previous token observable.
    pub fn next_token(&mut self) -> Result<TokenKind, ScanError> {
        if self.pushed_back {
            self.pushed_back = false;
            return Ok(self.kind);
        }

        // Resolve lookahead left over from the previous call.
        let first = match std::mem::replace(&mut self.pending, Pending::None) {
            Pending::Byte(b) => Some(b),
            Pending::SkipLf => match self.read()? {
                Some(b'\n') => self.read()?,
                other => other,
            },
            Pending::None => self.read()?,
        };

        match first {
            Some(first) => self.scan_from(first),
            None => Ok(self.commit(TokenKind::Eof)),
        }
    }

    /// Run the phase chain starting at `c`, restarting after comments.
    fn scan_from(&mut self, first: u8) -> Result<TokenKind, ScanError> {
        let mut c = first;
        loop {
            // Skip phase: whitespace and line terminators.
            let class = loop {
                let class = self.table.classify(c);
                if !class.contains(CharClass::WHITESPACE) {
                    break class;
                }
                match self.skip_one_whitespace(c)? {
                    SkipStep::Next(next) => c = next,
                    SkipStep::Eol => return Ok(self.commit(TokenKind::Eol)),
                    SkipStep::Eof => return Ok(self.commit(TokenKind::Eof)),
                }
            };

            // Comment character: discard to end of line, restart.
            if class.contains(CharClass::COMMENT) {
                match self.skip_line_comment()? {
                    Some(terminator) => {
                        c = terminator;
                        continue;
                    }
                    None => return Ok(self.commit(TokenKind::Eof)),
                }
            }

            if self.flags.parse_numbers && class.contains(CharClass::NUMERIC) {
                return self.scan_number(c);
            }

            if class.contains(CharClass::WORD) {
                return self.scan_word(c);
            }

            if class.contains(CharClass::QUOTE) {
                return self.scan_quoted(c);
            }

            // `/* */` and `//` apply only to a `/` the table left ordinary.
            if c == b'/' && (self.flags.slash_star || self.flags.slash_slash) {
                match self.scan_slash()? {
                    SlashOutcome::Restart(next) => {
                        c = next;
                        continue;
                    }
                    SlashOutcome::RestartEof => return Ok(self.commit(TokenKind::Eof)),
                    SlashOutcome::Ordinary => {
                        return Ok(self.commit(TokenKind::Ordinary(b'/')));
                    }
                }
            }

            return Ok(self.commit(TokenKind::Ordinary(c)));
        }
    }

    /// Consume one whitespace character `c`, counting terminators.
    fn skip_one_whitespace(&mut self, c: u8) -> Result<SkipStep, ScanError> {
        if c == b'\r' {
            self.line += 1;
            if self.flags.eol_significant {
                // A `\n` right behind this `\r` is the same terminator; the
                // marker makes the next call swallow it without a count.
                self.pending = Pending::SkipLf;
                return Ok(SkipStep::Eol);
            }
            let mut next = self.read()?;
            if next == Some(b'\n') {
                next = self.read()?;
            }
            return Ok(match next {
                Some(b) => SkipStep::Next(b),
                None => SkipStep::Eof,
            });
        }
        if c == b'\n' {
            self.line += 1;
            if self.flags.eol_significant {
                return Ok(SkipStep::Eol);
            }
        }
        Ok(match self.read()? {
            Some(b) => SkipStep::Next(b),
            None => SkipStep::Eof,
        })
    }

    /// Discard a to-end-of-line comment body.
    ///
    /// Returns the terminator unconsumed (the skip phase counts it and may
    /// turn it into an end-of-line token), or `None` at end of input.
    fn skip_line_comment(&mut self) -> Result<Option<u8>, ScanError> {
        loop {
            match self.read()? {
                None => return Ok(None),
                Some(b @ (b'\n' | b'\r')) => return Ok(Some(b)),
                Some(_) => {}
            }
        }
    }

    /// Classify the character after an attribute-free `/` seen with a
    /// comment flag on.
    fn scan_slash(&mut self) -> Result<SlashOutcome, ScanError> {
        match self.read()? {
            Some(b'*') if self.flags.slash_star => {
                self.skip_block_comment()?;
                match self.read()? {
                    Some(next) => Ok(SlashOutcome::Restart(next)),
                    None => Ok(SlashOutcome::RestartEof),
                }
            }
            Some(b'/') if self.flags.slash_slash => match self.skip_line_comment()? {
                Some(terminator) => Ok(SlashOutcome::Restart(terminator)),
                None => Ok(SlashOutcome::RestartEof),
            },
            Some(next) => {
                self.pending = Pending::Byte(next);
                Ok(SlashOutcome::Ordinary)
            }
            None => Ok(SlashOutcome::Ordinary),
        }
    }

    /// Discard a `/* ... */` body, counting terminators inside. Stops after
    /// the closing `*/`; an unterminated comment consumes to end of input.
    fn skip_block_comment(&mut self) -> Result<(), ScanError> {
        let mut prev = 0u8;
        loop {
            match self.read()? {
                None => return Ok(()),
                Some(b'/') if prev == b'*' => return Ok(()),
                Some(b) => {
                    match b {
                        b'\r' => self.line += 1,
                        b'\n' if prev != b'\r' => self.line += 1,
                        _ => {}
                    }
                    prev = b;
                }
            }
        }
    }

    /// Number phase. `first` is NUMERIC and parsing is on.
    ///
    /// A leading `-` binds only when a digit or `.` follows directly. The
    /// run then takes digits and at most one `.`. Runs without a single
    /// digit (`-`, `.`, `-.`) are not numbers and fall back to words.
    fn scan_number(&mut self, first: u8) -> Result<TokenKind, ScanError> {
        let mut run = String::new();
        let mut c = Some(first);

        if first == b'-' {
            let next = self.read()?;
            if !matches!(next, Some(b'0'..=b'9' | b'.')) {
                // A `-` with nothing numeric attached.
                self.pending = match next {
                    Some(b) => Pending::Byte(b),
                    None => Pending::None,
                };
                return Ok(self.finish_word("-".to_string()));
            }
            run.push('-');
            c = next;
        }

        let mut saw_digit = false;
        let mut seen_dot = false;
        loop {
            match c {
                Some(b @ b'0'..=b'9') => {
                    run.push(char::from(b));
                    saw_digit = true;
                }
                Some(b'.') if !seen_dot => {
                    run.push('.');
                    seen_dot = true;
                }
                Some(b) => {
                    self.pending = Pending::Byte(b);
                    break;
                }
                None => break,
            }
            c = self.read()?;
        }

        if !saw_digit {
            return Ok(self.finish_word(run));
        }

        // The run is a subset of Rust's float grammar once it has a digit.
        self.value = run.parse::<f64>().unwrap_or(0.0);
        Ok(self.commit(TokenKind::Number))
    }

    /// Word phase: a maximal run of WORD or NUMERIC constituents.
    fn scan_word(&mut self, first: u8) -> Result<TokenKind, ScanError> {
        let mut run = String::new();
        let mut c = first;
        loop {
            run.push(char::from(c));
            match self.read()? {
                None => break,
                Some(next) => {
                    let continues = self
                        .table
                        .classify(next)
                        .intersects(CharClass::WORD | CharClass::NUMERIC);
                    if continues {
                        c = next;
                    } else {
                        self.pending = Pending::Byte(next);
                        break;
                    }
                }
            }
        }
        Ok(self.finish_word(run))
    }

    /// Quoted-string phase: body until the matching delimiter, a line
    /// terminator, or end of input. The delimiter is consumed; a terminator
    /// ends the string early and stays pending for the next call.
    fn scan_quoted(&mut self, quote: u8) -> Result<TokenKind, ScanError> {
        let mut body = String::new();
        loop {
            match self.read()? {
                None => break,
                Some(b) if b == quote => break,
                Some(b @ (b'\n' | b'\r')) => {
                    self.pending = Pending::Byte(b);
                    break;
                }
                Some(b'\\') => self.scan_escape(&mut body)?,
                Some(b) => body.push(char::from(b)),
            }
        }
        self.text = body;
        Ok(self.commit(TokenKind::Quoted(quote)))
    }

    /// One escape inside a quoted string.
    ///
    /// A backslash directly before a terminator is a line continuation:
    /// both characters are dropped, the line is counted, and the string
    /// stays open. A backslash at end of input is kept literally. Everything
    /// else resolves through the fixed escape table.
    fn scan_escape(&mut self, body: &mut String) -> Result<(), ScanError> {
        match self.read()? {
            None => body.push('\\'),
            Some(b'\n') => self.line += 1,
            Some(b'\r') => {
                self.line += 1;
                // `\r\n` is one terminator; anything else resumes the body.
                if let Some(after) = self.read()? {
                    if after != b'\n' {
                        self.pending = Pending::Byte(after);
                    }
                }
            }
            Some(b) => body.push(crate::escape::resolve_escape(b)),
        }
        Ok(())
    }

    /// Commit a word token, applying lowercase mode.
    fn finish_word(&mut self, run: String) -> TokenKind {
        self.text = if self.flags.lower_case {
            run.to_lowercase()
        } else {
            run
        };
        self.commit(TokenKind::Word)
    }

    /// Pull one character, honoring the pending byte slot.
    fn read(&mut self) -> Result<Option<u8>, ScanError> {
        if let Pending::Byte(b) = self.pending {
            self.pending = Pending::None;
            return Ok(Some(b));
        }
        Ok(self.source.next_char()?)
    }
}
