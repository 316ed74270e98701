//! Per-character classification table driving the tokenizer.
//!
//! Every character code 0-255 carries a set of [`CharClass`] attributes.
//! The tokenizer consults the table for each character it pulls, so
//! reassigning a class between two advances changes how the very next
//! character is read. There is no grammar anywhere else: the table *is*
//! the language definition.
//!
//! # Contract
//!
//! Assignment operations are exclusive: granting a class to a code first
//! clears everything the code had. The one additive exception is
//! [`SyntaxTable::enable_numbers`], which layers NUMERIC onto the digit,
//! dot, and minus codes without disturbing their other attributes.

use bitflags::bitflags;

use crate::error::CharOutOfRange;

bitflags! {
    /// Classification attributes of a single character code.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharClass: u8 {
        /// Skipped between tokens; line terminators live here by default.
        const WHITESPACE = 1 << 0;
        /// Constituent of multi-character word tokens.
        const WORD       = 1 << 1;
        /// Constituent of number literals.
        const NUMERIC    = 1 << 2;
        /// Delimits a quoted string (matching pair of the same code).
        const QUOTE      = 1 << 3;
        /// Starts a comment running to end of line.
        const COMMENT    = 1 << 4;
    }
}

impl CharClass {
    /// Whether the code carries no attribute at all (an ordinary character).
    pub const fn is_ordinary(self) -> bool {
        self.is_empty()
    }
}

/// Mutable classification table over the 256 character codes.
///
/// Configuration arguments are `char`s for ergonomics; anything above
/// U+00FF is rejected with [`CharOutOfRange`] before the table is touched.
/// Range operations treat `low > high` as an empty range and do nothing.
#[derive(Clone, PartialEq, Eq)]
pub struct SyntaxTable {
    classes: [CharClass; 256],
}

impl SyntaxTable {
    /// Table with every code ordinary.
    pub fn ordinary() -> Self {
        Self {
            classes: [CharClass::empty(); 256],
        }
    }

    /// Current attribute set of a character code.
    pub fn classify(&self, code: u8) -> CharClass {
        self.classes[usize::from(code)]
    }

    /// Make `low..=high` word constituents.
    ///
    /// Clears all prior attributes of each affected code, then grants WORD.
    pub fn word_chars(&mut self, low: char, high: char) -> Result<(), CharOutOfRange> {
        let (low, high) = Self::check_range(low, high)?;
        self.assign(low, high, CharClass::WORD);
        Ok(())
    }

    /// Make `low..=high` whitespace.
    ///
    /// Clears all prior attributes of each affected code, then grants
    /// WHITESPACE.
    pub fn whitespace_chars(&mut self, low: char, high: char) -> Result<(), CharOutOfRange> {
        let (low, high) = Self::check_range(low, high)?;
        self.assign(low, high, CharClass::WHITESPACE);
        Ok(())
    }

    /// Strip `low..=high` back to ordinary.
    ///
    /// Clears all prior attributes of each affected code; nothing is
    /// granted afterward.
    pub fn ordinary_chars(&mut self, low: char, high: char) -> Result<(), CharOutOfRange> {
        let (low, high) = Self::check_range(low, high)?;
        self.assign(low, high, CharClass::empty());
        Ok(())
    }

    /// Strip a single code back to ordinary.
    pub fn ordinary_char(&mut self, ch: char) -> Result<(), CharOutOfRange> {
        let code = Self::check(ch)?;
        self.assign(code, code, CharClass::empty());
        Ok(())
    }

    /// Make `ch` start a to-end-of-line comment.
    ///
    /// Clears all prior attributes of the code, then grants COMMENT.
    /// Comment delimiters are single characters; there is no range form.
    pub fn comment_char(&mut self, ch: char) -> Result<(), CharOutOfRange> {
        let code = Self::check(ch)?;
        self.assign(code, code, CharClass::COMMENT);
        Ok(())
    }

    /// Make `ch` a string delimiter.
    ///
    /// Clears all prior attributes of the code, then grants QUOTE.
    pub fn quote_char(&mut self, ch: char) -> Result<(), CharOutOfRange> {
        let code = Self::check(ch)?;
        self.assign(code, code, CharClass::QUOTE);
        Ok(())
    }

    /// Layer NUMERIC onto the digits, `.`, and `-`.
    ///
    /// The additive exception to the exclusive-assignment rule: the twelve
    /// codes keep whatever attributes they already have.
    pub fn enable_numbers(&mut self) {
        for code in b'0'..=b'9' {
            self.classes[usize::from(code)] |= CharClass::NUMERIC;
        }
        self.classes[usize::from(b'.')] |= CharClass::NUMERIC;
        self.classes[usize::from(b'-')] |= CharClass::NUMERIC;
    }

    /// Clear every code to ordinary. Idempotent.
    pub fn reset(&mut self) {
        self.classes = [CharClass::empty(); 256];
    }

    fn check(ch: char) -> Result<u8, CharOutOfRange> {
        u8::try_from(u32::from(ch)).map_err(|_| CharOutOfRange { ch })
    }

    fn check_range(low: char, high: char) -> Result<(u8, u8), CharOutOfRange> {
        Ok((Self::check(low)?, Self::check(high)?))
    }

    /// Overwrite the classification of every code in `low..=high`.
    /// Overwriting is what makes assignment exclusive.
    fn assign(&mut self, low: u8, high: u8, class: CharClass) {
        for code in low..=high {
            self.classes[usize::from(code)] = class;
        }
    }
}

impl Default for SyntaxTable {
    /// The historical default: letters (ASCII plus the Latin-1 range
    /// 160-255) are words, codes 0-32 are whitespace, `/` starts comments,
    /// `'` and `"` quote, and number parsing is on.
    fn default() -> Self {
        let mut table = Self::ordinary();
        table.assign(b'a', b'z', CharClass::WORD);
        table.assign(b'A', b'Z', CharClass::WORD);
        table.assign(0xA0, 0xFF, CharClass::WORD);
        table.assign(0x00, b' ', CharClass::WHITESPACE);
        table.assign(b'/', b'/', CharClass::COMMENT);
        table.assign(b'"', b'"', CharClass::QUOTE);
        table.assign(b'\'', b'\'', CharClass::QUOTE);
        table.enable_numbers();
        table
    }
}

impl std::fmt::Debug for SyntaxTable {
    /// Compact summary: only the codes that differ from ordinary.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (code, class) in self.classes.iter().enumerate() {
            if !class.is_empty() {
                map.entry(&code, class);
            }
        }
        map.finish()
    }
}
