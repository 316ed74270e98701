//! Error types for scanning and configuration.

use std::io;

use thiserror::Error;

/// Failure while producing a token.
///
/// Raised only when the character source itself fails. End of input is not
/// an error (it produces an end-of-file token), and neither are malformed
/// numeric runs or unterminated strings and comments -- those resolve by
/// policy, not by failure.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The character source failed mid-scan; distinct from end of input.
    #[error("read error from character source: {0}")]
    Read(#[from] io::Error),
}

/// A configuration argument does not fit the tokenizer's alphabet.
///
/// The classification table covers character codes 0-255. Any `char` above
/// U+00FF is rejected at the configuration call and the table is left
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("character {ch:?} is outside the 8-bit alphabet")]
pub struct CharOutOfRange {
    /// The offending argument.
    pub ch: char,
}
