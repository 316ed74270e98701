//! Table-driven stream tokenizer.
//!
//! A [`Tokenizer`] pulls character codes one at a time from a
//! [`CharSource`] and groups them into words, numbers, quoted strings,
//! end-of-line markers, and single ordinary characters. There is no fixed
//! grammar: an owned per-character [`SyntaxTable`] decides what every code
//! means, and both the table and the engine flags can be reconfigured
//! between calls on a live stream.
//!
//! # Modules
//!
//! - [`table`]: character classification ([`SyntaxTable`], [`CharClass`])
//! - [`tokenizer`]: the scanning engine ([`Tokenizer`])
//! - [`token`]: token kinds ([`TokenKind`])
//! - [`display`]: diagnostic rendering ([`format_token`])
//! - [`error`]: failure types ([`ScanError`], [`CharOutOfRange`])
//!
//! # Example
//!
//! ```
//! use stoker::{BufferSource, TokenKind, Tokenizer};
//!
//! # fn main() -> Result<(), stoker::ScanError> {
//! let mut t = Tokenizer::new(BufferSource::from("midnight 12-34"));
//!
//! assert_eq!(t.next_token()?, TokenKind::Word);
//! assert_eq!(t.text(), "midnight");
//! assert_eq!(t.next_token()?, TokenKind::Number);
//! assert_eq!(t.value(), 12.0);
//! assert_eq!(t.next_token()?, TokenKind::Number);
//! assert_eq!(t.value(), -34.0);
//! assert_eq!(t.next_token()?, TokenKind::Eof);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
mod escape;
pub mod table;
pub mod token;
pub mod tokenizer;

pub use display::format_token;
pub use error::{CharOutOfRange, ScanError};
pub use table::{CharClass, SyntaxTable};
pub use token::TokenKind;
pub use tokenizer::Tokenizer;

// Sources re-exported so one `use stoker::...` covers the common setup.
pub use stoker_source::{BufferSource, CharSource, ReaderSource};
