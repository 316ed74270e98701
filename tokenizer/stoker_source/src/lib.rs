//! Character sources for the stoker tokenizer.
//!
//! The tokenizer pulls its input one character code at a time through the
//! [`CharSource`] trait. A source yields bytes (the tokenizer's alphabet is
//! the 256 character codes), reports end of input as `Ok(None)`, and reports
//! real failures as `Err` -- the two are never conflated, so a broken pipe
//! cannot masquerade as a clean end of stream.
//!
//! Two implementations cover the common cases:
//!
//! - [`BufferSource`]: owned in-memory bytes, infallible.
//! - [`ReaderSource`]: adapts any [`io::Read`], refilling an internal chunk
//!   buffer as it goes.
//!
//! Anything else (sockets, decompressors, test scripts) implements the
//! one-method trait directly. The trait is dyn-compatible, so heterogeneous
//! inputs can be handled behind `Box<dyn CharSource>`.

use std::io;

mod buffer;
mod reader;

pub use buffer::BufferSource;
pub use reader::ReaderSource;

/// A sequential supplier of character codes.
///
/// # Contract
///
/// `next_char` returns `Ok(Some(code))` for each character in order,
/// `Ok(None)` once the input is exhausted, and `Err` for a real read
/// failure. A source is not required to keep returning `Ok(None)` after
/// exhaustion, and an error does not have to be terminal; callers decide
/// whether to retry. The tokenizer itself never retries.
pub trait CharSource {
    /// Pull the next character code, or `None` at end of input.
    fn next_char(&mut self) -> io::Result<Option<u8>>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        (**self).next_char()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        (**self).next_char()
    }
}
