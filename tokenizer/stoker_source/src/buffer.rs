//! In-memory character source backed by an owned byte buffer.

use std::io;

use crate::CharSource;

/// Owned bytes served one character code at a time.
///
/// The cheapest source for tests and already-loaded documents. Reading
/// never fails; end of input is reached exactly once the position passes
/// the last byte.
#[derive(Clone, Debug)]
pub struct BufferSource {
    bytes: Vec<u8>,
    pos: usize,
}

impl BufferSource {
    /// Wrap owned bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Number of characters consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for BufferSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for BufferSource {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl From<&str> for BufferSource {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

impl From<String> for BufferSource {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl CharSource for BufferSource {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        match self.bytes.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }
}
