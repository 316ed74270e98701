//! Character source adapting any [`io::Read`] via an internal chunk buffer.

use std::io::{self, Read};

use crate::CharSource;

/// Refill size. One page-ish chunk keeps syscall counts low without holding
/// a large buffer per open source.
const CHUNK: usize = 8 * 1024;

/// Pulls characters from an [`io::Read`], refilling in chunks.
///
/// Errors from the underlying reader surface directly through
/// [`CharSource::next_char`]; nothing is retried here, not even
/// [`io::ErrorKind::Interrupted`] -- retry policy belongs to the reader or
/// its owner, not to the tokenizer's input path.
pub struct ReaderSource<R> {
    inner: R,
    buf: Box<[u8]>,
    pos: usize,
    filled: usize,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: vec![0; CHUNK].into_boxed_slice(),
            pos: 0,
            filled: 0,
        }
    }

    /// Unwrap, discarding any buffered-but-unread characters.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        if self.pos == self.filled {
            let n = self.inner.read(&mut self.buf)?;
            if n == 0 {
                return Ok(None);
            }
            self.filled = n;
            self.pos = 0;
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(b))
    }
}
