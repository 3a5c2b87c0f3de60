use std::io::{self, BufRead};

use mochila_common::error::ValidationError;

/// Line-oriented reader over any buffered source.
///
/// Every read consumes a whole line, so a malformed answer never leaks into
/// the next prompt.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    /// Reads one line with its trailing `\n` / `\r\n` removed.
    ///
    /// Returns `Ok(None)` at end of input. A line that is not UTF-8 is still
    /// consumed and comes back as [`ValidationError::NotUtf8`].
    pub fn read_line(&mut self) -> io::Result<Option<Result<String, ValidationError>>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        let line = String::from_utf8(self.buf.clone()).map_err(|_| ValidationError::NotUtf8);
        Ok(Some(line))
    }
}
