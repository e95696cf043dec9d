//! Bounded line capture
//!
//! Reads one line at a time into a caller-owned buffer without ever writing
//! past it, and resynchronizes the stream when a line does not fit.

use log::{debug, warn};
use std::io::{self, BufRead};

use crate::error::{InputError, InputResult};

pub(crate) const LINE_TERMINATOR: u8 = b'\n';

/// Line-oriented reader over an injected byte stream.
///
/// The reader keeps no state of its own: every call is an independent
/// transaction against the wrapped stream, whose position is the only thing
/// that carries over between calls.
pub struct LineReader<R> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read one line into `buffer`, whose length is the capacity including the
    /// terminator slot.
    ///
    /// On success the line terminator (and a `\r` right before it) is stripped,
    /// a `0` byte follows the content, and the content length is returned.
    /// End-of-input with nothing captured is a successful empty read.
    ///
    /// A line that fills all `capacity - 1` data bytes without ending in `\n`
    /// is rejected with `BufferOverflow` after the rest of it is drained. This
    /// includes a final unterminated line that fits exactly.
    pub fn read_line(&mut self, buffer: &mut [u8]) -> InputResult<usize> {
        let Some(limit) = buffer.len().checked_sub(1) else {
            return Err(InputError::BufferOverflow);
        };

        let mut len = self.capture(&mut buffer[..limit]).map_err(io_failure)?;
        let terminated = len > 0 && buffer[len - 1] == LINE_TERMINATOR;

        if len == limit && !terminated {
            // A one-byte buffer holds only the terminator slot
            if len == 0 && self.at_end().map_err(io_failure)? {
                buffer[0] = 0;
                return Ok(0);
            }
            let discarded = self.drain_line();
            warn!(
                "Line exceeded {} byte buffer, discarded {} residual bytes",
                buffer.len(),
                discarded
            );
            return Err(InputError::BufferOverflow);
        }

        if terminated {
            len -= 1;
            if len > 0 && buffer[len - 1] == b'\r' {
                len -= 1;
            }
        }
        buffer[len] = 0;

        debug!("Captured {} byte line", len);
        Ok(len)
    }

    /// Discard input up to and including the next line terminator, or up to
    /// end-of-input. Returns the number of bytes discarded.
    ///
    /// A read error ends the drain early.
    pub fn drain_line(&mut self) -> usize {
        let mut discarded = 0;
        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("Stopped draining input after read error: {}", e);
                    break;
                }
            };
            if available.is_empty() {
                break;
            }
            match available.iter().position(|&b| b == LINE_TERMINATOR) {
                Some(end) => {
                    self.inner.consume(end + 1);
                    discarded += end + 1;
                    break;
                }
                None => {
                    let len = available.len();
                    self.inner.consume(len);
                    discarded += len;
                }
            }
        }
        discarded
    }

    /// Copy bytes into `dest` until it is full, a terminator has been copied,
    /// or the stream ends.
    fn capture(&mut self, dest: &mut [u8]) -> io::Result<usize> {
        let mut len = 0;
        while len < dest.len() {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }

            let window = &available[..available.len().min(dest.len() - len)];
            let (take, found) = match window.iter().position(|&b| b == LINE_TERMINATOR) {
                Some(end) => (end + 1, true),
                None => (window.len(), false),
            };
            dest[len..len + take].copy_from_slice(&window[..take]);
            self.inner.consume(take);
            len += take;

            if found {
                break;
            }
        }
        Ok(len)
    }

    fn at_end(&mut self) -> io::Result<bool> {
        loop {
            match self.inner.fill_buf() {
                Ok(available) => return Ok(available.is_empty()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

fn io_failure(e: io::Error) -> InputError {
    warn!("Line read failed: {}", e);
    InputError::IoError(e)
}
