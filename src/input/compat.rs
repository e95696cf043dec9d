//! Status-code entry points
//!
//! Mirror the out-parameter calling convention: outputs are optional
//! references, a missing one is reported as `NullReference` before any input
//! is consumed, and outputs are written only on success.

use std::io::BufRead;

use crate::error::Status;
use crate::input::reader::LineReader;

impl<R: BufRead> LineReader<R> {
    pub fn scan_line(
        &mut self,
        buffer: Option<&mut [u8]>,
        chars_read: Option<&mut usize>,
    ) -> Status {
        let (Some(buffer), Some(chars_read)) = (buffer, chars_read) else {
            return Status::NullReference;
        };
        match self.read_line(buffer) {
            Ok(len) => {
                *chars_read = len;
                Status::Success
            }
            Err(e) => Status::from(&e),
        }
    }

    pub fn scan_int(&mut self, value: Option<&mut i32>) -> Status {
        let Some(value) = value else {
            return Status::NullReference;
        };
        match self.read_int() {
            Ok(v) => {
                *value = v;
                Status::Success
            }
            Err(e) => Status::from(&e),
        }
    }

    pub fn scan_float(&mut self, value: Option<&mut f64>) -> Status {
        let Some(value) = value else {
            return Status::NullReference;
        };
        match self.read_float() {
            Ok(v) => {
                *value = v;
                Status::Success
            }
            Err(e) => Status::from(&e),
        }
    }
}
