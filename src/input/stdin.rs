//! Process stdin entry points
//!
//! Each call locks standard input for its own duration only. Callers are
//! expected to read from a single thread.

use std::io::{self, StdinLock};

use crate::error::InputResult;
use crate::input::reader::LineReader;

impl LineReader<StdinLock<'static>> {
    /// Reader bound to the process stdin, holding its lock until dropped
    pub fn stdin() -> Self {
        LineReader::new(io::stdin().lock())
    }
}

/// Read one line from stdin into `buffer`
pub fn read_line(buffer: &mut [u8]) -> InputResult<usize> {
    LineReader::stdin().read_line(buffer)
}

/// Read one line from stdin as an `i32`
pub fn read_int() -> InputResult<i32> {
    LineReader::stdin().read_int()
}

/// Read one line from stdin as an `f64`
pub fn read_float() -> InputResult<f64> {
    LineReader::stdin().read_float()
}

/// Discard the rest of the current stdin line
pub fn drain_line() -> usize {
    LineReader::stdin().drain_line()
}
