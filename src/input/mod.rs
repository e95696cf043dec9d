//! Bounded input
//!
//! Line capture, residual-input draining and numeric conversion over an
//! injected byte stream, plus entry points bound to the process stdin.

pub mod compat;
pub mod numeric;
pub mod reader;
pub mod stdin;

pub use numeric::{FLOAT_CAPTURE_SIZE, INT_CAPTURE_SIZE, parse_float, parse_int};
pub use reader::LineReader;
pub use stdin::{drain_line, read_float, read_int, read_line};
