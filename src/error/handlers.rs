//! Error handlers
//!
//! Maps input errors to numeric status codes and logs them.

use crate::error::types::{InputError, Status};
use log::error;

/// Handle an input error
pub fn handle_error(err: &InputError) {
    error!("Input error: {}", err);
}

/// Convert a status to its numeric code
pub fn status_code(status: Status) -> i32 {
    match status {
        Status::Success => 0,
        Status::NullReference => -1,
        Status::InvalidFormat => -2,
        Status::BufferOverflow => -3,
        Status::ConversionError => -4,
        Status::IoError => -5,
        Status::IntegerOverflow => -6,
        Status::DoubleOverflow => -7,
    }
}

/// Convert an error to its numeric status code
pub fn error_to_code(err: &InputError) -> i32 {
    status_code(err.status())
}
