//! Error types
//!
//! Defines the failure kinds of the input layer and the status taxonomy
//! shared by every read operation.

use std::fmt;
use std::io;

/// Failure kinds reported by line and numeric reads
#[derive(Debug)]
pub enum InputError {
    /// A required output location was absent
    NullReference,
    /// Reserved for format-string style reads; never produced
    InvalidFormat,
    /// The line did not fit in the buffer (or the buffer has no capacity)
    BufferOverflow,
    /// The captured text is not a complete number
    ConversionError,
    /// The underlying stream reported an error
    IoError(io::Error),
    /// The integer literal is outside the `i32` range
    IntegerOverflow,
    /// The floating-point literal overflowed or underflowed `f64`
    DoubleOverflow,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NullReference => write!(f, "Null reference"),
            InputError::InvalidFormat => write!(f, "Invalid format"),
            InputError::BufferOverflow => write!(f, "Input exceeded buffer size"),
            InputError::ConversionError => write!(f, "Conversion error"),
            InputError::IoError(e) => write!(f, "I/O error: {}", e),
            InputError::IntegerOverflow => write!(f, "Integer value out of range"),
            InputError::DoubleOverflow => write!(f, "Double value out of range"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(error: io::Error) -> Self {
        InputError::IoError(error)
    }
}

impl InputError {
    /// Status kind of this failure
    pub fn status(&self) -> Status {
        match self {
            InputError::NullReference => Status::NullReference,
            InputError::InvalidFormat => Status::InvalidFormat,
            InputError::BufferOverflow => Status::BufferOverflow,
            InputError::ConversionError => Status::ConversionError,
            InputError::IoError(_) => Status::IoError,
            InputError::IntegerOverflow => Status::IntegerOverflow,
            InputError::DoubleOverflow => Status::DoubleOverflow,
        }
    }
}

/// Result type of every read operation
pub type InputResult<T> = Result<T, InputError>;

/// Outcome of a read, success included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    NullReference,
    InvalidFormat,
    BufferOverflow,
    ConversionError,
    IoError,
    IntegerOverflow,
    DoubleOverflow,
}

impl Status {
    /// Every status, in code order
    pub const ALL: [Status; 8] = [
        Status::Success,
        Status::NullReference,
        Status::InvalidFormat,
        Status::BufferOverflow,
        Status::ConversionError,
        Status::IoError,
        Status::IntegerOverflow,
        Status::DoubleOverflow,
    ];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Success => "success",
            Status::NullReference => "null reference",
            Status::InvalidFormat => "invalid format",
            Status::BufferOverflow => "buffer overflow",
            Status::ConversionError => "conversion error",
            Status::IoError => "I/O error",
            Status::IntegerOverflow => "integer overflow",
            Status::DoubleOverflow => "double overflow",
        };
        write!(f, "{}", name)
    }
}

impl From<&InputError> for Status {
    fn from(error: &InputError) -> Self {
        error.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_error_maps_to_a_failure_status() {
        let errors = [
            InputError::NullReference,
            InputError::InvalidFormat,
            InputError::BufferOverflow,
            InputError::ConversionError,
            InputError::IoError(io::Error::other("boom")),
            InputError::IntegerOverflow,
            InputError::DoubleOverflow,
        ];
        let statuses: HashSet<Status> = errors.iter().map(InputError::status).collect();
        assert_eq!(statuses.len(), errors.len());
        assert!(!statuses.contains(&Status::Success));
    }

    #[test]
    fn test_status_from_error() {
        assert_eq!(Status::from(&InputError::IntegerOverflow), Status::IntegerOverflow);
        assert_eq!(Status::from(&InputError::ConversionError), Status::ConversionError);
    }

    #[test]
    fn test_io_error_display_and_source() {
        let err = InputError::from(io::Error::other("disk on fire"));
        assert_eq!(err.to_string(), "I/O error: disk on fire");
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&InputError::BufferOverflow).is_none());
    }
}
