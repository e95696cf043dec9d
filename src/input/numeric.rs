//! Numeric conversion
//!
//! Captures a line into a fixed stack buffer and converts the whole of it to
//! an `i32` or `f64`, rejecting trailing garbage and out-of-range magnitudes.

use log::debug;
use std::io::BufRead;

use crate::error::{InputError, InputResult};
use crate::input::reader::LineReader;

/// Capture size for integer lines, terminator slot included
pub const INT_CAPTURE_SIZE: usize = 32;

/// Capture size for floating-point lines, terminator slot included
pub const FLOAT_CAPTURE_SIZE: usize = 64;

impl<R: BufRead> LineReader<R> {
    /// Read one line and convert it to an `i32`.
    pub fn read_int(&mut self) -> InputResult<i32> {
        let mut buffer = [0u8; INT_CAPTURE_SIZE];
        let len = self.read_line(&mut buffer)?;
        let value = parse_int(&buffer[..len])?;
        debug!("Converted integer {}", value);
        Ok(value)
    }

    /// Read one line and convert it to an `f64`.
    pub fn read_float(&mut self) -> InputResult<f64> {
        let mut buffer = [0u8; FLOAT_CAPTURE_SIZE];
        let len = self.read_line(&mut buffer)?;
        let value = parse_float(&buffer[..len])?;
        debug!("Converted double {}", value);
        Ok(value)
    }
}

/// Convert base-10 text to an `i32`.
///
/// Leading whitespace and one sign are accepted. Everything after that must be
/// digits: empty text, text without digits and trailing bytes are all
/// `ConversionError`. Values outside the `i32` range are `IntegerOverflow`.
pub fn parse_int(text: &[u8]) -> InputResult<i32> {
    let mut i = skip_space(text);

    let negative = match text.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let digits_start = i;
    let mut magnitude: u64 = 0;
    let mut overflow = false;

    while let Some(&c) = text.get(i) {
        if !c.is_ascii_digit() {
            break;
        }
        if !overflow {
            match magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(u64::from(c - b'0')))
            {
                Some(m) => magnitude = m,
                None => overflow = true,
            }
        }
        i += 1;
    }

    if i == digits_start || i != text.len() {
        return Err(InputError::ConversionError);
    }
    if overflow {
        return Err(InputError::IntegerOverflow);
    }

    let magnitude = i64::try_from(magnitude).map_err(|_| InputError::IntegerOverflow)?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| InputError::IntegerOverflow)
}

/// Convert decimal floating-point text to an `f64`.
///
/// Accepts leading whitespace, a sign, `inf`/`infinity`, `nan` with an
/// optional `(payload)`, or a decimal significand with an optional exponent.
/// Incomplete or trailing text is `ConversionError`; results that overflow to
/// infinity, underflow to zero, or land in the subnormal range are
/// `DoubleOverflow`.
pub fn parse_float(text: &[u8]) -> InputResult<f64> {
    let start = skip_space(text);
    let token = scan_float(&text[start..]).ok_or(InputError::ConversionError)?;
    if start + token.len != text.len() {
        return Err(InputError::ConversionError);
    }

    let value = match token.kind {
        FloatKind::Nan if token.negative => -f64::NAN,
        FloatKind::Nan => f64::NAN,
        FloatKind::Infinity if token.negative => f64::NEG_INFINITY,
        FloatKind::Infinity => f64::INFINITY,
        FloatKind::Decimal { nonzero } => {
            let value = std::str::from_utf8(&text[start..])
                .ok()
                .and_then(|literal| literal.parse::<f64>().ok())
                .ok_or(InputError::ConversionError)?;
            if value.is_infinite() || value.is_subnormal() || (nonzero && value == 0.0) {
                return Err(InputError::DoubleOverflow);
            }
            value
        }
    };
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FloatKind {
    Decimal { nonzero: bool },
    Infinity,
    Nan,
}

#[derive(Debug, Clone, Copy)]
struct FloatToken {
    len: usize,
    negative: bool,
    kind: FloatKind,
}

/// Find the longest floating-point literal at the start of `s`
fn scan_float(s: &[u8]) -> Option<FloatToken> {
    let mut i = 0;
    let negative = match s.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let rest = &s[i..];
    if starts_with_ignore_case(rest, b"infinity") {
        return Some(FloatToken {
            len: i + 8,
            negative,
            kind: FloatKind::Infinity,
        });
    }
    if starts_with_ignore_case(rest, b"inf") {
        return Some(FloatToken {
            len: i + 3,
            negative,
            kind: FloatKind::Infinity,
        });
    }
    if starts_with_ignore_case(rest, b"nan") {
        let mut len = i + 3;
        if s.get(len) == Some(&b'(') {
            let mut j = len + 1;
            while s.get(j).is_some_and(|c| c.is_ascii_alphanumeric() || *c == b'_') {
                j += 1;
            }
            if s.get(j) == Some(&b')') {
                len = j + 1;
            }
        }
        return Some(FloatToken {
            len,
            negative,
            kind: FloatKind::Nan,
        });
    }

    let mut digits = 0;
    let mut nonzero = false;
    while let Some(&c) = s.get(i).filter(|c| c.is_ascii_digit()) {
        digits += 1;
        nonzero |= c != b'0';
        i += 1;
    }
    if s.get(i) == Some(&b'.') {
        i += 1;
        while let Some(&c) = s.get(i).filter(|c| c.is_ascii_digit()) {
            digits += 1;
            nonzero |= c != b'0';
            i += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // An exponent marker only counts when digits follow it
    if matches!(s.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(s.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if s.get(j).is_some_and(u8::is_ascii_digit) {
            while s.get(j).is_some_and(u8::is_ascii_digit) {
                j += 1;
            }
            i = j;
        }
    }

    Some(FloatToken {
        len: i,
        negative,
        kind: FloatKind::Decimal { nonzero },
    })
}

fn starts_with_ignore_case(s: &[u8], word: &[u8]) -> bool {
    s.len() >= word.len() && s[..word.len()].eq_ignore_ascii_case(word)
}

/// Skip C `isspace` bytes
fn skip_space(s: &[u8]) -> usize {
    s.iter()
        .take_while(|&&c| matches!(c, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r'))
        .count()
}
