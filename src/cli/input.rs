//! Raw input handling for the command loop.
//!
//! Reading and parsing are separate steps: `prompt` only moves bytes,
//! while the parse helpers turn raw text into typed values or an
//! [`AppError::InvalidInput`] that the loop reports without ever touching
//! the network.

use crate::error::AppError;
use std::io::{self, BufRead, Write};

/// Writes `text`, then reads one line. `Ok(None)` means the input stream is
/// closed and the caller should unwind to the menu (which will then exit).
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parses a decimal field, rejecting non-numeric input locally.
pub fn parse_decimal(field: &str, raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidInput(format!("{field} must be a number")))
}

/// Parses an order id, rejecting non-numeric input locally.
pub fn parse_order_id(raw: &str) -> Result<u64, AppError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| AppError::InvalidInput("order id must be a positive integer".to_string()))
}
