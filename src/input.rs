//! Input handling module
//!
//! Reads raw lines from the terminal and turns them into numbers, the quit
//! sentinel, or a parse error.

use std::io::BufRead;

use crate::error::{CalcError, Result};

/// Text that abandons the current prompt (compared case-insensitively)
pub const QUIT_SENTINEL: &str = "q";

/// Outcome of parsing one numeric prompt answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput {
    Value(f64),
    /// The user typed the quit sentinel
    Cancel,
}

/// Whether `text` is the quit sentinel
pub fn is_quit(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(QUIT_SENTINEL)
}

/// Parse a numeric answer.
///
/// Surrounding whitespace is ignored. `inf` and `nan` are accepted the way
/// `f64::from_str` accepts them.
pub fn parse_number(text: &str) -> Result<NumberInput> {
    let trimmed = text.trim();
    if is_quit(trimmed) {
        return Ok(NumberInput::Cancel);
    }
    trimmed
        .parse::<f64>()
        .map(NumberInput::Value)
        .map_err(|_| {
            CalcError::input_parse("Please enter a valid number or 'q' to quit.")
        })
}

/// Read one line without its trailing newline.
///
/// Returns `Ok(None)` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => {
            CalcError::unexpected(format!("could not read input: {}", e))
        }
        _ => CalcError::Io(e),
    })?;
    if read == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
