//! Error handling module for the calculator
//!
//! Provides the typed failures every engine operation can report. The shell
//! catches all of them, prints the message and keeps looping.

use thiserror::Error;

/// Main error type for the calculator
#[derive(Error, Debug)]
pub enum CalcError {
    /// Division or modulo by zero
    #[error("{0}")]
    DivisionByZero(String),

    /// Argument outside the function's domain (negative sqrt, non-positive log)
    #[error("{0}")]
    Domain(String),

    /// Result magnitude exceeds the range of an `f64`
    #[error("{0}")]
    Overflow(String),

    /// Non-numeric text where a number was expected
    #[error("Invalid input. {0}")]
    InputParse(String),

    /// Terminal IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for anything the other variants do not describe
    #[error("{0}")]
    Unexpected(String),
}

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalcError>;

impl CalcError {
    /// Create a division-by-zero error
    pub fn division_by_zero(msg: impl Into<String>) -> Self {
        Self::DivisionByZero(msg.into())
    }

    /// Create a domain error
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Create an overflow error
    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    /// Create an input parse error
    pub fn input_parse(msg: impl Into<String>) -> Self {
        Self::InputParse(msg.into())
    }

    /// Create an unexpected error
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Whether the error comes from the math itself rather than the terminal.
    ///
    /// The shell reports these as `Error:` and everything else as
    /// `Unexpected error:`.
    pub fn is_calculation(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero(_) | Self::Domain(_) | Self::Overflow(_)
        )
    }
}
