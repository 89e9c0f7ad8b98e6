//! Shell state definitions
//!
//! Small enums describing how a prompt or a loop iteration ended.

/// Why the shell loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user chose "Quit" or typed the sentinel at the menu
    Quit,
    /// Standard input was closed
    EndOfInput,
}

/// Result of asking the user for something
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prompted<T> {
    Value(T),
    /// The quit sentinel abandoned the prompt
    Cancelled,
    /// Input ended before an answer arrived
    EndOfInput,
}

impl<T> Prompted<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Prompted<U> {
        match self {
            Self::Value(v) => Prompted::Value(f(v)),
            Self::Cancelled => Prompted::Cancelled,
            Self::EndOfInput => Prompted::EndOfInput,
        }
    }
}

/// What the loop does after one menu round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit(ExitReason),
}
