//! Terminal output for the interactive shell
//!
//! Everything the shell prints goes through these helpers so the transcript
//! format lives in one place.

pub mod menus;

use std::io::{self, Write};

use crate::error::CalcError;
use crate::types::format_number;

pub use menus::{lookup, render_menu, MenuAction, MenuEntry, MenuSection, MENU};

pub const TITLE: &str = "ADVANCED SCIENTIFIC CALCULATOR";
pub const MENU_PROMPT: &str = "\nSelect an operation (1-18): ";
pub const FIRST_NUMBER_PROMPT: &str = "Enter first number (or 'q' to quit): ";
pub const SECOND_NUMBER_PROMPT: &str = "Enter second number (or 'q' to quit): ";
pub const SINGLE_NUMBER_PROMPT: &str = "Enter number (or 'q' to quit): ";
pub const PAUSE_PROMPT: &str = "Press Enter to continue...";
pub const INVALID_CHOICE: &str = "Invalid choice. Please select a number from 1-18.";
pub const FAREWELL: &str = "Thank you for using the calculator!";
pub const INTERRUPTED: &str = "\n\nCalculator interrupted. Goodbye!";

/// Startup greeting
pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to the Advanced Scientific Calculator!")?;
    writeln!(
        out,
        "This calculator supports floating-point arithmetic and scientific functions."
    )?;
    writeln!(out, "You can quit any operation by entering 'q'.")
}

/// Write `prompt` without a newline and flush so it shows before input
pub fn prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{}", prompt)?;
    out.flush()
}

pub fn render_result<W: Write>(out: &mut W, result: f64) -> io::Result<()> {
    writeln!(out, "\nResult: {}", format_number(result))
}

/// Report a failure; math errors and everything else read differently
pub fn render_error<W: Write>(out: &mut W, err: &CalcError) -> io::Result<()> {
    match err {
        CalcError::InputParse(_) => writeln!(out, "{}", err),
        e if e.is_calculation() => writeln!(out, "\nError: {}", e),
        e => writeln!(out, "\nUnexpected error: {}", e),
    }
}

/// List history entries as `N. entry`, or say there are none
pub fn render_history<W: Write>(out: &mut W, entries: &[(usize, &str)]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No calculations in history.");
    }
    writeln!(out, "\n=== Calculation History ===")?;
    for (index, entry) in entries {
        writeln!(out, "{}. {}", index, entry)?;
    }
    writeln!(out)
}
