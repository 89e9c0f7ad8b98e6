//! Type-safe operation types for the calculator
//!
//! Every arithmetic and scientific function is a variant of [`Operation`],
//! so dispatch is an exhaustive match instead of a chain of string compares.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{CalcError, Result};

/// Number of operands an operation consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    /// Operand count as a plain number
    pub fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Arithmetic and scientific functions exposed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Operation {
    #[serde(rename = "add")]
    #[strum(to_string = "add", serialize = "+")]
    Add,
    #[serde(rename = "subtract")]
    #[strum(to_string = "subtract", serialize = "-")]
    Subtract,
    #[serde(rename = "multiply")]
    #[strum(to_string = "multiply", serialize = "*")]
    Multiply,
    #[serde(rename = "divide")]
    #[strum(to_string = "divide", serialize = "/")]
    Divide,
    #[serde(rename = "power")]
    #[strum(to_string = "power", serialize = "**", serialize = "^")]
    Power,
    #[serde(rename = "modulo")]
    #[strum(to_string = "modulo", serialize = "%")]
    Modulo,
    #[serde(rename = "sqrt")]
    #[strum(to_string = "sqrt")]
    SquareRoot,
    #[serde(rename = "sin")]
    #[strum(to_string = "sin")]
    Sine,
    #[serde(rename = "cos")]
    #[strum(to_string = "cos")]
    Cosine,
    #[serde(rename = "tan")]
    #[strum(to_string = "tan")]
    Tangent,
    #[serde(rename = "ln")]
    #[strum(to_string = "ln")]
    NaturalLog,
    #[serde(rename = "log10")]
    #[strum(to_string = "log10")]
    LogBase10,
    #[serde(rename = "exp")]
    #[strum(to_string = "exp")]
    Exponential,
    #[serde(rename = "deg2rad")]
    #[strum(to_string = "deg2rad")]
    DegreesToRadians,
    #[serde(rename = "rad2deg")]
    #[strum(to_string = "rad2deg")]
    RadiansToDegrees,
}

impl Operation {
    /// How many operands the operation takes
    pub fn arity(self) -> Arity {
        match self {
            Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Power
            | Self::Modulo => Arity::Binary,
            _ => Arity::Unary,
        }
    }

    /// Human readable name used in menus and listings
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Addition (+)",
            Self::Subtract => "Subtraction (-)",
            Self::Multiply => "Multiplication (*)",
            Self::Divide => "Division (/)",
            Self::Power => "Power (**)",
            Self::Modulo => "Modulo (%)",
            Self::SquareRoot => "Square Root",
            Self::Sine => "Sine (radians)",
            Self::Cosine => "Cosine (radians)",
            Self::Tangent => "Tangent (radians)",
            Self::NaturalLog => "Natural Logarithm (ln)",
            Self::LogBase10 => "Logarithm Base 10",
            Self::Exponential => "Exponential (e^x)",
            Self::DegreesToRadians => "Degrees to Radians",
            Self::RadiansToDegrees => "Radians to Degrees",
        }
    }

    /// Infix symbol of a binary operation, function name of a unary one
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "**",
            Self::Modulo => "%",
            Self::SquareRoot => "sqrt",
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
            Self::NaturalLog => "ln",
            Self::LogBase10 => "log10",
            Self::Exponential => "exp",
            Self::DegreesToRadians => "deg2rad",
            Self::RadiansToDegrees => "rad2deg",
        }
    }

    /// Text recorded in history for this operation applied to `operands`.
    ///
    /// Operands render through [`format_number`], so `2.0` prints as `2`.
    pub fn describe(self, operands: Operands) -> String {
        match (self, operands) {
            (Self::DegreesToRadians, Operands::Unary(x)) => {
                format!("{}° to radians", format_number(x))
            }
            (Self::RadiansToDegrees, Operands::Unary(x)) => {
                format!("{} radians to degrees", format_number(x))
            }
            (op, Operands::Unary(x)) => format!("{}({})", op.symbol(), format_number(x)),
            (op, Operands::Binary(x, y)) => format!(
                "{} {} {}",
                format_number(x),
                op.symbol(),
                format_number(y)
            ),
        }
    }
}

/// Render a number the way results and history show it.
///
/// Ordinary magnitudes use the shortest round-trip decimal form (`5`, `0.5`,
/// `0.30000000000000004`); anything at or above 1e16 or below 1e-4 switches
/// to exponent notation (`1e300`, `1.5e-300`).
pub fn format_number(x: f64) -> String {
    let magnitude = x.abs();
    if x == 0.0 || !x.is_finite() || (1e-4..1e16).contains(&magnitude) {
        format!("{}", x)
    } else {
        format!("{:e}", x)
    }
}

/// Operand slot values for a single dispatch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operands {
    Unary(f64),
    Binary(f64, f64),
}

impl Operands {
    /// Build operands for `arity` from a slice, rejecting a wrong count
    pub fn from_slice(arity: Arity, values: &[f64]) -> Result<Self> {
        match (arity, values) {
            (Arity::Unary, [x]) => Ok(Self::Unary(*x)),
            (Arity::Binary, [x, y]) => Ok(Self::Binary(*x, *y)),
            _ => Err(CalcError::input_parse(format!(
                "Expected {} operand(s), got {}",
                arity.count(),
                values.len()
            ))),
        }
    }

    /// Operand values in slot order
    pub fn to_vec(self) -> Vec<f64> {
        match self {
            Self::Unary(x) => vec![x],
            Self::Binary(x, y) => vec![x, y],
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Self::Unary(_) => Arity::Unary,
            Self::Binary(..) => Arity::Binary,
        }
    }
}

/// A transient (operation, operands) pair handed to the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    pub operation: Operation,
    pub operands: Operands,
}

impl Request {
    /// Pair an operation with operands, checking the arity matches
    pub fn new(operation: Operation, operands: Operands) -> Result<Self> {
        if operation.arity() != operands.arity() {
            return Err(CalcError::unexpected(format!(
                "{} takes {} operand(s)",
                operation,
                operation.arity().count()
            )));
        }
        Ok(Self {
            operation,
            operands,
        })
    }

    /// History description of this request
    pub fn describe(&self) -> String {
        self.operation.describe(self.operands)
    }
}
