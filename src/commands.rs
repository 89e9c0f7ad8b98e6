//! Non-interactive subcommands
//!
//! `eval` runs one operation through the same engine the shell uses and
//! `operations` lists what is available. Both produce values the binary
//! prints, which keeps them testable without capturing stdout.

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::engine::Engine;
use crate::error::{CalcError, Result};
use crate::types::{format_number, Arity, Operands, Operation, Request};
use crate::ui::menus;

/// Outcome of a one-shot evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub operands: Vec<f64>,
    pub result: f64,
    /// The history line the shell would have recorded
    pub entry: String,
}

/// Parse `name`, check the operand count and evaluate.
///
/// The engine's history receives the entry on success, as in the shell.
pub fn evaluate_once(engine: &mut Engine, name: &str, values: &[f64]) -> Result<Evaluation> {
    let operation: Operation = name.parse().map_err(|_| {
        let known: Vec<String> = Operation::iter().map(|op| op.to_string()).collect();
        CalcError::input_parse(format!(
            "Unknown operation '{}' (expected one of: {})",
            name,
            known.join(", ")
        ))
    })?;
    let operands = Operands::from_slice(operation.arity(), values)?;
    let request = Request::new(operation, operands)?;
    debug!("One-shot evaluation of {}", request.describe());

    let result = engine.evaluate(&request)?;
    let description = request.describe();
    engine.add_to_history(&description, result);

    Ok(Evaluation {
        operation,
        operands: operands.to_vec(),
        result,
        entry: format!("{} = {}", description, format_number(result)),
    })
}

/// One row of the `operations` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    pub name: String,
    pub arity: Arity,
    pub menu_key: &'static str,
    pub label: &'static str,
}

pub fn list_operations() -> Vec<OperationInfo> {
    Operation::iter()
        .map(|op| OperationInfo {
            name: op.to_string(),
            arity: op.arity(),
            menu_key: menus::key_for(op).unwrap_or("-"),
            label: op.label(),
        })
        .collect()
}
