//! SciCalc Library
//!
//! This library provides the calculator engine and the interactive shell
//! built on top of it.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod input;
pub mod signals;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{ExitReason, Shell};
pub use commands::{evaluate_once, list_operations, Evaluation, OperationInfo};
pub use config_file::CalculatorConfig;
pub use engine::history::History;
pub use engine::Engine;
pub use error::{CalcError, Result};
pub use types::{format_number, Arity, Operands, Operation, Request};
