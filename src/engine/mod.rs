//! Engine modules — the calculator core.
//!
//! The engine owns the calculation history and exposes every arithmetic and
//! scientific function. Operations are pure; recording a result in history
//! is a separate call made by the caller after success.

pub mod history;
pub mod ops;

use tracing::debug;

use crate::error::{CalcError, Result};
use crate::types::{Operands, Operation, Request};
use history::{History, DEFAULT_DISPLAY_LIMIT};

/// Calculator engine holding the history of successful calculations
#[derive(Debug, Clone)]
pub struct Engine {
    history: History,
    display_limit: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with empty history and the default display window
    pub fn new() -> Self {
        Self::with_display_limit(DEFAULT_DISPLAY_LIMIT)
    }

    /// Create an engine whose `show_history` window holds `limit` entries
    pub fn with_display_limit(limit: usize) -> Self {
        Self {
            history: History::new(),
            display_limit: limit.max(1),
        }
    }

    pub fn add(&self, x: f64, y: f64) -> f64 {
        ops::add(x, y)
    }

    pub fn subtract(&self, x: f64, y: f64) -> f64 {
        ops::subtract(x, y)
    }

    pub fn multiply(&self, x: f64, y: f64) -> f64 {
        ops::multiply(x, y)
    }

    pub fn divide(&self, x: f64, y: f64) -> Result<f64> {
        ops::divide(x, y)
    }

    pub fn power(&self, x: f64, y: f64) -> Result<f64> {
        ops::power(x, y)
    }

    pub fn modulo(&self, x: f64, y: f64) -> Result<f64> {
        ops::modulo(x, y)
    }

    pub fn square_root(&self, x: f64) -> Result<f64> {
        ops::square_root(x)
    }

    pub fn sine(&self, x: f64) -> f64 {
        ops::sine(x)
    }

    pub fn cosine(&self, x: f64) -> f64 {
        ops::cosine(x)
    }

    pub fn tangent(&self, x: f64) -> f64 {
        ops::tangent(x)
    }

    pub fn natural_log(&self, x: f64) -> Result<f64> {
        ops::natural_log(x)
    }

    pub fn log_base_10(&self, x: f64) -> Result<f64> {
        ops::log_base_10(x)
    }

    pub fn exponential(&self, x: f64) -> Result<f64> {
        ops::exponential(x)
    }

    pub fn degrees_to_radians(&self, degrees: f64) -> f64 {
        ops::degrees_to_radians(degrees)
    }

    pub fn radians_to_degrees(&self, radians: f64) -> f64 {
        ops::radians_to_degrees(radians)
    }

    /// Run one request through the matching operation.
    ///
    /// Does not record anything; see [`Engine::add_to_history`].
    pub fn evaluate(&self, request: &Request) -> Result<f64> {
        debug!(
            "Evaluating {} with {:?}",
            request.operation, request.operands
        );
        match (request.operation, request.operands) {
            (Operation::Add, Operands::Binary(x, y)) => Ok(self.add(x, y)),
            (Operation::Subtract, Operands::Binary(x, y)) => Ok(self.subtract(x, y)),
            (Operation::Multiply, Operands::Binary(x, y)) => Ok(self.multiply(x, y)),
            (Operation::Divide, Operands::Binary(x, y)) => self.divide(x, y),
            (Operation::Power, Operands::Binary(x, y)) => self.power(x, y),
            (Operation::Modulo, Operands::Binary(x, y)) => self.modulo(x, y),
            (Operation::SquareRoot, Operands::Unary(x)) => self.square_root(x),
            (Operation::Sine, Operands::Unary(x)) => Ok(self.sine(x)),
            (Operation::Cosine, Operands::Unary(x)) => Ok(self.cosine(x)),
            (Operation::Tangent, Operands::Unary(x)) => Ok(self.tangent(x)),
            (Operation::NaturalLog, Operands::Unary(x)) => self.natural_log(x),
            (Operation::LogBase10, Operands::Unary(x)) => self.log_base_10(x),
            (Operation::Exponential, Operands::Unary(x)) => self.exponential(x),
            (Operation::DegreesToRadians, Operands::Unary(x)) => Ok(self.degrees_to_radians(x)),
            (Operation::RadiansToDegrees, Operands::Unary(x)) => Ok(self.radians_to_degrees(x)),
            (op, operands) => Err(CalcError::unexpected(format!(
                "{} cannot be applied to {:?}",
                op, operands
            ))),
        }
    }

    /// Append `"{description} = {result}"` to history
    pub fn add_to_history(&mut self, description: &str, result: f64) {
        self.history.record(description, result);
    }

    /// Up to the display limit of most recent entries, oldest first, with
    /// 1-based display indices
    pub fn show_history(&self) -> Vec<(usize, &str)> {
        self.history.recent(self.display_limit)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Full history, including entries outside the display window
    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_has_empty_history() {
        let engine = Engine::new();
        assert!(engine.history().is_empty());
        assert!(engine.show_history().is_empty());
    }

    #[test]
    fn test_evaluate_does_not_touch_history() {
        let engine = Engine::new();
        let req = Request::new(Operation::Add, Operands::Binary(2.0, 3.0)).unwrap();
        assert_eq!(engine.evaluate(&req).unwrap(), 5.0);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_evaluate_propagates_errors() {
        let engine = Engine::new();
        let req = Request::new(Operation::Divide, Operands::Binary(10.0, 0.0)).unwrap();
        let err = engine.evaluate(&req).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero(_)));
    }

    #[test]
    fn test_evaluate_rejects_unchecked_arity() {
        let engine = Engine::new();
        let req = Request {
            operation: Operation::Sine,
            operands: Operands::Binary(1.0, 2.0),
        };
        assert!(matches!(
            engine.evaluate(&req),
            Err(CalcError::Unexpected(_))
        ));
    }

    #[test]
    fn test_add_then_record() {
        let mut engine = Engine::new();
        let result = engine.add(2.0, 3.0);
        engine.add_to_history("2 + 3", result);
        assert_eq!(engine.history().entries(), ["2 + 3 = 5"]);
    }

    #[test]
    fn test_display_limit_is_configurable() {
        let mut engine = Engine::with_display_limit(3);
        for i in 0..5 {
            engine.add_to_history(&format!("{}", i), i as f64);
        }
        let shown = engine.show_history();
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[0], (1, "2 = 2"));
    }

    #[test]
    fn test_zero_display_limit_is_clamped() {
        let mut engine = Engine::with_display_limit(0);
        engine.add_to_history("1 + 1", 2.0);
        assert_eq!(engine.show_history().len(), 1);
    }
}
