//! Application module
//!
//! Contains the interactive shell: render the menu, read a choice, collect
//! operands, dispatch to the engine and print the outcome.
//!
//! # Module Structure
//! - `state` - Loop and prompt outcome types (ExitReason, Prompted, Step)
//! - Main module - Shell struct and read-dispatch-print loop

mod state;

pub use state::{ExitReason, Prompted, Step};

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config_file::CalculatorConfig;
use crate::engine::Engine;
use crate::error::{CalcError, Result};
use crate::input::{self, NumberInput};
use crate::types::{Arity, Operands, Operation, Request};
use crate::ui::{self, MenuAction};

/// Interactive calculator shell
///
/// Generic over its input and output so the whole loop can be driven from
/// in-memory buffers.
pub struct Shell<R, W> {
    engine: Engine,
    config: CalculatorConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: CalculatorConfig, input: R, output: W) -> Self {
        Self {
            engine: Engine::with_display_limit(config.history_display_limit),
            config,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Consume the shell, handing back its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user quits or input ends.
    ///
    /// Every calculation and input failure is reported and the loop goes on;
    /// only a broken terminal (`CalcError::Io`) ends it with an error.
    pub fn run(&mut self) -> Result<ExitReason> {
        info!("Starting calculator shell");
        if self.config.show_banner {
            ui::render_banner(&mut self.output)?;
        }

        loop {
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Exit(reason)) => {
                    info!("Shell exiting: {:?}", reason);
                    writeln!(self.output, "{}", ui::FAREWELL)?;
                    self.output.flush()?;
                    return Ok(reason);
                }
                Err(CalcError::Io(e)) => return Err(CalcError::Io(e)),
                Err(e) => {
                    warn!("Unhandled error in shell loop: {}", e);
                    ui::render_error(&mut self.output, &e)?;
                    if let Prompted::EndOfInput = self.pause()? {
                        return Ok(ExitReason::EndOfInput);
                    }
                }
            }
        }
    }

    /// One menu round: show the menu, read a choice, act on it
    pub fn step(&mut self) -> Result<Step> {
        ui::render_menu(&mut self.output, ui::TITLE)?;
        ui::prompt(&mut self.output, ui::MENU_PROMPT)?;

        let Some(choice) = input::read_line(&mut self.input)? else {
            return Ok(Step::Exit(ExitReason::EndOfInput));
        };
        debug!("Menu choice: {:?}", choice);

        let Some(action) = ui::lookup(&choice) else {
            writeln!(self.output, "{}", ui::INVALID_CHOICE)?;
            return self.pause_then_continue();
        };

        match action {
            MenuAction::Quit => Ok(Step::Exit(ExitReason::Quit)),
            MenuAction::ShowHistory => {
                ui::render_history(&mut self.output, &self.engine.show_history())?;
                self.pause_then_continue()
            }
            MenuAction::ClearHistory => {
                self.engine.clear_history();
                writeln!(self.output, "History cleared.")?;
                self.pause_then_continue()
            }
            MenuAction::Calculate(op) => self.calculate(op),
        }
    }

    fn calculate(&mut self, operation: Operation) -> Result<Step> {
        let operands = match self.read_operands(operation.arity())? {
            Prompted::Value(operands) => operands,
            Prompted::Cancelled => {
                debug!("{} cancelled at operand prompt", operation);
                return Ok(Step::Continue);
            }
            Prompted::EndOfInput => return Ok(Step::Exit(ExitReason::EndOfInput)),
        };

        let request = Request::new(operation, operands)?;
        match self.engine.evaluate(&request) {
            Ok(result) => {
                ui::render_result(&mut self.output, result)?;
                let description = request.describe();
                info!("{} = {}", description, result);
                self.engine.add_to_history(&description, result);
            }
            Err(e) => {
                warn!("{} failed: {}", request.describe(), e);
                ui::render_error(&mut self.output, &e)?;
            }
        }
        self.pause_then_continue()
    }

    fn read_operands(&mut self, arity: Arity) -> Result<Prompted<Operands>> {
        match arity {
            Arity::Unary => Ok(self
                .read_number(ui::SINGLE_NUMBER_PROMPT)?
                .map(Operands::Unary)),
            Arity::Binary => {
                let x = match self.read_number(ui::FIRST_NUMBER_PROMPT)? {
                    Prompted::Value(x) => x,
                    Prompted::Cancelled => return Ok(Prompted::Cancelled),
                    Prompted::EndOfInput => return Ok(Prompted::EndOfInput),
                };
                Ok(self
                    .read_number(ui::SECOND_NUMBER_PROMPT)?
                    .map(|y| Operands::Binary(x, y)))
            }
        }
    }

    /// Ask for a number until one parses or the user cancels
    fn read_number(&mut self, prompt: &str) -> Result<Prompted<f64>> {
        loop {
            ui::prompt(&mut self.output, prompt)?;
            let Some(line) = input::read_line(&mut self.input)? else {
                return Ok(Prompted::EndOfInput);
            };
            match input::parse_number(&line) {
                Ok(NumberInput::Value(x)) => return Ok(Prompted::Value(x)),
                Ok(NumberInput::Cancel) => return Ok(Prompted::Cancelled),
                Err(e) => {
                    debug!("Rejected numeric input {:?}", line);
                    ui::render_error(&mut self.output, &e)?;
                }
            }
        }
    }

    /// Wait for Enter when pausing is enabled
    fn pause(&mut self) -> Result<Prompted<()>> {
        if !self.config.pause_after_output {
            return Ok(Prompted::Value(()));
        }
        ui::prompt(&mut self.output, ui::PAUSE_PROMPT)?;
        match input::read_line(&mut self.input)? {
            Some(_) => Ok(Prompted::Value(())),
            None => Ok(Prompted::EndOfInput),
        }
    }

    fn pause_then_continue(&mut self) -> Result<Step> {
        match self.pause()? {
            Prompted::EndOfInput => Ok(Step::Exit(ExitReason::EndOfInput)),
            _ => Ok(Step::Continue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet_config() -> CalculatorConfig {
        CalculatorConfig {
            pause_after_output: false,
            show_banner: false,
            ..CalculatorConfig::default()
        }
    }

    fn run_script(config: CalculatorConfig, script: &str) -> (ExitReason, Engine, String) {
        let mut shell = Shell::new(config, Cursor::new(script.to_string()), Vec::new());
        let reason = shell.run().unwrap();
        let engine = shell.engine().clone();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (reason, engine, output)
    }

    #[test]
    fn test_quit_from_menu() {
        let (reason, _, output) = run_script(quiet_config(), "18\n");
        assert_eq!(reason, ExitReason::Quit);
        assert!(output.contains(ui::FAREWELL));
    }

    #[test]
    fn test_sentinel_at_menu_quits() {
        let (reason, _, _) = run_script(quiet_config(), "Q\n");
        assert_eq!(reason, ExitReason::Quit);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (reason, _, _) = run_script(quiet_config(), "");
        assert_eq!(reason, ExitReason::EndOfInput);
    }

    #[test]
    fn test_addition_records_history() {
        let (_, engine, output) = run_script(quiet_config(), "1\n2\n3\n18\n");
        assert!(output.contains("Result: 5"));
        assert_eq!(engine.history().entries(), ["2 + 3 = 5"]);
    }

    #[test]
    fn test_step_returns_continue_after_calculation() {
        let mut shell = Shell::new(
            quiet_config(),
            Cursor::new("7\n16\n".to_string()),
            Vec::new(),
        );
        assert_eq!(shell.step().unwrap(), Step::Continue);
        assert_eq!(shell.engine().history().entries(), ["sqrt(16) = 4"]);
    }

    #[test]
    fn test_pause_consumes_a_line() {
        let config = CalculatorConfig {
            show_banner: false,
            ..CalculatorConfig::default()
        };
        let (reason, engine, output) = run_script(config, "3\n4\n5\n\n18\n");
        assert_eq!(reason, ExitReason::Quit);
        assert!(output.contains(ui::PAUSE_PROMPT));
        assert_eq!(engine.history().entries(), ["4 * 5 = 20"]);
    }

    #[test]
    fn test_unreadable_input_is_reported_and_loop_continues() {
        let mut bytes = vec![0xff, 0xfe, b'\n'];
        bytes.extend_from_slice(b"18\n");
        let mut shell = Shell::new(quiet_config(), Cursor::new(bytes), Vec::new());
        let reason = shell.run().unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        assert_eq!(reason, ExitReason::Quit);
        assert!(output.contains("Unexpected error:"));
    }
}
