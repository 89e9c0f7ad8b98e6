//! SciCalc - Main entry point
//!
//! A menu-driven arithmetic and scientific calculator.

use anyhow::{Context, Result};
use std::io::{self, BufReader};
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use scicalc::cli::{Cli, Commands};
use scicalc::{signals, CalculatorConfig, Engine, Shell};

/// Initialize the logger with appropriate settings
///
/// Diagnostics go to stderr so the calculator transcript on stdout stays
/// clean. The level comes from `--log-level`, never from the environment.
fn init_logger(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Initialize logging first
    init_logger(&cli.log_level);
    info!("SciCalc starting up");

    match cli.command {
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match load_config(&config) {
                Ok(config) => println!("✓ Configuration file is valid: {:?}", config),
                Err(e) => {
                    error!("Configuration validation failed: {:#}", e);
                    eprintln!("✗ Configuration validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Eval {
            operation,
            operands,
            json,
        }) => run_eval(&operation, &operands, json)?,
        Some(Commands::Operations) => {
            for op in scicalc::list_operations() {
                println!(
                    "{:>3}  {:<8} {:<7} {}",
                    op.menu_key,
                    op.name,
                    op.arity.to_string(),
                    op.label
                );
            }
        }
        Some(Commands::Shell) | None => {
            let mut config = match &cli.config {
                Some(path) => load_config(path)?,
                None => CalculatorConfig::default(),
            };
            if cli.no_pause {
                config.pause_after_output = false;
            }
            run_shell(config)?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<CalculatorConfig> {
    let config = CalculatorConfig::load_from_file(path)?;
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Run the interactive shell on stdin/stdout
fn run_shell(config: CalculatorConfig) -> Result<()> {
    // SIGINT must end the session cleanly even while blocked on stdin
    if let Err(e) = signals::init_signal_handlers() {
        warn!("Failed to initialize signal handlers: {}", e);
    }
    debug!("Signal handlers initialized");

    // stdout stays unlocked between writes; the signal thread prints the
    // interrupt message through it
    let input = BufReader::new(io::stdin());
    let mut shell = Shell::new(config, input, io::stdout());
    let reason = shell.run().context("Terminal I/O failed")?;
    info!("Calculator finished: {:?}", reason);
    Ok(())
}

/// Evaluate a single operation and print it
fn run_eval(operation: &str, operands: &[f64], json: bool) -> Result<()> {
    let mut engine = Engine::new();
    match scicalc::evaluate_once(&mut engine, operation, operands) {
        Ok(evaluation) if json => {
            let text = serde_json::to_string_pretty(&evaluation)
                .context("Failed to serialize evaluation to JSON")?;
            println!("{}", text);
        }
        Ok(evaluation) => println!("{}", evaluation.entry),
        Err(e) => {
            error!("Evaluation failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}
