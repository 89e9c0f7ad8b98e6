use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SciCalc - A menu-driven arithmetic and scientific calculator
#[derive(Parser)]
#[command(name = "scicalc")]
#[command(about = "A menu-driven arithmetic and scientific calculator")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not wait for Enter after each result
    #[arg(long, global = true)]
    pub no_pause: bool,

    /// Diagnostic log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive calculator (default)
    Shell,
    /// Evaluate a single operation and print the result
    Eval {
        /// Operation name or symbol (add, +, sqrt, deg2rad, ...)
        operation: String,
        /// One or two operands
        #[arg(required = true, num_args = 1..=2, allow_negative_numbers = true)]
        operands: Vec<f64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every operation with its arity and menu key
    Operations,
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
