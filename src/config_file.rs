//! Configuration file handling for calculator preferences.
//!
//! A config file is only read when one is passed on the command line; the
//! defaults reproduce the stock interactive behaviour.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine::history::DEFAULT_DISPLAY_LIMIT;

/// Calculator preferences that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// How many recent entries "Show History" lists
    pub history_display_limit: usize,
    /// Wait for Enter after each result, error or history listing
    pub pause_after_output: bool,
    /// Print the welcome banner on startup
    pub show_banner: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_display_limit: DEFAULT_DISPLAY_LIMIT,
            pause_after_output: true,
            show_banner: true,
        }
    }
}

impl CalculatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.history_display_limit == 0 {
            anyhow::bail!("history_display_limit must be at least 1");
        }
        Ok(())
    }
}
