//! Calculation history
//!
//! Entries are stored without limit; only the display window is capped.

use tracing::debug;

use crate::types::format_number;

/// Default number of entries shown by [`History::recent`]
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Ordered record of successful calculations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `"{description} = {result}"`
    pub fn record(&mut self, description: &str, result: f64) {
        let entry = format!("{} = {}", description, format_number(result));
        debug!("Recording history entry: {}", entry);
        self.entries.push(entry);
    }

    /// The last `limit` entries, oldest first, each paired with a 1-based
    /// display index counted from the start of the window.
    pub fn recent(&self, limit: usize) -> Vec<(usize, &str)> {
        let start = self.entries.len().saturating_sub(limit);
        self.entries[start..]
            .iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry.as_str()))
            .collect()
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} history entries", self.entries.len());
        self.entries.clear();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
