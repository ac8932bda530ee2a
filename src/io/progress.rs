//! Progress display for batch sheet rendering

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Sheets: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many sheets of a batch have been handled
pub struct ProgressManager {
    bar: ProgressBar,
    failures: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar, failures: 0 }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            failures: 0,
        }
    }

    /// Set the number of sheets in the batch
    pub fn initialize(&mut self, sheet_count: usize) {
        self.bar.set_length(sheet_count as u64);
        self.bar.set_position(0);
        self.failures = 0;
    }

    /// Show which sheet is being rendered
    pub fn start_sheet(&self, id: &str) {
        self.bar.set_message(id.to_string());
    }

    /// Count a sheet as done, successfully or not
    pub fn complete_sheet(&mut self, succeeded: bool) {
        if !succeeded {
            self.failures += 1;
        }
        self.bar.inc(1);
    }

    /// Number of sheets handled so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Number of sheets that failed so far
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        let message = if self.failures == 0 {
            "All sheets rendered".to_string()
        } else {
            format!("{} sheet(s) failed", self.failures)
        };
        self.bar.finish_with_message(message);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/progress.rs"]
mod tests;
