//! Sample plans describing the decoy mixture of a sheet

use crate::io::configuration::REFERENCE_SAMPLES;
use crate::io::error::{Result, invalid_configuration};

/// How many cells to draw from sub-masks of one size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleEntry {
    /// Number of symbols in each sampled sub-mask
    pub size: usize,
    /// Number of cells to fill with such sub-masks
    pub count: usize,
}

/// Ordered list of sample entries for one sheet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplePlan {
    entries: Vec<SampleEntry>,
}

impl SamplePlan {
    /// Create a plan from explicit entries
    pub const fn new(entries: Vec<SampleEntry>) -> Self {
        Self { entries }
    }

    /// Create a plan from `(size, count)` pairs
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(size, count)| SampleEntry { size, count })
                .collect(),
        )
    }

    /// The shipped decoy mixture for an 8 by 4 grid of 7-symbol fingerprints
    pub fn reference() -> Self {
        Self::from_pairs(&REFERENCE_SAMPLES)
    }

    /// Entries in drawing order
    pub fn entries(&self) -> &[SampleEntry] {
        &self.entries
    }

    /// Total number of cells the plan fills
    pub fn total_cells(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Check the plan against the fingerprint size and grid capacity
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - an entry samples zero symbols or more than `subset_size`
    /// - the counts do not add up to exactly `capacity`
    pub fn validate(&self, subset_size: usize, capacity: usize) -> Result<()> {
        if let Some(entry) = self
            .entries
            .iter()
            .find(|entry| entry.size == 0 || entry.size > subset_size)
        {
            return Err(invalid_configuration(
                "sample_plan",
                &entry.size,
                &format!("sample sizes must be between 1 and {subset_size}"),
            ));
        }

        let total = self.total_cells();
        if total != capacity {
            return Err(invalid_configuration(
                "sample_plan",
                &total,
                &format!("cell counts must add up to the grid capacity {capacity}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/plan.rs"]
mod tests;
