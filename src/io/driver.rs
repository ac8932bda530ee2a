//! Batch rendering of sequence files
//!
//! Every valid record becomes one saved sheet. Malformed lines and sheets
//! that fail to render are reported and skipped so one bad record never
//! stops the rest of the batch.

use crate::assignment::sequence::{SequenceRecord, read_sequence_file};
use crate::io::error::{FingerprintError, Result};
use crate::io::image::save_sheet;
use crate::io::progress::ProgressManager;
use crate::layout::sheet::SheetBuilder;
use crate::model::mask::Mask;
use std::path::{Path, PathBuf};

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Paths of sheets written, in record order
    pub rendered: Vec<PathBuf>,
    /// Lines that could not be parsed
    pub skipped: Vec<FingerprintError>,
    /// Records that parsed but failed to render or save, with their ids
    pub failed: Vec<(String, FingerprintError)>,
}

impl BatchReport {
    /// True if every record was rendered
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}

/// Renders sheets for sequence records and saves them to an output directory
pub struct SequenceDriver<'a> {
    builder: SheetBuilder<'a>,
    output_dir: PathBuf,
    progress: Option<ProgressManager>,
}

impl<'a> SequenceDriver<'a> {
    /// Create a driver saving sheets from `builder` into `output_dir`
    pub fn new(builder: SheetBuilder<'a>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            builder,
            output_dir: output_dir.into(),
            progress: None,
        }
    }

    /// Report batch progress through `progress`
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressManager) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Directory receiving the sheets
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render and save the sheet for a single id and mask
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be built or saved
    pub fn render_one(&self, id: &str, mask: &Mask) -> Result<PathBuf> {
        let page = self.builder.build_sheet(id, mask)?;
        save_sheet(&page, &self.output_dir, id)
    }

    /// Render every record of the sequence file at `path`
    ///
    /// # Errors
    ///
    /// Returns a file system error if the file cannot be read; problems with
    /// individual records are collected in the report instead
    pub fn run_file(&mut self, path: &Path) -> Result<BatchReport> {
        let records = read_sequence_file(path)?;
        tracing::info!(
            path = %path.display(),
            records = records.len(),
            "read sequence file"
        );
        Ok(self.run_records(records))
    }

    /// Render every valid record, collecting failures in the report
    pub fn run_records(&mut self, records: Vec<Result<SequenceRecord>>) -> BatchReport {
        let mut report = BatchReport::default();
        if let Some(ref mut pm) = self.progress {
            pm.initialize(records.len());
        }

        for parsed in records {
            let record = match parsed {
                Ok(record) => record,
                Err(error) => {
                    tracing::warn!(%error, "skipping malformed record");
                    report.skipped.push(error);
                    if let Some(ref mut pm) = self.progress {
                        pm.complete_sheet(false);
                    }
                    continue;
                }
            };

            if let Some(ref pm) = self.progress {
                pm.start_sheet(&record.id);
            }

            let outcome = self.render_one(&record.id, &record.mask);
            let succeeded = outcome.is_ok();
            match outcome {
                Ok(path) => {
                    tracing::debug!(id = %record.id, path = %path.display(), "rendered sheet");
                    report.rendered.push(path);
                }
                Err(error) => {
                    tracing::error!(id = %record.id, line = record.line, %error, "sheet failed");
                    report.failed.push((record.id, error));
                }
            }

            if let Some(ref mut pm) = self.progress {
                pm.complete_sheet(succeeded);
            }
        }

        if let Some(ref pm) = self.progress {
            pm.finish();
        }
        tracing::info!(
            rendered = report.rendered.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "batch finished"
        );
        report
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/driver.rs"]
mod tests;
