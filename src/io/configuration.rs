//! Reference parameters and runtime configuration

use crate::combinatorics::combinations::binomial;
use crate::io::error::{Result, invalid_configuration};
use crate::layout::geometry::{PageGeometry, cm_to_pixels};
use crate::layout::plan::SamplePlan;
use crate::model::symbols::Universe;
use std::path::PathBuf;

/// Title written to sequence files and logs
pub const TITLE: &str = "Fingerprints for Games Generator";

// Combinatorial parameters
/// Number of trait symbols in the universe (N)
pub const UNIVERSE_SIZE: usize = 14;
/// Number of traits on a player's fingerprint (K)
pub const SUBSET_SIZE: usize = 7;
/// Number of players to assign fingerprints to (P)
pub const DEFAULT_PLAYERS: usize = 200;
/// Fixed seed for reproducible assignments and decoys (S)
pub const DEFAULT_SEED: u64 = 518;

// Print layout, A4 landscape
/// Print resolution in dots per inch
pub const DPI: u32 = 300;
/// Page width in centimetres
pub const PAGE_WIDTH_CM: f64 = 29.7;
/// Page height in centimetres
pub const PAGE_HEIGHT_CM: f64 = 21.0;
/// Margin in pixels subtracted before splitting the page into cells
pub const FIELD: u32 = 3;
/// Number of cell columns per sheet
pub const COLUMNS: u32 = 8;
/// Number of cell rows per sheet
pub const ROWS: u32 = 4;

/// Decoy mixture as `(sub-mask size, cell count)` pairs
pub const REFERENCE_SAMPLES: [(usize, usize); 6] =
    [(7, 4), (5, 2), (4, 7), (3, 10), (2, 7), (1, 2)];

// Colours
/// Page and cell background
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];
/// Label colour on over-mask cells
pub const MASK_COLOR: [u8; 3] = [178, 178, 178];
/// Label colour on full-mask cells, invisible against the background
pub const FULL_COLOR: [u8; 3] = BACKGROUND_COLOR;
/// Label colour on partial-mask cells
pub const PART_COLOR: [u8; 3] = [0, 0, 0];

// Labels
/// Font families tried in order for labels
pub const FONT_FAMILIES: &str = "Verdana, Arial, sans-serif";
/// Label font size in centimetres
pub const FONT_SIZE_CM: f64 = 0.3;
/// Label offset from the cell's top-left corner in centimetres
pub const LABEL_OFFSET_CM: (f64, f64) = (0.3, 0.25);
/// Label drawn when a cell has none; the Cyrillic letter shows which way is up
pub const PLACEHOLDER_LABEL: &str = " \u{411}";

// Files
/// Extension of layer images and rendered sheets
pub const IMAGE_EXTENSION: &str = "png";
/// Directory holding one layer image per symbol
pub const DEFAULT_LAYERS_DIR: &str = "Layers";
/// Directory receiving rendered sheets
pub const DEFAULT_OUTPUT_DIR: &str = "Result";

/// Complete set of parameters for generating and rendering sheets
#[derive(Clone, Debug)]
pub struct FingerprintConfig {
    /// Number of trait symbols (N)
    pub universe_size: usize,
    /// Traits per fingerprint (K)
    pub subset_size: usize,
    /// Number of players (P)
    pub players: usize,
    /// Global seed (S)
    pub seed: u64,
    /// Print resolution
    pub dpi: u32,
    /// Page width in centimetres
    pub page_width_cm: f64,
    /// Page height in centimetres
    pub page_height_cm: f64,
    /// Page margin in pixels
    pub field: u32,
    /// Grid columns
    pub columns: u32,
    /// Grid rows
    pub rows: u32,
    /// Decoy mixture for player sheets
    pub sample_plan: SamplePlan,
    /// Directory of layer images
    pub layers_dir: PathBuf,
    /// Directory for rendered sheets
    pub output_dir: PathBuf,
    /// Whether to rasterize cell labels
    pub labels: bool,
    /// Whether to flip player sheets for printing on transparent film
    pub mirror: bool,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            universe_size: UNIVERSE_SIZE,
            subset_size: SUBSET_SIZE,
            players: DEFAULT_PLAYERS,
            seed: DEFAULT_SEED,
            dpi: DPI,
            page_width_cm: PAGE_WIDTH_CM,
            page_height_cm: PAGE_HEIGHT_CM,
            field: FIELD,
            columns: COLUMNS,
            rows: ROWS,
            sample_plan: SamplePlan::reference(),
            layers_dir: PathBuf::from(DEFAULT_LAYERS_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            labels: true,
            mirror: false,
        }
    }
}

impl FingerprintConfig {
    /// Trait universe for these parameters
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the universe size is out of range
    pub fn universe(&self) -> Result<Universe> {
        Universe::alphabetic(self.universe_size)
    }

    /// Page geometry for these print parameters
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the page cannot hold the grid
    pub fn geometry(&self) -> Result<PageGeometry> {
        PageGeometry::from_print(
            self.dpi,
            self.page_width_cm,
            self.page_height_cm,
            self.field,
            self.columns,
            self.rows,
        )
    }

    /// Label offset inside a cell in pixels
    pub fn label_position(&self) -> (u32, u32) {
        (
            cm_to_pixels(LABEL_OFFSET_CM.0, self.dpi),
            cm_to_pixels(LABEL_OFFSET_CM.1, self.dpi),
        )
    }

    /// Label font size in pixels
    pub fn font_size(&self) -> f32 {
        cm_to_pixels(FONT_SIZE_CM, self.dpi) as f32
    }

    /// Check every invariant the pipelines rely on
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - the universe size is out of range or smaller than the fingerprint size
    /// - there are more players than distinct fingerprints
    /// - the page cannot hold the grid
    /// - the sample plan does not fill the grid exactly
    pub fn validate(&self) -> Result<()> {
        let universe = self.universe()?;
        if self.subset_size == 0 || self.subset_size > universe.len() {
            return Err(invalid_configuration(
                "subset_size",
                &self.subset_size,
                &format!("must be between 1 and {}", universe.len()),
            ));
        }

        let available = binomial(universe.len(), self.subset_size).unwrap_or(u64::MAX);
        if self.players as u64 > available {
            return Err(invalid_configuration(
                "players",
                &self.players,
                &format!("exceeds the {available} available fingerprints"),
            ));
        }

        let geometry = self.geometry()?;
        self.sample_plan
            .validate(self.subset_size, geometry.capacity())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/configuration.rs"]
mod tests;
