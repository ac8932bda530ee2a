//! Cell rendering: confidence classes, composition order and blending

use crate::compositor::blend::LayerRole;
use crate::compositor::label::{LabelRenderer, overlay_label};
use crate::compositor::layers::LayerSet;
use crate::io::configuration::{
    BACKGROUND_COLOR, FULL_COLOR, MASK_COLOR, PART_COLOR, PLACEHOLDER_LABEL,
};
use crate::io::error::Result;
use crate::model::mask::Mask;
use crate::model::symbols::StatusSymbol;
use image::{Rgb, RgbImage};

/// How much of a genuine fingerprint a mask shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceClass {
    /// More symbols than any fingerprint, or forced: a reference render
    OverMask,
    /// Exactly a fingerprint's worth of symbols
    FullMask,
    /// Fewer symbols than a fingerprint: a decoy
    PartialMask,
}

impl ConfidenceClass {
    /// Classify a mask of `len` symbols against fingerprints of `subset_size`
    ///
    /// `mask_override` forces the over-mask class regardless of length.
    pub const fn classify(len: usize, subset_size: usize, mask_override: bool) -> Self {
        if mask_override || len > subset_size {
            Self::OverMask
        } else if len == subset_size {
            Self::FullMask
        } else {
            Self::PartialMask
        }
    }

    /// Status layer drawn last for this class
    pub const fn terminal_status(self) -> StatusSymbol {
        match self {
            Self::OverMask => StatusSymbol::Mask,
            Self::FullMask => StatusSymbol::Full,
            Self::PartialMask => StatusSymbol::Part,
        }
    }
}

/// Layer symbols composited for `mask`, in drawing order
///
/// The mask's traits come first, then the MASK flood for over-masks, the
/// background marker and finally the class's terminal status layer.
pub fn composition_sequence(mask: &Mask, class: ConfidenceClass) -> Vec<char> {
    let mut sequence = mask.symbols().to_vec();
    if class == ConfidenceClass::OverMask {
        sequence.push(StatusSymbol::Mask.symbol());
    }
    sequence.push(StatusSymbol::Background.symbol());
    sequence.push(class.terminal_status().symbol());
    sequence
}

/// Cell background and label colours
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPalette {
    /// Colour every cell starts from
    pub background: Rgb<u8>,
    /// Label colour on over-mask cells
    pub over_mask_label: Rgb<u8>,
    /// Label colour on full-mask cells
    pub full_mask_label: Rgb<u8>,
    /// Label colour on partial-mask cells
    pub partial_mask_label: Rgb<u8>,
}

impl Default for CellPalette {
    fn default() -> Self {
        Self {
            background: Rgb(BACKGROUND_COLOR),
            over_mask_label: Rgb(MASK_COLOR),
            full_mask_label: Rgb(FULL_COLOR),
            partial_mask_label: Rgb(PART_COLOR),
        }
    }
}

impl CellPalette {
    /// Label colour for a confidence class
    pub const fn label_color(&self, class: ConfidenceClass) -> Rgb<u8> {
        match class {
            ConfidenceClass::OverMask => self.over_mask_label,
            ConfidenceClass::FullMask => self.full_mask_label,
            ConfidenceClass::PartialMask => self.partial_mask_label,
        }
    }
}

/// Renders masks into cell images from a pre-loaded layer set
#[derive(Clone, Copy)]
pub struct Compositor<'a> {
    layers: &'a LayerSet,
    labels: Option<&'a dyn LabelRenderer>,
    subset_size: usize,
    palette: CellPalette,
    label_position: (u32, u32),
}

impl<'a> Compositor<'a> {
    /// Create a compositor without labels using the default palette
    pub fn new(layers: &'a LayerSet, subset_size: usize) -> Self {
        Self {
            layers,
            labels: None,
            subset_size,
            palette: CellPalette::default(),
            label_position: (0, 0),
        }
    }

    /// Draw labels with `renderer` at `position` inside each cell
    #[must_use]
    pub fn with_labels(mut self, renderer: &'a dyn LabelRenderer, position: (u32, u32)) -> Self {
        self.labels = Some(renderer);
        self.label_position = position;
        self
    }

    /// Use a custom palette
    #[must_use]
    pub fn with_palette(mut self, palette: CellPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Dimensions of every rendered cell
    pub const fn cell_dimensions(&self) -> (u32, u32) {
        self.layers.dimensions()
    }

    /// Number of symbols in a genuine fingerprint
    pub const fn subset_size(&self) -> usize {
        self.subset_size
    }

    /// Palette in use
    pub const fn palette(&self) -> &CellPalette {
        &self.palette
    }

    /// Render one cell for `mask`
    ///
    /// Layers are blended in [`composition_sequence`] order onto a background
    /// cell. When labels are enabled, `label` (or a placeholder orientation
    /// mark when absent or empty) is drawn in the class colour.
    ///
    /// # Errors
    ///
    /// Returns a layer not found error if a layer in the sequence was not
    /// loaded, or a label error if the label cannot be rasterized
    #[tracing::instrument(level = "trace", skip(self, mask), fields(mask = %mask))]
    pub fn render_cell(
        &self,
        mask: &Mask,
        mask_override: bool,
        label: Option<&str>,
    ) -> Result<RgbImage> {
        let class = ConfidenceClass::classify(mask.len(), self.subset_size, mask_override);
        let (width, height) = self.cell_dimensions();
        let mut cell = RgbImage::from_pixel(width, height, self.palette.background);

        for symbol in composition_sequence(mask, class) {
            let layer = self.layers.get(symbol)?;
            LayerRole::of(symbol).blend_op().apply(&mut cell, layer)?;
        }

        if let Some(renderer) = self.labels {
            let text = label.filter(|text| !text.is_empty()).unwrap_or(PLACEHOLDER_LABEL);
            let rendered = renderer.render(text, self.palette.label_color(class))?;
            overlay_label(&mut cell, &rendered, self.label_position);
        }

        Ok(cell)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/cell.rs"]
mod tests;
