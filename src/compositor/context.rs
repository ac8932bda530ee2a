//! Render context built once at startup and borrowed by every sheet

use crate::compositor::cell::Compositor;
use crate::compositor::label::{LabelRenderer, SvgLabelRenderer};
use crate::compositor::layers::LayerSet;
use crate::io::configuration::{FONT_FAMILIES, FingerprintConfig};
use crate::io::error::Result;

/// Loaded layer assets and the optional label renderer
///
/// Assets are loaded eagerly so a missing layer stops the run before any
/// sheet is rendered. Nothing is mutated after construction.
pub struct RenderContext {
    layers: LayerSet,
    labels: Option<Box<dyn LabelRenderer>>,
    subset_size: usize,
    label_position: (u32, u32),
}

impl RenderContext {
    /// Load every layer named by `config` and set up labels if enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a layer image
    /// cannot be loaded
    pub fn load(config: &FingerprintConfig) -> Result<Self> {
        let universe = config.universe()?;
        let geometry = config.geometry()?;
        let layers = LayerSet::load_from_dir(
            &config.layers_dir,
            &universe,
            geometry.cell_width,
            geometry.cell_height,
        )?;
        tracing::info!(
            layers = universe.all_layers().len(),
            dir = %config.layers_dir.display(),
            width = geometry.cell_width,
            height = geometry.cell_height,
            "loaded layers"
        );

        let labels: Option<Box<dyn LabelRenderer>> = if config.labels {
            Some(Box::new(SvgLabelRenderer::with_system_fonts(
                config.font_size(),
                FONT_FAMILIES,
            )))
        } else {
            None
        };

        Ok(Self::new(
            layers,
            labels,
            config.subset_size,
            config.label_position(),
        ))
    }

    /// Assemble a context from already prepared parts
    pub fn new(
        layers: LayerSet,
        labels: Option<Box<dyn LabelRenderer>>,
        subset_size: usize,
        label_position: (u32, u32),
    ) -> Self {
        Self {
            layers,
            labels,
            subset_size,
            label_position,
        }
    }

    /// Compositor borrowing this context's layers and label renderer
    pub fn compositor(&self) -> Compositor<'_> {
        let compositor = Compositor::new(&self.layers, self.subset_size);
        match &self.labels {
            Some(renderer) => compositor.with_labels(&**renderer, self.label_position),
            None => compositor,
        }
    }

    /// Loaded layer set
    pub const fn layers(&self) -> &LayerSet {
        &self.layers
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/context.rs"]
mod tests;
