//! Per-channel blend operators and the layer roles that select them
//!
//! Trait layers, the background and the FULL/PART markers only ever darken a
//! cell (component-wise minimum), so overlapping traits accumulate like
//! silhouettes. The MASK marker brightens (component-wise saturating
//! addition) so an over-mask cell is visibly washed out.

use crate::io::error::{Result, invalid_configuration};
use crate::model::symbols::StatusSymbol;
use image::{Rgb, RgbImage};

/// Component-wise composition operator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendOp {
    /// Keep the darker of source and destination per channel
    Minimum,
    /// Add source to destination per channel, clamped at 255
    Add,
}

impl BlendOp {
    /// Blend one channel value
    pub const fn channel(self, destination: u8, source: u8) -> u8 {
        match self {
            Self::Minimum => {
                if source < destination {
                    source
                } else {
                    destination
                }
            }
            Self::Add => destination.saturating_add(source),
        }
    }

    /// Colour that leaves the destination unchanged under this operator
    pub const fn identity(self) -> Rgb<u8> {
        match self {
            Self::Minimum => Rgb([u8::MAX; 3]),
            Self::Add => Rgb([0; 3]),
        }
    }

    /// Blend `source` onto `destination` in place
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the images differ in size
    pub fn apply(self, destination: &mut RgbImage, source: &RgbImage) -> Result<()> {
        if destination.dimensions() != source.dimensions() {
            let (width, height) = source.dimensions();
            return Err(invalid_configuration(
                "layer",
                &format!("{width}x{height}"),
                &format!(
                    "does not match cell size {}x{}",
                    destination.width(),
                    destination.height()
                ),
            ));
        }

        for (dst, src) in destination.pixels_mut().zip(source.pixels()) {
            for (d, &s) in dst.0.iter_mut().zip(src.0.iter()) {
                *d = self.channel(*d, s);
            }
        }
        Ok(())
    }
}

/// Role a layer plays in a cell composition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerRole {
    /// One of the universe's trait symbols
    Trait,
    /// The common background marker
    Background,
    /// A status marker that brightens the cell
    StatusAdditive,
    /// A status marker that darkens the cell
    StatusMinimum,
}

impl LayerRole {
    /// Role of the layer named by `symbol`
    pub fn of(symbol: char) -> Self {
        match StatusSymbol::from_symbol(symbol) {
            Some(StatusSymbol::Background) => Self::Background,
            Some(StatusSymbol::Mask) => Self::StatusAdditive,
            Some(StatusSymbol::Full | StatusSymbol::Part) => Self::StatusMinimum,
            None => Self::Trait,
        }
    }

    /// Operator used to composite layers of this role
    pub const fn blend_op(self) -> BlendOp {
        match self {
            Self::StatusAdditive => BlendOp::Add,
            Self::Trait | Self::Background | Self::StatusMinimum => BlendOp::Minimum,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/blend.rs"]
mod tests;
