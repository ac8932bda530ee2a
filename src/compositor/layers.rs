//! Layer images loaded once and pre-scaled to the cell size

use crate::compositor::blend::LayerRole;
use crate::io::configuration::IMAGE_EXTENSION;
use crate::io::error::{FingerprintError, Result};
use crate::model::symbols::Universe;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage, RgbaImage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name of the layer image for `symbol`
pub fn layer_file_name(symbol: char) -> String {
    format!("{symbol}.{IMAGE_EXTENSION}")
}

/// Read-only cache of cell-sized layer images keyed by symbol
#[derive(Clone, Debug)]
pub struct LayerSet {
    layers: HashMap<char, RgbImage>,
    width: u32,
    height: u32,
}

impl LayerSet {
    /// Load one image per layer symbol of `universe` from `dir`
    ///
    /// Images are named after their symbol, for example `Layers/A.png`.
    ///
    /// # Errors
    ///
    /// Returns an asset load error for the first image that is missing or unreadable
    pub fn load_from_dir(dir: &Path, universe: &Universe, width: u32, height: u32) -> Result<Self> {
        let images = universe
            .all_layers()
            .into_iter()
            .map(|symbol| {
                let path = dir.join(layer_file_name(symbol));
                load_layer_image(&path).map(|image| (symbol, image))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_images(images, width, height))
    }

    /// Build the cache from in-memory images
    ///
    /// Each image is resized to `width` by `height` and its transparency is
    /// flattened onto the identity colour of its blend operator, so
    /// transparent pixels leave a cell unchanged.
    pub fn from_images<I>(images: I, width: u32, height: u32) -> Self
    where
        I: IntoIterator<Item = (char, DynamicImage)>,
    {
        let layers = images
            .into_iter()
            .map(|(symbol, image)| {
                let rgba = fit_to_cell(image.to_rgba8(), width, height);
                let backdrop = LayerRole::of(symbol).blend_op().identity();
                (symbol, flatten(&rgba, backdrop))
            })
            .collect();

        Self {
            layers,
            width,
            height,
        }
    }

    /// Layer image for `symbol`
    ///
    /// # Errors
    ///
    /// Returns a layer not found error if the symbol was never loaded
    pub fn get(&self, symbol: char) -> Result<&RgbImage> {
        self.layers
            .get(&symbol)
            .ok_or(FingerprintError::LayerNotFound { symbol })
    }

    /// Whether a layer for `symbol` is cached
    pub fn contains(&self, symbol: char) -> bool {
        self.layers.contains_key(&symbol)
    }

    /// Cell dimensions every cached layer has
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

fn load_layer_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| FingerprintError::AssetLoad {
        path: PathBuf::from(path),
        source: e,
    })
}

fn fit_to_cell(image: RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        image
    } else {
        imageops::resize(&image, width, height, FilterType::CatmullRom)
    }
}

// Straight alpha composite of the layer over a solid backdrop
fn flatten(image: &RgbaImage, backdrop: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = u16::from(a);
        let mix = |channel: u8, back: u8| {
            let value = (u16::from(channel) * alpha + u16::from(back) * (255 - alpha) + 127) / 255;
            value as u8
        };
        let Rgb([br, bg, bb]) = backdrop;
        Rgb([mix(r, br), mix(g, bg), mix(b, bb)])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/layers.rs"]
mod tests;
