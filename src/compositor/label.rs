//! Label rasterization and overlay
//!
//! Labels are drawn through the [`LabelRenderer`] seam so the compositor does
//! not depend on a font stack. [`SvgLabelRenderer`] lays the text out as an
//! SVG `<text>` element and rasterizes it with `resvg` using system fonts.

use crate::io::error::{FingerprintError, Result};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use std::sync::Arc;
use usvg::fontdb::{Database, Family, Query};

/// Renders label text into a transparent image
pub trait LabelRenderer {
    /// Rasterize `text` in `color`; uncovered pixels must be fully transparent
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be laid out or rasterized
    fn render(&self, text: &str, color: Rgb<u8>) -> Result<RgbaImage>;
}

/// How the configured font families resolved against the font database
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontResolution {
    /// One of the configured families is installed
    Listed(String),
    /// None of the configured families is installed; the generic
    /// `sans-serif` family was pointed at this installed family instead
    Fallback(String),
    /// The font database holds no faces, so labels render blank
    Unavailable,
}

/// Label renderer backed by `usvg` text layout and `resvg` rasterization
pub struct SvgLabelRenderer {
    options: usvg::Options<'static>,
    font_size: f32,
    font_families: String,
    resolution: FontResolution,
}

impl SvgLabelRenderer {
    /// Create a renderer using the system font database
    pub fn with_system_fonts(font_size: f32, font_families: &str) -> Self {
        let mut fontdb = Database::new();
        fontdb.load_system_fonts();
        tracing::debug!(faces = fontdb.len(), "loaded system fonts for labels");

        Self::with_font_database(fontdb, font_size, font_families)
    }

    /// Create a renderer over an already populated font database
    ///
    /// When none of `font_families` is installed, the generic `sans-serif`
    /// family is redirected to an installed face so labels still render.
    pub fn with_font_database(mut fontdb: Database, font_size: f32, font_families: &str) -> Self {
        let font_families = with_generic_fallback(font_families);
        let resolution = resolve_families(&fontdb, &font_families);

        match &resolution {
            FontResolution::Listed(family) => {
                tracing::debug!(family = %family, "label font resolved");
            }
            FontResolution::Fallback(family) => {
                tracing::info!(
                    requested = %font_families,
                    fallback = %family,
                    "requested label fonts are not installed"
                );
                fontdb.set_sans_serif_family(family.clone());
            }
            FontResolution::Unavailable => {
                tracing::warn!("no fonts found; player labels will be blank");
            }
        }

        let mut options = usvg::Options::default();
        options.fontdb = Arc::new(fontdb);

        Self {
            options,
            font_size,
            font_families,
            resolution,
        }
    }

    /// The family labels are drawn with
    pub const fn resolution(&self) -> &FontResolution {
        &self.resolution
    }

    /// Whether any font face is available to draw labels with
    pub const fn has_fonts(&self) -> bool {
        !matches!(self.resolution, FontResolution::Unavailable)
    }

    fn svg_document(&self, text: &str, color: Rgb<u8>, width: u32, height: u32) -> String {
        let Rgb([r, g, b]) = color;
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#,
                r#"<text x="0" y="{baseline}" font-family="{families}" font-weight="bold" "#,
                r#"font-size="{size}" fill="rgb({r},{g},{b})" xml:space="preserve">{text}</text>"#,
                "</svg>"
            ),
            width = width,
            height = height,
            baseline = self.font_size,
            families = escape_xml(&self.font_families),
            size = self.font_size,
            r = r,
            g = g,
            b = b,
            text = escape_xml(text),
        )
    }
}

impl LabelRenderer for SvgLabelRenderer {
    fn render(&self, text: &str, color: Rgb<u8>) -> Result<RgbaImage> {
        let glyphs = text.chars().count() as f32 + 1.0;
        let width = (self.font_size * glyphs).ceil().max(1.0) as u32;
        let height = (self.font_size * 1.5).ceil().max(1.0) as u32;

        let document = self.svg_document(text, color, width, height);
        let tree = usvg::Tree::from_str(&document, &self.options).map_err(|e| {
            FingerprintError::Label {
                reason: e.to_string(),
            }
        })?;

        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| FingerprintError::Label {
            reason: format!("cannot allocate a {width}x{height} label"),
        })?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        let pixels: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();

        RgbaImage::from_raw(width, height, pixels).ok_or_else(|| FingerprintError::Label {
            reason: "label pixel buffer has the wrong length".to_string(),
        })
    }
}

/// Copy every covered label pixel onto `cell` at `position`
///
/// Covered pixels (non-zero alpha) replace the cell's pixel outright; the
/// label is clipped to the cell bounds.
pub fn overlay_label(cell: &mut RgbImage, label: &RgbaImage, position: (u32, u32)) {
    let (left, top) = position;
    for (x, y, &Rgba([r, g, b, a])) in label.enumerate_pixels() {
        if a == 0 {
            continue;
        }
        let (Some(cx), Some(cy)) = (left.checked_add(x), top.checked_add(y)) else {
            continue;
        };
        if let Some(pixel) = cell.get_pixel_mut_checked(cx, cy) {
            *pixel = Rgb([r, g, b]);
        }
    }
}

/// Append the generic `sans-serif` family to a family list lacking it
fn with_generic_fallback(font_families: &str) -> String {
    let has_generic = font_families
        .split(',')
        .any(|family| family_name(family) == "sans-serif");
    if has_generic {
        font_families.to_string()
    } else if font_families.trim().is_empty() {
        "sans-serif".to_string()
    } else {
        format!("{font_families}, sans-serif")
    }
}

fn family_name(family: &str) -> &str {
    family.trim().trim_matches(|c| c == '"' || c == '\'')
}

fn parse_family(name: &str) -> Family<'_> {
    match name {
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        "monospace" => Family::Monospace,
        _ => Family::Name(name),
    }
}

/// Find which family text in `font_families` will be drawn with
///
/// Fallback prefers the alphabetically first installed sans face, then any
/// installed face.
fn resolve_families(fontdb: &Database, font_families: &str) -> FontResolution {
    if fontdb.is_empty() {
        return FontResolution::Unavailable;
    }

    let families: Vec<Family<'_>> = font_families
        .split(',')
        .map(family_name)
        .filter(|name| !name.is_empty())
        .map(parse_family)
        .collect();
    let query = Query {
        families: &families,
        ..Query::default()
    };
    let listed = fontdb
        .query(&query)
        .and_then(|id| fontdb.face(id))
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone());
    if let Some(name) = listed {
        return FontResolution::Listed(name);
    }

    let installed = || {
        fontdb
            .faces()
            .filter_map(|face| face.families.first())
            .map(|(name, _)| name.as_str())
    };
    let sans = installed()
        .filter(|name| name.contains("Sans") && !name.contains("Mono"))
        .min();
    sans.or_else(|| installed().min())
        .map_or(FontResolution::Unavailable, |name| {
            FontResolution::Fallback(name.to_string())
        })
}

fn escape_xml(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
        out
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/label.rs"]
mod tests;
