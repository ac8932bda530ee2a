//! Tests for label overlay and SVG label rasterization

#[cfg(test)]
mod tests {
    use crate::compositor::label::{
        FontResolution, LabelRenderer, SvgLabelRenderer, escape_xml, overlay_label,
        with_generic_fallback,
    };
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use usvg::fontdb::Database;

    // Tests covered pixels overwrite the cell and transparent ones do not
    #[test]
    fn test_overlay_overwrites_covered_pixels() {
        let mut cell = RgbImage::from_pixel(6, 6, Rgb([255, 255, 255]));
        let mut label = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        label.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        label.put_pixel(1, 1, Rgba([40, 50, 60, 1]));

        overlay_label(&mut cell, &label, (3, 2));

        assert_eq!(cell.get_pixel(3, 2), &Rgb([10, 20, 30]));
        assert_eq!(cell.get_pixel(4, 3), &Rgb([40, 50, 60]));
        assert_eq!(cell.get_pixel(4, 2), &Rgb([255, 255, 255]));
        assert_eq!(cell.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    // Tests labels running past the cell edge are clipped
    #[test]
    fn test_overlay_clips_to_cell() {
        let mut cell = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let label = RgbaImage::from_pixel(5, 5, Rgba([0, 0, 0, 255]));

        overlay_label(&mut cell, &label, (2, 2));

        assert_eq!(cell.get_pixel(3, 3), &Rgb([0, 0, 0]));
        assert_eq!(cell.get_pixel(1, 1), &Rgb([255, 255, 255]));
        assert_eq!(cell.dimensions(), (4, 4));
    }

    // Tests markup characters are escaped
    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape_xml(" \u{411}"), " \u{411}");
    }

    // Tests the SVG renderer produces a label sized from the font size
    #[test]
    fn test_svg_label_dimensions() {
        let renderer = SvgLabelRenderer::with_system_fonts(10.0, "sans-serif");

        let label = renderer.render("042", Rgb([0, 0, 0])).unwrap();

        assert_eq!(label.dimensions(), (40, 15));
    }

    // Tests the generic sans-serif family is always part of the label font list
    #[test]
    fn test_generic_family_appended() {
        assert_eq!(
            with_generic_fallback("Verdana, Arial"),
            "Verdana, Arial, sans-serif"
        );
        assert_eq!(
            with_generic_fallback("Verdana, Arial, sans-serif"),
            "Verdana, Arial, sans-serif"
        );
        assert_eq!(with_generic_fallback("  "), "sans-serif");
    }

    // Tests an empty font database is reported and renders a blank label
    #[test]
    fn test_no_fonts_renders_blank_label() {
        let renderer = SvgLabelRenderer::with_font_database(Database::new(), 10.0, "Verdana");

        assert_eq!(renderer.resolution(), &FontResolution::Unavailable);
        assert!(!renderer.has_fonts());

        let label = renderer.render("7", Rgb([0, 0, 0])).unwrap();
        assert!(label.pixels().all(|pixel| pixel.0[3] == 0));
    }

    // Tests unknown families fall back to an installed face
    #[test]
    fn test_missing_family_falls_back_to_installed_face() {
        let renderer =
            SvgLabelRenderer::with_system_fonts(10.0, "No Such Family Installed Anywhere");
        if !renderer.has_fonts() {
            return;
        }

        assert!(matches!(
            renderer.resolution(),
            FontResolution::Fallback(_) | FontResolution::Listed(_)
        ));
        let label = renderer.render("007", Rgb([0, 0, 0])).unwrap();
        assert!(label.pixels().any(|pixel| pixel.0[3] > 0));
    }

    // Tests the configured label fonts draw visible text whenever any font is installed
    #[test]
    fn test_label_has_covered_pixels() {
        let renderer = SvgLabelRenderer::with_system_fonts(
            24.0,
            crate::io::configuration::FONT_FAMILIES,
        );
        if !renderer.has_fonts() {
            return;
        }

        let label = renderer.render("007", Rgb([0, 0, 0])).unwrap();

        let covered = label.pixels().filter(|pixel| pixel.0[3] > 0).count();
        assert!(covered > 0, "no covered pixels with {:?}", renderer.resolution());
    }
}
