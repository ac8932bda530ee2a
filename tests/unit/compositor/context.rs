//! Tests for loading the render context from configuration

#[cfg(test)]
mod tests {
    use crate::compositor::context::RenderContext;
    use crate::compositor::layers::layer_file_name;
    use crate::io::configuration::FingerprintConfig;
    use crate::io::error::FingerprintError;
    use image::{Rgb, RgbImage};
    use std::path::Path;

    fn small_config(layers_dir: &Path) -> FingerprintConfig {
        FingerprintConfig {
            universe_size: 4,
            subset_size: 2,
            players: 3,
            dpi: 10,
            layers_dir: layers_dir.to_path_buf(),
            labels: false,
            ..FingerprintConfig::default()
        }
    }

    fn write_layers(dir: &Path, config: &FingerprintConfig) {
        for symbol in config.universe().unwrap().all_layers() {
            RgbImage::from_pixel(2, 2, Rgb([200, 200, 200]))
                .save(dir.join(layer_file_name(symbol)))
                .unwrap();
        }
    }

    // Tests layers are scaled to the configured cell size
    #[test]
    fn test_load_scales_layers_to_cells() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        write_layers(dir.path(), &config);

        let context = RenderContext::load(&config).unwrap();
        let geometry = config.geometry().unwrap();

        assert_eq!(
            context.layers().dimensions(),
            (geometry.cell_width, geometry.cell_height)
        );

        let cell = context
            .compositor()
            .render_cell(&"AB".parse().unwrap(), false, None)
            .unwrap();
        assert_eq!(cell.dimensions(), (geometry.cell_width, geometry.cell_height));
        assert_eq!(cell.get_pixel(0, 0), &Rgb([200, 200, 200]));
    }

    // Tests a missing layer directory aborts before rendering
    #[test]
    fn test_load_missing_layers() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(&dir.path().join("absent"));

        assert!(matches!(
            RenderContext::load(&config),
            Err(FingerprintError::AssetLoad { .. })
        ));
    }
}
