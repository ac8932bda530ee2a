//! Tests for reference constants and configuration validation

#[cfg(test)]
mod tests {
    use crate::io::configuration::{
        COLUMNS, DEFAULT_PLAYERS, DEFAULT_SEED, FingerprintConfig, REFERENCE_SAMPLES, ROWS,
        SUBSET_SIZE, UNIVERSE_SIZE,
    };
    use crate::io::error::FingerprintError;
    use crate::layout::plan::SamplePlan;

    // Tests the reference combinatorial parameters
    #[test]
    fn test_reference_parameters() {
        assert_eq!(UNIVERSE_SIZE, 14);
        assert_eq!(SUBSET_SIZE, 7);
        assert_eq!(DEFAULT_PLAYERS, 200);
        assert_eq!(DEFAULT_SEED, 518);
    }

    // Tests the reference sample plan fills the reference grid exactly
    #[test]
    fn test_reference_samples_fill_grid() {
        let total: usize = REFERENCE_SAMPLES.iter().map(|&(_, count)| count).sum();
        assert_eq!(total, (COLUMNS * ROWS) as usize);
    }

    // Tests the reference print geometry
    #[test]
    fn test_reference_geometry() {
        let config = FingerprintConfig::default();
        let geometry = config.geometry().unwrap();

        assert_eq!((geometry.page_width, geometry.page_height), (3507, 2480));
        assert_eq!((geometry.cell_width, geometry.cell_height), (438, 619));
        assert_eq!(geometry.capacity(), 32);
        assert_eq!(config.label_position(), (35, 29));
        assert!((config.font_size() - 35.0).abs() < f32::EPSILON);
    }

    // Tests the default configuration is valid
    #[test]
    fn test_default_validates() {
        assert!(FingerprintConfig::default().validate().is_ok());
    }

    // Tests populations beyond the fingerprint space are rejected
    #[test]
    fn test_too_many_players() {
        let config = FingerprintConfig {
            players: 4000,
            ..FingerprintConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(FingerprintError::Configuration {
                parameter: "players",
                ..
            })
        ));
    }

    // Tests sample plans that do not fill the grid are rejected
    #[test]
    fn test_plan_must_fill_grid() {
        let short = FingerprintConfig {
            sample_plan: SamplePlan::from_pairs(&[(7, 4), (3, 10)]),
            ..FingerprintConfig::default()
        };
        assert!(short.validate().is_err());

        let oversized = FingerprintConfig {
            sample_plan: SamplePlan::from_pairs(&[(8, 32)]),
            ..FingerprintConfig::default()
        };
        assert!(oversized.validate().is_err());
    }

    // Tests fingerprint sizes larger than the universe are rejected
    #[test]
    fn test_subset_size_bounds() {
        let config = FingerprintConfig {
            subset_size: 15,
            ..FingerprintConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
