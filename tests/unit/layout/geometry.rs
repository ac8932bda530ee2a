//! Tests for page geometry and column-major placement

#[cfg(test)]
mod tests {
    use crate::layout::geometry::{PageGeometry, cm_to_pixels};

    // Tests print sizes convert to whole pixels
    #[test]
    fn test_cm_to_pixels() {
        assert_eq!(cm_to_pixels(29.7, 300), 3507);
        assert_eq!(cm_to_pixels(21.0, 300), 2480);
        assert_eq!(cm_to_pixels(0.3, 300), 35);
        assert_eq!(cm_to_pixels(0.25, 300), 29);
    }

    // Tests cells fill a column top to bottom before moving right
    #[test]
    fn test_column_major_origins() {
        let geometry = PageGeometry::new(10, 20, 3, 2).unwrap();

        assert_eq!(geometry.capacity(), 6);
        assert_eq!(geometry.cell_origin(0), (0, 0));
        assert_eq!(geometry.cell_origin(1), (0, 20));
        assert_eq!(geometry.cell_origin(2), (10, 0));
        assert_eq!(geometry.cell_origin(3), (10, 20));
        assert_eq!(geometry.cell_origin(5), (20, 20));
    }

    // Tests zero dimensions are rejected
    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(PageGeometry::new(0, 10, 2, 2).is_err());
        assert!(PageGeometry::new(10, 10, 0, 2).is_err());
        assert!(PageGeometry::from_print(300, 29.7, 21.0, 3, 8, 0).is_err());
    }

    // Tests a grid larger than the page is rejected
    #[test]
    fn test_grid_must_fit_page() {
        assert!(PageGeometry::with_page(100, 100, 30, 30, 3, 3).is_ok());
        assert!(PageGeometry::with_page(100, 100, 30, 30, 4, 3).is_err());
    }

    // Tests a margin wider than the page is rejected
    #[test]
    fn test_field_wider_than_page() {
        assert!(PageGeometry::from_print(10, 0.5, 0.5, 5, 1, 1).is_err());
    }
}
