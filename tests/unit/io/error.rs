//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use crate::io::error::{FingerprintError, invalid_configuration, malformed_record};
    use std::error::Error;

    // Tests error source chaining works correctly
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = FingerprintError::FileSystem {
            path: "/tmp/sequence.txt".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/sequence.txt"));
    }

    // Tests configuration error contains all fields
    #[test]
    fn test_configuration_error() {
        let error = invalid_configuration("players", &4000, &"exceeds 3432 combinations");

        let message = error.to_string();
        assert!(message.contains("players"));
        assert!(message.contains("4000"));
        assert!(message.contains("3432"));
        assert!(error.source().is_none());
    }

    // Tests layout overflow reports both counts
    #[test]
    fn test_layout_overflow_error() {
        let error = FingerprintError::LayoutOverflow {
            requested: 33,
            capacity: 32,
        };

        let message = error.to_string();
        assert!(message.contains("33"));
        assert!(message.contains("32"));
    }

    // Tests line numbers are attached to malformed records only
    #[test]
    fn test_at_line_rewrites_malformed_records() {
        let error = malformed_record(0, "001", &"expected id and mask").at_line(7);
        match error {
            FingerprintError::MalformedRecord { line, content, .. } => {
                assert_eq!(line, 7);
                assert_eq!(content, "001");
            }
            other => unreachable!("Expected MalformedRecord, got {other:?}"),
        }

        let untouched = FingerprintError::LayerNotFound { symbol: 'Q' }.at_line(3);
        assert!(matches!(
            untouched,
            FingerprintError::LayerNotFound { symbol: 'Q' }
        ));
    }

    // Tests image export error keeps the underlying cause
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = FingerprintError::ImageExport {
            path: "/restricted/001.png".into(),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/001.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }
}
