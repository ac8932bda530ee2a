//! Tests for log level selection and subscriber installation

#[cfg(test)]
mod tests {
    use crate::io::logging::{init_logging, log_level};
    use tracing::Level;

    // Tests the flag to level mapping
    #[test]
    fn test_log_level() {
        assert_eq!(log_level(false, false), Level::INFO);
        assert_eq!(log_level(false, true), Level::DEBUG);
        assert_eq!(log_level(true, false), Level::WARN);
        assert_eq!(log_level(true, true), Level::WARN);
    }

    // Tests a second installation leaves the first subscriber in place
    #[test]
    fn test_init_logging_only_once() {
        init_logging(Level::WARN);
        assert!(!init_logging(Level::DEBUG));
        tracing::warn!("logging initialised");
    }
}
