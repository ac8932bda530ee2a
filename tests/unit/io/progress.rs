//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use crate::io::progress::ProgressManager;

    // Tests a full batch lifecycle counts every sheet
    #[test]
    fn test_batch_lifecycle() {
        let mut pm = ProgressManager::hidden();
        pm.initialize(3);

        for id in ["001", "002", "003"] {
            pm.start_sheet(id);
            pm.complete_sheet(true);
        }

        assert_eq!(pm.position(), 3);
        assert_eq!(pm.failures(), 0);
        pm.finish();
    }

    // Tests failed sheets still advance the bar
    #[test]
    fn test_failures_are_counted() {
        let mut pm = ProgressManager::hidden();
        pm.initialize(2);

        pm.start_sheet("001");
        pm.complete_sheet(false);
        pm.start_sheet("002");
        pm.complete_sheet(true);

        assert_eq!(pm.position(), 2);
        assert_eq!(pm.failures(), 1);
        pm.finish();
    }

    // Tests reinitializing resets the counters
    #[test]
    fn test_initialize_resets() {
        let mut pm = ProgressManager::default();
        pm.initialize(1);
        pm.complete_sheet(false);

        pm.initialize(5);

        assert_eq!(pm.position(), 0);
        assert_eq!(pm.failures(), 0);
        pm.finish();
    }

    // Tests an empty batch
    #[test]
    fn test_empty_batch() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);
        pm.finish();
        assert_eq!(pm.position(), 0);
    }
}
