//! Tests for log filter selection and subscriber installation

#[cfg(test)]
mod tests {
    use motifmap::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
    use motifmap::io::logging::{default_filter, init};

    // Tests quiet mode lowers the default filter to warnings
    // Verified by ignoring the quiet flag
    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), DEFAULT_LOG_FILTER);
        assert_eq!(default_filter(true), QUIET_LOG_FILTER);
        assert!(default_filter(true).ends_with("warn"));
    }

    // Tests the global subscriber installs only once
    // Verified by panicking on a second installation
    #[test]
    fn test_init_once() {
        let _ = init(true);

        assert!(!init(false));
    }
}
