//! Canonical schema constants for console lines and error events
//!
//! These constants keep field names identical between the façade, the
//! backend and the tests that assert on them.

// Fields synthesized from a fault object
pub const FIELD_ERROR: &str = "error";
pub const FIELD_ERROR_TYPE: &str = "error_type";

// Error event values
pub const EVENT_SEVERITY_ERROR: &str = "error";
pub const EVENT_PLATFORM: &str = "other";
pub const EVENT_LOGGER: &str = "faultline";

// Console timestamp layout, second resolution
pub const CONSOLE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_fields_are_distinct() {
        assert!(!FIELD_ERROR.is_empty());
        assert!(!FIELD_ERROR_TYPE.is_empty());
        assert_ne!(FIELD_ERROR, FIELD_ERROR_TYPE);
    }

    #[test]
    fn test_severity_is_lowercase_error() {
        assert_eq!(EVENT_SEVERITY_ERROR, "error");
    }
}
