//! Per-call log records and their console rendering

use chrono::{DateTime, Local};
use faultline_core_types::schema::CONSOLE_TIMESTAMP_FORMAT;
use faultline_core_types::{render_value, Fields, LogLevel};
use std::fmt::Write;

use crate::event::ErrorEvent;

/// One log call, built locally and never shared between calls
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub fields: Option<Fields>,
}

impl LogRecord {
    /// Capture a record stamped with the current local time
    pub fn new(level: LogLevel, message: impl Into<String>, fields: Option<Fields>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
            fields,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// `[<timestamp>] [<LEVEL>] <message> k1=v1 k2=v2`
    ///
    /// Fields are appended in ascending key order.
    pub fn render(&self) -> String {
        let mut line = format!(
            "[{}] [{}] {}",
            self.timestamp.format(CONSOLE_TIMESTAMP_FORMAT),
            self.level,
            self.message
        );
        if let Some(fields) = &self.fields {
            for (key, value) in fields {
                let _ = write!(line, " {}={}", key, render_value(value));
            }
        }
        line
    }

    /// Unstructured line written before the façade is initialized
    pub fn render_fallback(&self) -> String {
        format!("[{}] {}", self.level, self.message)
    }

    /// Derive the remote event for an error-level record
    pub fn into_error_event(self, environment: &str) -> ErrorEvent {
        ErrorEvent::new(self.message, environment, self.fields.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 3)
            .single()
            .unwrap()
    }

    #[test]
    fn test_render_without_fields() {
        let record = LogRecord::new(LogLevel::Info, "Application started", None)
            .with_timestamp(fixed_time());
        assert_eq!(record.render(), "[2024-03-09 07:05:03] [INFO] Application started");
    }

    #[test]
    fn test_render_appends_sorted_fields() {
        let mut fields = Fields::new();
        fields.insert("user_id".to_string(), json!(12345));
        fields.insert("action".to_string(), json!("login"));
        fields.insert("ip".to_string(), json!("192.168.1.1"));

        let record = LogRecord::new(LogLevel::Info, "User logged in", Some(fields))
            .with_timestamp(fixed_time());

        assert_eq!(
            record.render(),
            "[2024-03-09 07:05:03] [INFO] User logged in action=login ip=192.168.1.1 user_id=12345"
        );
    }

    #[test]
    fn test_render_with_empty_field_map() {
        let record = LogRecord::new(LogLevel::Warn, "careful", Some(Fields::new()))
            .with_timestamp(fixed_time());
        assert_eq!(record.render(), "[2024-03-09 07:05:03] [WARN] careful");
    }

    #[test]
    fn test_fallback_has_level_and_message_only() {
        let mut fields = Fields::new();
        fields.insert("k".to_string(), json!(1));
        let record = LogRecord::new(LogLevel::Debug, "early", Some(fields));
        assert_eq!(record.render_fallback(), "[DEBUG] early");
    }

    #[test]
    fn test_into_error_event_copies_fields() {
        let mut fields = Fields::new();
        fields.insert("k".to_string(), json!(1));
        let event = LogRecord::new(LogLevel::Error, "boom", Some(fields.clone()))
            .into_error_event("staging");

        assert_eq!(event.message, "boom");
        assert_eq!(event.environment, "staging");
        assert_eq!(event.extra, fields);
    }
}
