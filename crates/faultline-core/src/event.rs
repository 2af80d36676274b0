//! Error events submitted to the remote tracking backend

use chrono::{DateTime, Utc};
use faultline_core_types::schema::{EVENT_LOGGER, EVENT_PLATFORM, EVENT_SEVERITY_ERROR};
use faultline_core_types::{EventId, Fields};
use serde::{Deserialize, Serialize};

/// Structured error event, serialized as the JSON body of a Sentry store
/// request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub event_id: EventId,
    pub timestamp: DateTime<Utc>,
    /// Always `"error"`
    pub level: String,
    pub message: String,
    pub environment: String,
    #[serde(default, skip_serializing_if = "Fields::is_empty")]
    pub extra: Fields,
    pub platform: String,
    pub logger: String,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>, environment: impl Into<String>, extra: Fields) -> Self {
        Self {
            event_id: EventId::new(),
            timestamp: Utc::now(),
            level: EVENT_SEVERITY_ERROR.to_string(),
            message: message.into(),
            environment: environment.into(),
            extra,
            platform: EVENT_PLATFORM.to_string(),
            logger: EVENT_LOGGER.to_string(),
        }
    }
}
