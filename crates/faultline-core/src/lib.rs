//! Faultline Core - process-wide logging façade
//!
//! This crate provides the façade and its collaborators:
//! - `LoggerFacade`, a lazily created process-wide logger with a single-shot
//!   `init` and a reader/writer guarded configuration
//! - Console output through the `ConsoleSink` trait (stdout by default)
//! - Error-level forwarding through the `ErrorBackend` trait, with a
//!   Sentry-compatible HTTP backend driven by a worker thread
//! - A bounded `flush` to drain pending error events before exit
//! - Error facility with stable error codes
//! - Internal diagnostics via `tracing` and in-memory test collaborators

pub mod backend;
pub mod config;
pub mod console;
pub mod errors;
pub mod event;
pub mod facade;
pub mod logging_facility;
pub mod record;

// Re-export commonly used types
pub use backend::{BackendConnector, Dsn, ErrorBackend, HttpBackend, HttpConnector};
pub use config::FacadeConfig;
pub use console::{ConsoleSink, StdoutConsole};
pub use errors::{ExError, ExErrorKind, FaultlineError, Result};
pub use event::ErrorEvent;
pub use facade::{logger, LoggerFacade, FLUSH_TIMEOUT};
pub use faultline_core_types::{Fields, LogLevel, Sensitive};
pub use record::LogRecord;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
