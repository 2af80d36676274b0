//! Remote error-tracking backend
//!
//! The façade only ever talks to the traits in this module:
//! - `BackendConnector` establishes a backend from an endpoint and
//!   environment tag during `init`
//! - `ErrorBackend` accepts fire-and-forget submissions and drains them
//!   within a timeout on `flush`
//!
//! The shipped implementation is `HttpBackend`, which speaks the Sentry
//! store protocol from a dedicated worker thread.

use std::sync::Arc;
use std::time::Duration;

use crate::errors::Result;
use crate::event::ErrorEvent;

mod dsn;
mod http;

pub use dsn::Dsn;
pub use http::{BackendStats, HttpBackend, HttpConnector, DEFAULT_QUEUE_CAPACITY};

/// An established error-tracking backend
pub trait ErrorBackend: Send + Sync {
    /// Queue an event for delivery; never blocks and never reports failure
    fn submit(&self, event: ErrorEvent);

    /// Block up to `timeout` waiting for previously submitted events to be
    /// delivered. Returns whether the drain completed in time.
    fn drain(&self, timeout: Duration) -> bool;
}

/// Factory invoked by `LoggerFacade::init` for a non-empty endpoint
pub trait BackendConnector: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when the endpoint is rejected or the backend cannot
    /// be started.
    fn connect(&self, endpoint: &str, environment: &str) -> Result<Arc<dyn ErrorBackend>>;
}
