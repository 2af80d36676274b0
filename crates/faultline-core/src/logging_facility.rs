//! Supporting facilities around the façade
//!
//! - `init(profile)` installs the `tracing` subscriber used for the crate's
//!   own diagnostics (backend failures, dropped events)
//! - `fields!` builds a `Fields` map from `key => value` pairs
//! - `test_capture` provides in-memory console and backend collaborators
//!   for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use faultline_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{MemoryBackend, MemoryConnector, MemoryConsole};
