//! Core types shared across Faultline crates
//!
//! This crate provides the leaf types used by the logging façade and its
//! collaborators:
//!
//! - **Levels**: `LogLevel` and its canonical upper-case labels
//! - **Fields**: the `Fields` map attached to records and error events
//! - **Correlation**: `EventId` for remote error events
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction
//! - **Schema constants**: canonical field keys and event values

pub mod correlation;
pub mod fields;
pub mod level;
pub mod schema;
pub mod sensitive;

pub use correlation::EventId;
pub use fields::{render_value, Fields};
pub use level::LogLevel;
pub use sensitive::Sensitive;
