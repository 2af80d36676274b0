//! In-memory collaborators for deterministic logging assertions
//!
//! `MemoryConsole` records every console line and `MemoryConnector` hands
//! out a `MemoryBackend` that records every submitted event. Handles are
//! cheap clones sharing the same storage, so a test keeps one copy and gives
//! the other to the façade.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::backend::{BackendConnector, Dsn, ErrorBackend};
use crate::console::ConsoleSink;
use crate::errors::Result;
use crate::event::ErrorEvent;

/// Console sink that keeps lines in memory
#[derive(Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        self.lines.lock().map(|mut l| l.clear()).ok();
    }

    /// Count lines matching a predicate
    pub fn count_lines<F>(&self, predicate: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        self.lines().iter().filter(|l| predicate(l)).count()
    }

    /// Assert that some captured line contains `needle`
    ///
    /// # Panics
    ///
    /// Panics if no line matches
    pub fn assert_line_contains(&self, needle: &str) {
        let lines = self.lines();
        let found = lines.iter().any(|l| l.contains(needle));
        assert!(
            found,
            "Expected line containing {:?} not found in {} captured lines",
            needle,
            lines.len()
        );
    }
}

impl ConsoleSink for MemoryConsole {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .map(|mut lines| lines.push(line.to_string()))
            .ok();
    }
}

/// Backend that records submissions instead of sending them
#[derive(Clone, Default)]
pub struct MemoryBackend {
    events: Arc<Mutex<Vec<ErrorEvent>>>,
    drains: Arc<AtomicUsize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ErrorEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of `drain` calls received
    pub fn drain_count(&self) -> usize {
        self.drains.load(Ordering::SeqCst)
    }
}

impl ErrorBackend for MemoryBackend {
    fn submit(&self, event: ErrorEvent) {
        self.events
            .lock()
            .map(|mut events| events.push(event))
            .ok();
    }

    fn drain(&self, _timeout: Duration) -> bool {
        self.drains.fetch_add(1, Ordering::SeqCst);
        true
    }
}

/// Connector that validates the endpoint as a DSN like the HTTP connector
/// does, then hands out its shared `MemoryBackend`
#[derive(Clone, Default)]
pub struct MemoryConnector {
    backend: MemoryBackend,
    connections: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend(&self) -> &MemoryBackend {
        &self.backend
    }

    /// `(endpoint, environment)` of every successful connect
    pub fn connections(&self) -> Vec<(String, String)> {
        self.connections.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn connect_count(&self) -> usize {
        self.connections().len()
    }
}

impl BackendConnector for MemoryConnector {
    fn connect(&self, endpoint: &str, environment: &str) -> Result<Arc<dyn ErrorBackend>> {
        Dsn::parse(endpoint)?;
        self.connections
            .lock()
            .map(|mut c| c.push((endpoint.to_string(), environment.to_string())))
            .ok();
        Ok(Arc::new(self.backend.clone()))
    }
}
