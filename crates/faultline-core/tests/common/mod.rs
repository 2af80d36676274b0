use std::sync::Arc;

use faultline_core::logging_facility::{MemoryConnector, MemoryConsole};
use faultline_core::LoggerFacade;

/// A DSN accepted by the DSN parser; never contacted
#[allow(dead_code)]
pub const VALID_DSN: &str = "https://publickey@o0.ingest.example.com/42";

/// Create a standalone façade wired to in-memory collaborators
///
/// Returns the façade plus handles sharing storage with its console and
/// backend.
#[allow(dead_code)]
pub fn new_facade() -> (LoggerFacade, MemoryConsole, MemoryConnector) {
    let console = MemoryConsole::new();
    let connector = MemoryConnector::new();
    let facade = LoggerFacade::new(Arc::new(console.clone()), Box::new(connector.clone()));
    (facade, console, connector)
}
