//! Shared application state for the web server.

use std::sync::Arc;

use oncoscope_dataset::MutationTable;

/// Shared state injected into every Axum handler.
///
/// The table is loaded once at startup and never written afterwards, so
/// handlers read it concurrently without locking.
pub struct AppState {
    pub table: MutationTable,
}

impl AppState {
    pub fn new(table: MutationTable) -> Self {
        Self { table }
    }
}

pub type SharedState = Arc<AppState>;
