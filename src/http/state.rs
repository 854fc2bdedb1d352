//! Application state for the HTTP server.

use crate::registry::Registry;

/// Shared application state passed to all handlers.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The static KPI registry
    pub registry: &'static Registry,
}

impl AppState {
    /// Create a new application state over the given registry.
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }
}
