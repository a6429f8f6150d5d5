//! Application state shared across handlers.

use lead_store::LeadStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Lead and check-in store.
    pub store: LeadStore,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: LeadStore) -> Self {
        Self { store }
    }
}
