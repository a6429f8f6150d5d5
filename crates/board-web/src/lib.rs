//! HTTP API for the dating lead board.
//!
//! Translates JSON requests into [`lead_store::LeadStore`] calls and maps
//! the outcomes onto status codes. The store is injected through
//! [`AppState`], so the router can be driven against any store instance.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use crate::config::{Config, ConfigError};
pub use crate::error::ApiError;
pub use crate::state::AppState;

/// Build the API router bound to `state`.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
