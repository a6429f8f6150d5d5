//! Route handlers for the board API.

pub mod checkins;
pub mod coaching;
pub mod health;
pub mod leads;

use axum::routing::{get, patch, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Leads
        .route("/api/leads", get(leads::list_leads).post(leads::create_lead))
        .route(
            "/api/leads/:id",
            get(leads::get_lead)
                .patch(leads::update_lead)
                .delete(leads::delete_lead),
        )
        .route("/api/leads/:id/stage", patch(leads::move_lead_stage))
        // Check-ins
        .route("/api/checkins", post(checkins::create_checkin))
        .route("/api/checkins/today", get(checkins::todays_checkin))
        .route("/api/checkins/questions", get(checkins::questions))
        // Coaching
        .route("/api/coaching/:stage", get(coaching::stage_coaching))
}
