//! Emotional check-in routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use lead_store::coaching::{CheckinQuestion, CHECKIN_QUESTIONS};
use lead_store::validation::validate_checkin_answers;
use lead_store::{Checkin, FieldError, NewCheckin};
use serde_json::Value;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;

const INVALID_CHECKIN: &str = "Invalid checkin data";

/// Record today's answers. The date is stamped on arrival.
pub async fn create_checkin(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Checkin>)> {
    let Json(body) = body.map_err(|rejection| ApiError::Validation {
        message: INVALID_CHECKIN,
        errors: vec![FieldError::new("body", rejection.body_text())],
    })?;

    let answers = validate_checkin_answers(&body).map_err(|errors| ApiError::Validation {
        message: INVALID_CHECKIN,
        errors,
    })?;

    let checkin = state
        .store
        .create_checkin(NewCheckin::stamped(answers, Utc::now()))
        .await;
    info!(checkin_id = checkin.id, "Check-in recorded");

    Ok((StatusCode::CREATED, Json(checkin)))
}

/// Today's check-in, or `null`.
pub async fn todays_checkin(State(state): State<AppState>) -> Json<Option<Checkin>> {
    Json(state.store.todays_checkin().await)
}

/// The daily questions.
pub async fn questions() -> Json<&'static [CheckinQuestion]> {
    Json(CHECKIN_QUESTIONS)
}
