//! Lead routes.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lead_store::validation::{validate_new_lead, validate_stage_move};
use lead_store::{FieldError, Lead, LeadPatch};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::state::AppState;

const INVALID_LEAD: &str = "Invalid lead data";
const STAGE_REQUIRED: &str = "Stage and position are required";
const INVALID_PATCH: &str = "Lead fields have the wrong type";

/// Lead IDs that fail to parse cannot name a stored lead.
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| ApiError::NotFound("Lead not found".to_string()))
}

/// List all leads in board order.
pub async fn list_leads(State(state): State<AppState>) -> Json<Vec<Lead>> {
    Json(state.store.list_leads().await)
}

/// Get a single lead.
pub async fn get_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Lead>> {
    let id = parse_id(&id)?;
    let lead = state
        .store
        .get_lead(id)
        .await
        .map_err(ApiError::from_lead_store("Failed to fetch lead"))?;
    Ok(Json(lead))
}

/// Create a lead from a fully specified body.
pub async fn create_lead(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Lead>)> {
    let Json(body) = body.map_err(|rejection| ApiError::Validation {
        message: INVALID_LEAD,
        errors: vec![FieldError::new("body", rejection.body_text())],
    })?;

    let new_lead = validate_new_lead(&body).map_err(|errors| ApiError::Validation {
        message: INVALID_LEAD,
        errors,
    })?;

    let lead = state.store.create_lead(new_lead).await;
    info!(lead_id = lead.id, stage = %lead.stage, "Lead created");

    Ok((StatusCode::CREATED, Json(lead)))
}

/// Move a lead to another stage and position (drag and drop).
pub async fn move_lead_stage(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Lead>> {
    let target = body
        .ok()
        .and_then(|Json(body)| validate_stage_move(&body))
        .ok_or_else(|| ApiError::BadRequest(STAGE_REQUIRED.to_string()))?;
    let id = parse_id(&id)?;

    let lead = state
        .store
        .move_lead(id, target.stage, target.position)
        .await
        .map_err(ApiError::from_lead_store("Failed to update lead stage"))?;

    info!(
        lead_id = id,
        stage = %target.stage,
        position = target.position,
        "Lead moved"
    );

    Ok(Json(lead))
}

/// Merge a partial body onto a lead.
///
/// The lead must exist before the body is read. An empty body changes nothing.
pub async fn update_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Lead>> {
    let id = parse_id(&id)?;
    state
        .store
        .get_lead(id)
        .await
        .map_err(ApiError::from_lead_store("Failed to update lead"))?;

    let patch = parse_patch(&body)?;
    let lead = state
        .store
        .update_lead(id, patch)
        .await
        .map_err(ApiError::from_lead_store("Failed to update lead"))?;

    info!(lead_id = id, "Lead updated");
    Ok(Json(lead))
}

fn parse_patch(body: &[u8]) -> Result<LeadPatch> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(LeadPatch::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        debug!(error = %err, "Rejected lead patch");
        ApiError::BadRequest(INVALID_PATCH.to_string())
    })
}

/// Delete a lead.
pub async fn delete_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;

    if !state.store.delete_lead(id).await {
        return Err(ApiError::NotFound("Lead not found".to_string()));
    }

    info!(lead_id = id, "Lead deleted");
    Ok(StatusCode::NO_CONTENT)
}
