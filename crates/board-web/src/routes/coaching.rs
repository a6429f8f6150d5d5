//! Static coaching content.

use axum::extract::Path;
use axum::Json;
use lead_store::coaching::{self, Playbook};
use lead_store::Stage;
use serde::Serialize;

use crate::error::{ApiError, Result};

/// Coaching content for one stage.
#[derive(Serialize)]
pub struct Coaching {
    pub stage: Stage,
    pub suggestion: &'static str,
    pub playbook: &'static Playbook,
}

/// Get the suggestion and prompts for a stage.
pub async fn stage_coaching(Path(stage): Path<String>) -> Result<Json<Coaching>> {
    let stage: Stage = stage
        .parse()
        .map_err(|_| ApiError::NotFound("Stage not found".to_string()))?;

    Ok(Json(Coaching {
        stage,
        suggestion: coaching::suggestion(stage),
        playbook: coaching::playbook(stage),
    }))
}
