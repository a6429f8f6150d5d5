//! Board API HTTP client.

use std::time::Duration;

use lead_store::{Checkin, CheckinAnswers, Lead, LeadPatch, NewLead, Stage, StageMove};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::BoardConfig;
use crate::error::ClientError;

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Coaching prompts for one stage, as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybookContent {
    pub conversation_starters: Vec<String>,
    pub date_ideas: Vec<String>,
    pub escalation: Vec<String>,
    pub red_flags: Vec<String>,
}

/// Stage suggestion plus prompts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StageCoaching {
    pub stage: Stage,
    pub suggestion: String,
    pub playbook: PlaybookContent,
}

/// Client for the board API.
#[derive(Debug, Clone)]
pub struct BoardClient {
    http: Client,
    config: BoardConfig,
}

impl BoardClient {
    /// Create a client for the given API server.
    pub fn new(config: BoardConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Perform a health check against the server.
    pub async fn health_check(&self) -> Result<bool, ClientError> {
        let resp = self.http.get(self.config.health_url()).send().await?;
        Ok(resp.status().is_success())
    }

    /// Fetch all leads in board order.
    pub async fn list_leads(&self) -> Result<Vec<Lead>, ClientError> {
        let resp = self.http.get(self.config.leads_url()).send().await?;
        decode(resp).await
    }

    pub async fn get_lead(&self, id: i64) -> Result<Lead, ClientError> {
        let resp = self.http.get(self.config.lead_url(id)).send().await?;
        decode(resp).await
    }

    pub async fn create_lead(&self, lead: &NewLead) -> Result<Lead, ClientError> {
        let resp = self
            .http
            .post(self.config.leads_url())
            .json(lead)
            .send()
            .await?;
        decode(resp).await
    }

    /// Move a lead to another stage and position.
    pub async fn move_lead(&self, id: i64, target: StageMove) -> Result<Lead, ClientError> {
        debug!(lead_id = id, stage = %target.stage, position = target.position, "Moving lead");
        let resp = self
            .http
            .patch(self.config.lead_stage_url(id))
            .json(&target)
            .send()
            .await?;
        decode(resp).await
    }

    /// Merge a partial update onto a lead.
    pub async fn update_lead(&self, id: i64, patch: &LeadPatch) -> Result<Lead, ClientError> {
        let resp = self
            .http
            .patch(self.config.lead_url(id))
            .json(patch)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn delete_lead(&self, id: i64) -> Result<(), ClientError> {
        let resp = self.http.delete(self.config.lead_url(id)).send().await?;
        check(resp).await.map(|_| ())
    }

    /// Submit today's answers. The server stamps the date.
    pub async fn create_checkin(&self, answers: CheckinAnswers) -> Result<Checkin, ClientError> {
        let resp = self
            .http
            .post(self.config.checkins_url())
            .json(&answers)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn todays_checkin(&self) -> Result<Option<Checkin>, ClientError> {
        let resp = self.http.get(self.config.todays_checkin_url()).send().await?;
        decode(resp).await
    }

    pub async fn coaching(&self, stage: Stage) -> Result<StageCoaching, ClientError> {
        let resp = self.http.get(self.config.coaching_url(stage)).send().await?;
        decode(resp).await
    }
}

/// Turn a non-success response into [`ClientError::Api`].
async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    Ok(check(resp).await?.json().await?)
}
