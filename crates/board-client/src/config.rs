//! Configuration types for board-client.

use lead_store::Stage;

/// Configuration for connecting to the board API.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Base URL of the API server (e.g., "http://127.0.0.1:5000").
    pub base_url: String,
}

impl BoardConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    pub fn leads_url(&self) -> String {
        format!("{}/api/leads", self.base_url)
    }

    pub fn lead_url(&self, id: i64) -> String {
        format!("{}/api/leads/{}", self.base_url, id)
    }

    pub fn lead_stage_url(&self, id: i64) -> String {
        format!("{}/api/leads/{}/stage", self.base_url, id)
    }

    pub fn checkins_url(&self) -> String {
        format!("{}/api/checkins", self.base_url)
    }

    pub fn todays_checkin_url(&self) -> String {
        format!("{}/api/checkins/today", self.base_url)
    }

    pub fn coaching_url(&self, stage: Stage) -> String {
        format!("{}/api/coaching/{}", self.base_url, stage)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:5000")
    }
}
