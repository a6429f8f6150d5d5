//! Board session: confirm-then-refetch over the API.
//!
//! The session keeps the last fetched snapshot. Writes go to the server
//! first; only a confirmed write triggers a full re-fetch. A failed write
//! leaves the snapshot as it was. A failed re-fetch after a confirmed write
//! is logged and the write is still reported as applied.

use lead_store::{Checkin, Lead, LeadPatch};
use tracing::{info, warn};

use crate::checkin::CheckinForm;
use crate::client::BoardClient;
use crate::drag::{stage_move_for_drop, DropResult};
use crate::error::ClientError;
use crate::view::{BoardView, SortKey, StageFilter};

pub struct BoardSession {
    client: BoardClient,
    snapshot: Vec<Lead>,
}

impl BoardSession {
    /// Open a session and fetch the initial snapshot.
    pub async fn open(client: BoardClient) -> Result<Self, ClientError> {
        let snapshot = client.list_leads().await?;
        info!(leads = snapshot.len(), "Board loaded");
        Ok(Self { client, snapshot })
    }

    pub fn client(&self) -> &BoardClient {
        &self.client
    }

    /// Leads as last fetched, in store order.
    pub fn snapshot(&self) -> &[Lead] {
        &self.snapshot
    }

    pub fn view(&self, filter: StageFilter, sort: SortKey) -> BoardView<'_> {
        BoardView::project(&self.snapshot, filter, sort)
    }

    /// Replace the snapshot with the server's current list.
    pub async fn refresh(&mut self) -> Result<&[Lead], ClientError> {
        self.snapshot = self.client.list_leads().await?;
        Ok(&self.snapshot)
    }

    /// Apply a drag-and-drop release.
    ///
    /// Returns the moved lead, or `None` when the drop issues no command.
    pub async fn handle_drop(&mut self, drop: DropResult) -> Result<Option<Lead>, ClientError> {
        let Some(target) = stage_move_for_drop(&drop) else {
            return Ok(None);
        };

        let lead = self
            .client
            .move_lead(drop.lead_id, target)
            .await
            .inspect_err(|err| warn!(lead_id = drop.lead_id, "Failed to move lead: {}", err))?;

        self.refresh_after_write().await;
        Ok(Some(lead))
    }

    /// Send a partial update, then re-fetch.
    pub async fn update_lead(&mut self, id: i64, patch: &LeadPatch) -> Result<Lead, ClientError> {
        let lead = self
            .client
            .update_lead(id, patch)
            .await
            .inspect_err(|err| warn!(lead_id = id, "Failed to update lead: {}", err))?;

        self.refresh_after_write().await;
        Ok(lead)
    }

    async fn refresh_after_write(&mut self) {
        if let Err(err) = self.refresh().await {
            warn!("Write applied but board refresh failed: {}", err);
        }
    }

    /// Submit a completed check-in form and clear it.
    pub async fn submit_checkin(&mut self, form: &mut CheckinForm) -> Result<Checkin, ClientError> {
        let answers = form.answers()?;
        let checkin = self
            .client
            .create_checkin(answers)
            .await
            .inspect_err(|err| warn!("Failed to save check-in: {}", err))?;

        form.reset();
        Ok(checkin)
    }
}
