//! Lead operations.

use crate::error::{Result, StoreError};
use crate::models::{Lead, LeadPatch, NewLead, Stage};
use crate::LeadStore;

fn not_found(id: i64) -> StoreError {
    StoreError::NotFound {
        entity: "Lead",
        id: id.to_string(),
    }
}

impl LeadStore {
    /// List all leads grouped by stage precedence, then by position.
    ///
    /// Leads sharing a stage and position keep insertion order.
    pub async fn list_leads(&self) -> Vec<Lead> {
        let tables = self.tables().read().await;
        let mut leads: Vec<Lead> = tables.leads.values().cloned().collect();
        leads.sort_by_key(|lead| (lead.stage.rank(), lead.position));
        leads
    }

    /// Count stored leads.
    pub async fn count_leads(&self) -> usize {
        self.tables().read().await.leads.len()
    }

    /// Get a lead by ID.
    pub async fn get_lead(&self, id: i64) -> Result<Lead> {
        self.tables()
            .read()
            .await
            .leads
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Store a new lead under a fresh ID. Stage and position are kept as given.
    pub async fn create_lead(&self, new_lead: NewLead) -> Lead {
        let mut tables = self.tables().write().await;
        let id = tables.allocate_lead_id();
        let lead = new_lead.into_lead(id);
        tables.leads.insert(id, lead.clone());

        tracing::debug!(lead_id = id, stage = %lead.stage, "Created lead");
        lead
    }

    /// Merge the given fields onto an existing lead.
    pub async fn update_lead(&self, id: i64, patch: LeadPatch) -> Result<Lead> {
        let mut tables = self.tables().write().await;
        let lead = tables.leads.get_mut(&id).ok_or_else(|| not_found(id))?;
        patch.apply_to(lead);

        tracing::debug!(lead_id = id, "Updated lead");
        Ok(lead.clone())
    }

    /// Delete a lead. Returns `false` if no lead had this ID.
    pub async fn delete_lead(&self, id: i64) -> bool {
        let removed = self.tables().write().await.leads.remove(&id).is_some();
        if removed {
            tracing::debug!(lead_id = id, "Deleted lead");
        }
        removed
    }

    /// Move a lead to a stage and position in one write.
    pub async fn move_lead(&self, id: i64, stage: Stage, position: u32) -> Result<Lead> {
        let mut tables = self.tables().write().await;
        let lead = tables.leads.get_mut(&id).ok_or_else(|| not_found(id))?;
        lead.stage = stage;
        lead.position = position;

        tracing::debug!(lead_id = id, stage = %stage, position, "Moved lead");
        Ok(lead.clone())
    }
}
