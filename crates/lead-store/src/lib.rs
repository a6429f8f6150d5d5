//! In-memory store for the dating lead board.
//!
//! This crate owns every lead, check-in and user record. State lives in
//! process memory and resets on restart. [`LeadStore`] is a cheap-clone
//! handle that is constructed once at startup and injected wherever it is
//! needed.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use lead_store::{LeadStore, NewLead, Stage};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), lead_store::StoreError> {
//! let store = LeadStore::new();
//!
//! let lead = store
//!     .create_lead(NewLead {
//!         name: "Ava".to_string(),
//!         stage: Stage::Lust,
//!         last_contact: Utc::now(),
//!         last_message: None,
//!         emotional_roi: 50,
//!         ai_suggestion: None,
//!         position: 0,
//!         profile_photo: None,
//!     })
//!     .await;
//!
//! let moved = store.move_lead(lead.id, Stage::Loyal, 0).await?;
//! assert_eq!(moved.stage, Stage::Loyal);
//! # Ok(())
//! # }
//! ```

pub mod checkin;
pub mod coaching;
pub mod error;
pub mod lead;
pub mod models;
pub mod sample;
pub mod user;
pub mod validation;

pub use checkin::day_bounds;
pub use error::{Result, StoreError, UnknownStage};
pub use models::{
    Checkin, CheckinAnswers, Lead, LeadPatch, NewCheckin, NewLead, NewUser, Stage, StageMove,
    User,
};
pub use validation::FieldError;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

/// Handle to the shared in-memory tables.
///
/// Every operation takes the lock once, so a mutation is never observable
/// half-applied.
#[derive(Debug, Clone, Default)]
pub struct LeadStore {
    tables: Arc<RwLock<Tables>>,
}

/// Records keyed by ID. `BTreeMap` iteration order is insertion order
/// because IDs only grow.
#[derive(Debug)]
pub(crate) struct Tables {
    pub(crate) leads: BTreeMap<i64, Lead>,
    pub(crate) checkins: BTreeMap<i64, Checkin>,
    pub(crate) users: BTreeMap<i64, User>,
    next_lead_id: i64,
    next_checkin_id: i64,
    next_user_id: i64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            leads: BTreeMap::new(),
            checkins: BTreeMap::new(),
            users: BTreeMap::new(),
            next_lead_id: 1,
            next_checkin_id: 1,
            next_user_id: 1,
        }
    }
}

impl Tables {
    pub(crate) fn allocate_lead_id(&mut self) -> i64 {
        let id = self.next_lead_id;
        self.next_lead_id += 1;
        id
    }

    pub(crate) fn allocate_checkin_id(&mut self) -> i64 {
        let id = self.next_checkin_id;
        self.next_checkin_id += 1;
        id
    }

    pub(crate) fn allocate_user_id(&mut self) -> i64 {
        let id = self.next_user_id;
        self.next_user_id += 1;
        id
    }
}

impl LeadStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the sample board.
    pub async fn with_sample_leads() -> Self {
        let store = Self::new();
        let samples = sample::sample_leads(Utc::now());
        let count = samples.len();

        for lead in samples {
            store.create_lead(lead).await;
        }

        tracing::info!("Seeded {} sample leads", count);
        store
    }

    pub(crate) fn tables(&self) -> &RwLock<Tables> {
        &self.tables
    }
}
