//! Store models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::UnknownStage;

/// A relationship-pipeline bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Loyal,
    Labor,
    Lust,
    Dead,
}

impl Stage {
    /// Grouping order of the global lead listing.
    pub const PRECEDENCE: [Stage; 4] = [Stage::Loyal, Stage::Labor, Stage::Lust, Stage::Dead];

    /// Index of this stage in [`Stage::PRECEDENCE`].
    pub fn rank(self) -> usize {
        match self {
            Stage::Loyal => 0,
            Stage::Labor => 1,
            Stage::Lust => 2,
            Stage::Dead => 3,
        }
    }

    /// Wire name of the stage.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Loyal => "loyal",
            Stage::Labor => "labor",
            Stage::Lust => "lust",
            Stage::Dead => "dead",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loyal" => Ok(Stage::Loyal),
            "labor" => Ok(Stage::Labor),
            "lust" => Ok(Stage::Lust),
            "dead" => Ok(Stage::Dead),
            other => Err(UnknownStage(other.to_string())),
        }
    }
}

/// A romantic prospect tracked on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Auto-incrementing ID, never reused.
    pub id: i64,
    pub name: String,
    pub stage: Stage,
    pub last_contact: DateTime<Utc>,
    pub last_message: Option<String>,
    /// Perceived relationship value, 0-100.
    #[serde(rename = "emotionalROI")]
    pub emotional_roi: u8,
    pub ai_suggestion: Option<String>,
    /// Ordering key within the stage.
    pub position: u32,
    pub profile_photo: Option<String>,
}

/// Lead fields supplied by the caller on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub stage: Stage,
    pub last_contact: DateTime<Utc>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(rename = "emotionalROI")]
    pub emotional_roi: u8,
    #[serde(default)]
    pub ai_suggestion: Option<String>,
    pub position: u32,
    #[serde(default)]
    pub profile_photo: Option<String>,
}

impl NewLead {
    /// Attach an assigned ID.
    pub fn into_lead(self, id: i64) -> Lead {
        Lead {
            id,
            name: self.name,
            stage: self.stage,
            last_contact: self.last_contact,
            last_message: self.last_message,
            emotional_roi: self.emotional_roi,
            ai_suggestion: self.ai_suggestion,
            position: self.position,
            profile_photo: self.profile_photo,
        }
    }
}

/// A partial lead update. Absent fields are left untouched.
///
/// Nullable fields use `Option<Option<_>>`: `None` keeps the stored value,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_message: Option<Option<String>>,
    #[serde(rename = "emotionalROI", skip_serializing_if = "Option::is_none")]
    pub emotional_roi: Option<u8>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub ai_suggestion: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_photo: Option<Option<String>>,
}

impl LeadPatch {
    /// Merge the given fields onto a lead.
    pub fn apply_to(self, lead: &mut Lead) {
        if let Some(name) = self.name {
            lead.name = name;
        }
        if let Some(stage) = self.stage {
            lead.stage = stage;
        }
        if let Some(last_contact) = self.last_contact {
            lead.last_contact = last_contact;
        }
        if let Some(last_message) = self.last_message {
            lead.last_message = last_message;
        }
        if let Some(roi) = self.emotional_roi {
            lead.emotional_roi = roi;
        }
        if let Some(suggestion) = self.ai_suggestion {
            lead.ai_suggestion = suggestion;
        }
        if let Some(position) = self.position {
            lead.position = position;
        }
        if let Some(photo) = self.profile_photo {
            lead.profile_photo = photo;
        }
    }
}

/// Marks a field as present even when its value is `null`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Target of a drag-and-drop stage move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageMove {
    pub stage: Stage,
    pub position: u32,
}

/// Answers to the three daily questions; each is 1 for yes, 0 for no.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinAnswers {
    pub confident: u8,
    pub took_action: u8,
    pub ready_to_connect: u8,
}

/// A daily emotional self-check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkin {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub confident: u8,
    pub took_action: u8,
    pub ready_to_connect: u8,
}

/// Check-in fields before an ID is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheckin {
    pub date: DateTime<Utc>,
    pub answers: CheckinAnswers,
}

impl NewCheckin {
    /// Stamp answers with the time they were received.
    pub fn stamped(answers: CheckinAnswers, date: DateTime<Utc>) -> Self {
        Self { date, answers }
    }

    pub fn into_checkin(self, id: i64) -> Checkin {
        Checkin {
            id,
            date: self.date,
            confident: self.answers.confident,
            took_action: self.answers.took_action,
            ready_to_connect: self.answers.ready_to_connect,
        }
    }
}

/// An account record kept for future authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    /// Unique login name.
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// User fields before an ID is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
