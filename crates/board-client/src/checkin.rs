//! Daily check-in answer collection.

use lead_store::coaching::CHECKIN_QUESTIONS;
use lead_store::CheckinAnswers;

use crate::error::ClientError;

/// Yes/no answers gathered one question at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckinForm {
    confident: Option<bool>,
    took_action: Option<bool>,
    ready_to_connect: Option<bool>,
}

impl CheckinForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer by question ID. Returns `false` for an unknown ID.
    pub fn answer(&mut self, question_id: &str, yes: bool) -> bool {
        let slot = match question_id {
            "confident" => &mut self.confident,
            "tookAction" => &mut self.took_action,
            "readyToConnect" => &mut self.ready_to_connect,
            _ => return false,
        };
        *slot = Some(yes);
        true
    }

    /// IDs of questions still unanswered, in question order.
    pub fn missing(&self) -> Vec<&'static str> {
        let slots = [self.confident, self.took_action, self.ready_to_connect];
        CHECKIN_QUESTIONS
            .iter()
            .zip(slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(question, _)| question.id)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// The answers as 0/1 flags, once every question is answered.
    pub fn answers(&self) -> Result<CheckinAnswers, ClientError> {
        match (self.confident, self.took_action, self.ready_to_connect) {
            (Some(confident), Some(took_action), Some(ready_to_connect)) => Ok(CheckinAnswers {
                confident: u8::from(confident),
                took_action: u8::from(took_action),
                ready_to_connect: u8::from(ready_to_connect),
            }),
            _ => Err(ClientError::IncompleteCheckin {
                missing: self.missing(),
            }),
        }
    }

    /// Clear all answers.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
