//! Input validation for lead and check-in payloads.
//!
//! Validators take the raw JSON body and report every failing field, so a
//! caller can fix all problems in one round.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::{CheckinAnswers, NewLead, Stage, StageMove};

/// Maximum allowed length for lead names.
pub const MAX_NAME_LENGTH: usize = 100;

/// Highest emotional ROI score.
pub const MAX_EMOTIONAL_ROI: u64 = 100;

/// A problem with one field of a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the field.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn required(field: &str) -> Self {
        Self::new(field, "Required")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Validate a create-lead body.
pub fn validate_new_lead(body: &Value) -> Result<NewLead, Vec<FieldError>> {
    let Some(fields) = body.as_object() else {
        return Err(vec![FieldError::new("body", "Expected object")]);
    };
    let mut errors = Vec::new();

    let name = required_name(fields, &mut errors);
    let stage = required(fields, "stage", &mut errors).and_then(|value| {
        collect(&mut errors, parse_stage(value).map_err(|msg| FieldError::new("stage", msg)))
    });
    let last_contact = required(fields, "lastContact", &mut errors).and_then(|value| {
        collect(
            &mut errors,
            parse_timestamp(value).map_err(|msg| FieldError::new("lastContact", msg)),
        )
    });
    let emotional_roi = required(fields, "emotionalROI", &mut errors).and_then(|value| {
        let score = as_whole_number(value)
            .filter(|score| *score <= MAX_EMOTIONAL_ROI)
            .and_then(|score| u8::try_from(score).ok())
            .ok_or_else(|| {
                FieldError::new("emotionalROI", "Expected integer between 0 and 100")
            });
        collect(&mut errors, score)
    });
    let position = required(fields, "position", &mut errors).and_then(|value| {
        collect(
            &mut errors,
            as_position(value)
                .ok_or_else(|| FieldError::new("position", "Expected non-negative integer")),
        )
    });

    let last_message = optional_string(fields, "lastMessage", &mut errors);
    let ai_suggestion = optional_string(fields, "aiSuggestion", &mut errors);
    let profile_photo = optional_string(fields, "profilePhoto", &mut errors).and_then(|photo| {
        match photo {
            Some(url) if !is_http_url(&url) => {
                errors.push(FieldError::new("profilePhoto", "Expected http(s) URL"));
                None
            }
            other => Some(other),
        }
    });

    match (
        name,
        stage,
        last_contact,
        emotional_roi,
        position,
        last_message,
        ai_suggestion,
        profile_photo,
    ) {
        (
            Some(name),
            Some(stage),
            Some(last_contact),
            Some(emotional_roi),
            Some(position),
            Some(last_message),
            Some(ai_suggestion),
            Some(profile_photo),
        ) if errors.is_empty() => Ok(NewLead {
            name,
            stage,
            last_contact,
            last_message,
            emotional_roi,
            ai_suggestion,
            position,
            profile_photo,
        }),
        _ => Err(errors),
    }
}

/// Validate a create-check-in body. Each answer must be the integer 0 or 1.
pub fn validate_checkin_answers(body: &Value) -> Result<CheckinAnswers, Vec<FieldError>> {
    let Some(fields) = body.as_object() else {
        return Err(vec![FieldError::new("body", "Expected object")]);
    };
    let mut errors = Vec::new();

    let mut answer = |field: &str| {
        required(fields, field, &mut errors).and_then(|value| match value.as_u64() {
            Some(flag @ (0 | 1)) => Some(flag as u8),
            _ => {
                errors.push(FieldError::new(field, "Expected 0 or 1"));
                None
            }
        })
    };
    let confident = answer("confident");
    let took_action = answer("tookAction");
    let ready_to_connect = answer("readyToConnect");

    match (confident, took_action, ready_to_connect) {
        (Some(confident), Some(took_action), Some(ready_to_connect)) => Ok(CheckinAnswers {
            confident,
            took_action,
            ready_to_connect,
        }),
        _ => Err(errors),
    }
}

/// Validate a stage-move body: `stage` must name a stage and `position`
/// must be a non-negative whole number.
pub fn validate_stage_move(body: &Value) -> Option<StageMove> {
    let stage = body
        .get("stage")
        .and_then(Value::as_str)
        .filter(|stage| !stage.is_empty())?
        .parse::<Stage>()
        .ok()?;
    let position = body.get("position").and_then(as_position)?;
    Some(StageMove { stage, position })
}

fn required<'a>(
    fields: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Value> {
    match fields.get(field) {
        Some(Value::Null) | None => {
            errors.push(FieldError::required(field));
            None
        }
        Some(value) => Some(value),
    }
}

fn collect<T>(errors: &mut Vec<FieldError>, result: Result<T, FieldError>) -> Option<T> {
    result.map_err(|err| errors.push(err)).ok()
}

fn required_name(fields: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = required(fields, "name", errors)?;
    let Some(name) = value.as_str() else {
        errors.push(FieldError::new("name", "Expected string"));
        return None;
    };
    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "name cannot be empty"));
        return None;
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        errors.push(FieldError::new(
            "name",
            format!("name is too long (max {} chars)", MAX_NAME_LENGTH),
        ));
        return None;
    }

    Some(name.to_string())
}

/// `Some(None)` for an absent or null field, `None` when the field is invalid.
fn optional_string(
    fields: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Option<String>> {
    match fields.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(text)) => Some(Some(text.clone())),
        Some(_) => {
            errors.push(FieldError::new(field, "Expected string"));
            None
        }
    }
}

fn parse_stage(value: &Value) -> Result<Stage, String> {
    let name = value.as_str().ok_or_else(|| "Expected string".to_string())?;
    name.parse::<Stage>()
        .map_err(|_| "Expected one of loyal, labor, lust, dead".to_string())
}

fn parse_timestamp(value: &Value) -> Result<DateTime<Utc>, String> {
    let text = value
        .as_str()
        .ok_or_else(|| "Expected ISO 8601 timestamp".to_string())?;
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| format!("Invalid timestamp: {}", err))
}

/// Accepts non-negative whole numbers written either as integers or as
/// floats like `2.0`.
fn as_whole_number(value: &Value) -> Option<u64> {
    if let Some(whole) = value.as_u64() {
        return Some(whole);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
        .map(|f| f as u64)
}

fn as_position(value: &Value) -> Option<u32> {
    as_whole_number(value).and_then(|whole| u32::try_from(whole).ok())
}

fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_lead() -> Value {
        json!({
            "name": "Ava",
            "stage": "lust",
            "lastContact": "2026-05-10T12:00:00Z",
            "emotionalROI": 50,
            "position": 0
        })
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_lead() {
        let lead = validate_new_lead(&valid_lead()).unwrap();
        assert_eq!(lead.name, "Ava");
        assert_eq!(lead.stage, Stage::Lust);
        assert_eq!(lead.emotional_roi, 50);
        assert_eq!(lead.position, 0);
        assert_eq!(lead.last_message, None);
    }

    #[test]
    fn test_valid_lead_with_optionals() {
        let mut body = valid_lead();
        body["lastMessage"] = json!("hey");
        body["aiSuggestion"] = Value::Null;
        body["profilePhoto"] = json!("https://example.com/ava.jpg");

        let lead = validate_new_lead(&body).unwrap();
        assert_eq!(lead.last_message.as_deref(), Some("hey"));
        assert_eq!(lead.ai_suggestion, None);
        assert_eq!(lead.profile_photo.as_deref(), Some("https://example.com/ava.jpg"));
    }

    #[test]
    fn test_missing_name() {
        let mut body = valid_lead();
        body.as_object_mut().unwrap().remove("name");

        let errors = validate_new_lead(&body).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("name", "Required")]);
    }

    #[test]
    fn test_every_bad_field_reported() {
        let body = json!({
            "name": "",
            "stage": "crush",
            "lastContact": "yesterday",
            "emotionalROI": 101,
            "position": -1,
            "lastMessage": 5,
            "profilePhoto": "ftp://x"
        });

        let errors = validate_new_lead(&body).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec![
                "name",
                "stage",
                "lastContact",
                "emotionalROI",
                "position",
                "lastMessage",
                "profilePhoto"
            ]
        );
    }

    #[test]
    fn test_lead_body_must_be_object() {
        let errors = validate_new_lead(&json!([1, 2])).unwrap_err();
        assert_eq!(fields(&errors), vec!["body"]);
    }

    #[test]
    fn test_name_kept_as_given() {
        let mut body = valid_lead();
        body["name"] = json!("  Ava  ");
        assert_eq!(validate_new_lead(&body).unwrap().name, "  Ava  ");

        body["name"] = json!("   ");
        let errors = validate_new_lead(&body).unwrap_err();
        assert_eq!(fields(&errors), vec!["name"]);
    }

    #[test]
    fn test_whole_number_floats() {
        let mut body = valid_lead();
        body["emotionalROI"] = json!(50.0);
        body["position"] = json!(2.0);
        let lead = validate_new_lead(&body).unwrap();
        assert_eq!(lead.emotional_roi, 50);
        assert_eq!(lead.position, 2);

        body["emotionalROI"] = json!(50.5);
        body["position"] = json!(2.5);
        let errors = validate_new_lead(&body).unwrap_err();
        assert_eq!(fields(&errors), vec!["emotionalROI", "position"]);
    }

    #[test]
    fn test_name_too_long() {
        let mut body = valid_lead();
        body["name"] = json!("a".repeat(MAX_NAME_LENGTH + 1));
        assert!(validate_new_lead(&body).is_err());
    }

    #[test]
    fn test_checkin_answers() {
        let answers = validate_checkin_answers(&json!({
            "confident": 1,
            "tookAction": 0,
            "readyToConnect": 1
        }))
        .unwrap();
        assert_eq!(
            answers,
            CheckinAnswers {
                confident: 1,
                took_action: 0,
                ready_to_connect: 1
            }
        );
    }

    #[test]
    fn test_checkin_answers_invalid() {
        let errors = validate_checkin_answers(&json!({
            "confident": 2,
            "tookAction": true
        }))
        .unwrap_err();
        assert_eq!(fields(&errors), vec!["confident", "tookAction", "readyToConnect"]);
        assert_eq!(errors[2].message, "Required");
    }

    #[test]
    fn test_stage_move() {
        assert_eq!(
            validate_stage_move(&json!({ "stage": "dead", "position": 3 })),
            Some(StageMove {
                stage: Stage::Dead,
                position: 3
            })
        );
        assert_eq!(
            validate_stage_move(&json!({ "stage": "loyal", "position": 2.0 })).map(|m| m.position),
            Some(2)
        );
        assert!(validate_stage_move(&json!({ "stage": "", "position": 0 })).is_none());
        assert!(validate_stage_move(&json!({ "stage": "dead", "position": "0" })).is_none());
        assert!(validate_stage_move(&json!({ "stage": "dead" })).is_none());
        assert!(validate_stage_move(&json!({ "stage": "ex", "position": 0 })).is_none());
        assert!(validate_stage_move(&json!({ "stage": "dead", "position": 1.5 })).is_none());
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new("name", "Required");
        assert_eq!(err.to_string(), "name: Required");
    }
}
