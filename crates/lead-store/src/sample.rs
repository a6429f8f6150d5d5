//! Sample board used to populate a fresh store.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};

use crate::models::{NewLead, Stage};

/// The demo leads, with last-contact times relative to `now`.
pub fn sample_leads(now: DateTime<Utc>) -> Vec<NewLead> {
    vec![
        NewLead {
            name: "John".to_string(),
            stage: Stage::Lust,
            last_contact: johns_last_contact().unwrap_or(now),
            last_message: Some(
                "Hey, feel free to join the run anytime. I've decided to move on - I think you \
                 were right that we're not a match. Enjoy your trip!"
                    .to_string(),
            ),
            emotional_roi: 45,
            ai_suggestion: Some(
                "Consider moving to DEAD stage - conversation indicates mutual decision to end \
                 romantic pursuit."
                    .to_string(),
            ),
            position: 0,
            profile_photo: Some(photo("1507003211169-0a1dd7228f2d")),
        },
        NewLead {
            name: "Ed".to_string(),
            stage: Stage::Lust,
            last_contact: now - Duration::hours(4),
            last_message: Some("Thanks for the movie recommendation!".to_string()),
            emotional_roi: 35,
            ai_suggestion: Some(
                "Create anticipation - suggest watching it together this weekend.".to_string(),
            ),
            position: 1,
            profile_photo: Some(photo("1472099645785-5658abf4ff4e")),
        },
        NewLead {
            name: "Felix".to_string(),
            stage: Stage::Labor,
            last_contact: now - Duration::days(7),
            last_message: Some("I've been really busy with work lately".to_string()),
            emotional_roi: 58,
            ai_suggestion: Some(
                "Focus on building trust. Send thoughtful messages without expecting immediate \
                 responses."
                    .to_string(),
            ),
            position: 0,
            profile_photo: Some(photo("1500648767791-00dcc994a43e")),
        },
        NewLead {
            name: "James".to_string(),
            stage: Stage::Loyal,
            last_contact: now - Duration::days(1),
            last_message: Some("Can't wait to see you this weekend!".to_string()),
            emotional_roi: 92,
            ai_suggestion: Some(
                "Plan meaningful experiences together. Focus on deepening emotional connection."
                    .to_string(),
            ),
            position: 0,
            profile_photo: Some(photo("1519085360753-af0119f7cbe7")),
        },
        NewLead {
            name: "Tim".to_string(),
            stage: Stage::Dead,
            last_contact: now - Duration::days(90),
            last_message: Some("I think we should just be friends".to_string()),
            emotional_roi: 0,
            ai_suggestion: Some(
                "Focus energy on active leads. Archive for learning purposes.".to_string(),
            ),
            position: 0,
            profile_photo: Some(photo("1506794778202-cad84cf45f1d")),
        },
    ]
}

/// Local wall-clock time of the last message in John's thread.
fn johns_last_contact() -> Option<DateTime<Utc>> {
    Local
        .with_ymd_and_hms(2025, 6, 5, 23, 17, 51)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn photo(id: &str) -> String {
    format!("https://images.unsplash.com/photo-{id}?w=150&h=150&fit=crop&crop=face")
}
