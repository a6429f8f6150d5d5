//! Static per-stage coaching content.
//!
//! Suggestions and prompts are hand-written and keyed by stage.

use serde::Serialize;

use crate::models::Stage;

/// Coaching prompts for one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Playbook {
    pub conversation_starters: &'static [&'static str],
    pub date_ideas: &'static [&'static str],
    pub escalation: &'static [&'static str],
    pub red_flags: &'static [&'static str],
}

/// One of the daily check-in questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckinQuestion {
    /// Field name the answer is stored under.
    pub id: &'static str,
    pub text: &'static str,
}

pub const CHECKIN_QUESTIONS: &[CheckinQuestion] = &[
    CheckinQuestion {
        id: "confident",
        text: "Are you feeling confident about your dating progress today?",
    },
    CheckinQuestion {
        id: "tookAction",
        text: "Did you take action on your AI coach's suggestions yesterday?",
    },
    CheckinQuestion {
        id: "readyToConnect",
        text: "Are you ready to make meaningful connections today?",
    },
];

static LUST: Playbook = Playbook {
    conversation_starters: &[
        "\"That coffee shop we went to has become my new favorite spot. What's yours?\"",
        "\"I've been thinking about our conversation about [shared interest]. Have you tried...?\"",
        "\"Quick question: are you more of a weekend adventure or cozy night in person?\"",
    ],
    date_ideas: &[
        "Wine tasting at a local vineyard (builds on a shared interest in food & drink)",
        "Art gallery opening (creates conversation opportunities)",
        "Cooking class together (interactive and fun)",
    ],
    escalation: &[
        "Share a meaningful personal story to create deeper connection",
        "Ask about their dreams and aspirations",
        "Create inside jokes based on your shared experiences",
    ],
    red_flags: &[
        "Taking too long to respond without explanation",
        "Avoiding making concrete plans",
        "Not reciprocating personal sharing",
    ],
};

static LABOR: Playbook = Playbook {
    conversation_starters: &[
        "\"I know you've been busy, but I wanted to check in and see how you're doing\"",
        "\"No pressure, but I saw this and thought of you...\"",
        "\"Hope your week is going well. Take care of yourself\"",
    ],
    date_ideas: &[
        "Low-pressure coffee meeting during a lunch break",
        "Simple walk in the park (no commitment pressure)",
        "Casual group activity with mutual friends",
    ],
    escalation: &[
        "Focus on being a consistent, reliable presence",
        "Show genuine interest in their life without being pushy",
        "Demonstrate your value through actions, not words",
    ],
    red_flags: &[
        "Continued flakiness without valid reasons",
        "Only reaching out when they need something",
        "Showing interest in other people publicly",
    ],
};

static LOYAL: Playbook = Playbook {
    conversation_starters: &[
        "\"I've been thinking about how much I enjoy our time together\"",
        "\"What's something new you'd like us to try together?\"",
        "\"I feel like we have something really special\"",
    ],
    date_ideas: &[
        "Weekend getaway to a romantic destination",
        "Couples cooking class or wine tasting",
        "Meaningful experiences like concerts or shows",
    ],
    escalation: &[
        "Discuss future plans and shared goals",
        "Introduce them to important people in your life",
        "Plan memorable experiences that deepen your bond",
    ],
    red_flags: &[
        "Pulling back from intimacy or connection",
        "Avoiding conversations about the future",
        "Showing less interest in spending time together",
    ],
};

static DEAD: Playbook = Playbook {
    conversation_starters: &["Archive this lead and focus on active prospects"],
    date_ideas: &["No further action recommended"],
    escalation: &["Learn from this experience for future relationships"],
    red_flags: &["Lead is archived - focus energy elsewhere"],
};

/// Coaching prompts for a stage.
pub fn playbook(stage: Stage) -> &'static Playbook {
    match stage {
        Stage::Loyal => &LOYAL,
        Stage::Labor => &LABOR,
        Stage::Lust => &LUST,
        Stage::Dead => &DEAD,
    }
}

/// One-line suggestion for any lead in a stage.
pub fn suggestion(stage: Stage) -> &'static str {
    match stage {
        Stage::Loyal => {
            "Plan meaningful experiences together. Focus on deepening emotional connection."
        }
        Stage::Labor => {
            "Focus on building trust. Send thoughtful messages without expecting immediate \
             responses."
        }
        Stage::Lust => "Create anticipation - suggest a specific plan for this weekend.",
        Stage::Dead => "Focus energy on active leads. Archive for learning purposes.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_has_prompts() {
        for stage in Stage::PRECEDENCE {
            let book = playbook(stage);
            assert!(!book.conversation_starters.is_empty());
            assert!(!book.date_ideas.is_empty());
            assert!(!book.escalation.is_empty());
            assert!(!book.red_flags.is_empty());
            assert!(!suggestion(stage).is_empty());
        }
    }

    #[test]
    fn test_dead_stage_is_archival() {
        assert_eq!(
            playbook(Stage::Dead).date_ideas,
            &["No further action recommended"]
        );
    }

    #[test]
    fn test_checkin_question_ids_match_wire_fields() {
        let ids: Vec<&str> = CHECKIN_QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["confident", "tookAction", "readyToConnect"]);
    }

    #[test]
    fn test_playbook_serializes_camel_case() {
        let value = serde_json::to_value(playbook(Stage::Lust)).unwrap();
        assert_eq!(value["redFlags"].as_array().map(Vec::len), Some(3));
        assert!(value.get("conversationStarters").is_some());
    }
}
