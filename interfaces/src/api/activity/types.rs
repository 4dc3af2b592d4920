use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Login,
    GamePlay,
    ChatInteraction,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityType::Login => "LOGIN",
            ActivityType::GamePlay => "GAME_PLAY",
            ActivityType::ChatInteraction => "CHAT_INTERACTION",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub activity_type: ActivityType,
    pub metadata: Value,
}

impl ActivityRecord {
    pub fn new(activity_type: ActivityType, metadata: Value) -> Self {
        Self {
            activity_type,
            metadata,
        }
    }

    pub fn login() -> Self {
        Self::new(ActivityType::Login, json!({ "action": "user_login" }))
    }

    pub fn game_play() -> Self {
        Self::new(ActivityType::GamePlay, json!({ "action": "user_game" }))
    }

    /// Only the prompt length is reported, never its content.
    pub fn chat_interaction(message_length: usize) -> Self {
        Self::new(
            ActivityType::ChatInteraction,
            json!({ "action": "user_chat", "message_length": message_length }),
        )
    }
}

/// Non-error results of submitting an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityOutcome {
    Recorded,
    /// The backend already has this activity for today.
    AlreadyRecorded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_record_wire_format() {
        let value = serde_json::to_value(ActivityRecord::game_play()).unwrap();
        assert_eq!(
            value,
            json!({"activityType": "GAME_PLAY", "metadata": {"action": "user_game"}})
        );

        let value = serde_json::to_value(ActivityRecord::chat_interaction(42)).unwrap();
        assert_eq!(
            value,
            json!({
                "activityType": "CHAT_INTERACTION",
                "metadata": {"action": "user_chat", "message_length": 42}
            })
        );
    }

    #[test]
    fn test_display_matches_wire_tag() {
        for activity_type in [
            ActivityType::Login,
            ActivityType::GamePlay,
            ActivityType::ChatInteraction,
        ] {
            let wire = serde_json::to_value(activity_type).unwrap();
            assert_eq!(wire, Value::String(activity_type.to_string()));
        }
    }
}
