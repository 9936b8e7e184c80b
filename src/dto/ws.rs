use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Messages accepted from game-client WebSocket connections.
#[derive(Debug, Deserialize, Serialize, ToSchema, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The current player answered the active question correctly.
    AnswerCorrect {
        player_id: i64,
        #[serde(default = "crate::dto::default_category")]
        category: String,
    },
    /// The current player answered incorrectly.
    AnswerIncorrect {
        player_id: i64,
        #[serde(default = "crate::dto::default_category")]
        category: String,
    },
    /// The reward screen is being shown.
    RewardView,
    /// Start a fresh game: clear the session tally.
    Reset,
    /// Anything this backend does not understand.
    #[serde(other)]
    Unknown,
}

impl ClientMessage {
    /// Parse a raw WebSocket text frame.
    pub fn from_json_str(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

/// Messages pushed to every connected realtime client.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A physical button on the panel was pressed; `raw` is the device line.
    ButtonPressed { raw: String },
}
