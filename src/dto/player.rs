use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{dao::models::PlayerSummaryEntity, dto::validation::validate_not_blank};

/// Payload used to register a player before a game starts.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RegisterPlayerRequest {
    /// Display name; whitespace-only names are rejected.
    #[validate(custom(function = validate_not_blank))]
    pub name: String,
    /// Group/year label the player registers under.
    #[validate(custom(function = validate_not_blank))]
    pub cohort: String,
}

/// Acknowledgement returned once a player has been stored.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterPlayerResponse {
    pub status: String,
    /// Identifier to reference in subsequent answer events.
    pub id: i64,
}

impl RegisterPlayerResponse {
    /// Successful registration carrying the generated identifier.
    pub fn ok(id: i64) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}

/// Single row in a cohort participant listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipantSummary {
    pub id: i64,
    pub name: String,
}

impl From<PlayerSummaryEntity> for ParticipantSummary {
    fn from(entity: PlayerSummaryEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
