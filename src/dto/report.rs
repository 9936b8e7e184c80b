use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::ResultEntryEntity;

/// Payload for logging one answered question over HTTP.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveResultRequest {
    /// Player the answer belongs to. Not validated against the players
    /// table; results are best-effort logs.
    pub player_id: i64,
    /// Question category; defaults to the sentinel when omitted.
    #[serde(default = "crate::dto::default_category")]
    pub category: String,
    /// Whether the answer was correct.
    pub correct: bool,
}

/// Acknowledgement returned once a result has been stored.
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveResultResponse {
    pub status: String,
    pub message: String,
}

impl SaveResultResponse {
    /// Successful append acknowledgement.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "result saved".to_string(),
        }
    }
}

/// Per-player report of every answered question.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    /// Player display name, or a sentinel when the identifier is unknown.
    pub name: String,
    pub entries: Vec<ReportEntry>,
}

/// One answered question inside a report.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportEntry {
    pub category: String,
    pub correct: bool,
    /// Convenience complement of `correct` for tallying columns.
    pub wrong: bool,
}

impl From<ResultEntryEntity> for ReportEntry {
    fn from(entity: ResultEntryEntity) -> Self {
        Self {
            category: entity.category,
            correct: entity.correct,
            wrong: !entity.correct,
        }
    }
}
