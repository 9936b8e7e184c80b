use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::player::{ParticipantSummary, RegisterPlayerRequest, RegisterPlayerResponse},
    error::AppError,
    services::player_service,
    state::SharedState,
};

/// Routes handling player registration and participant listings.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/players", post(register_player))
        .route("/participants/{cohort}", get(list_participants))
}

#[utoipa::path(
    post,
    path = "/players",
    tag = "players",
    request_body = RegisterPlayerRequest,
    responses(
        (status = 200, description = "Player stored", body = RegisterPlayerResponse),
        (status = 400, description = "Invalid payload"),
        (status = 503, description = "Storage unavailable")
    )
)]
/// Register a player for the game that is about to start.
pub async fn register_player(
    State(state): State<SharedState>,
    Json(payload): Json<RegisterPlayerRequest>,
) -> Result<Json<RegisterPlayerResponse>, AppError> {
    payload.validate()?;
    let response = player_service::register_player(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/participants/{cohort}",
    tag = "players",
    params(("cohort" = String, Path, description = "Cohort label to filter by")),
    responses(
        (status = 200, description = "Players in the cohort", body = [ParticipantSummary]),
        (status = 503, description = "Storage unavailable")
    )
)]
/// List every registered player belonging to a cohort.
pub async fn list_participants(
    State(state): State<SharedState>,
    Path(cohort): Path<String>,
) -> Result<Json<Vec<ParticipantSummary>>, AppError> {
    let participants = player_service::list_participants(&state, cohort).await?;
    Ok(Json(participants))
}
