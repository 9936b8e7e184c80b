use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::report::{ReportResponse, SaveResultRequest, SaveResultResponse},
    error::AppError,
    services::result_service,
    state::SharedState,
};

/// Routes handling answer results and per-player reports.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/results", post(save_result))
        .route("/report/{player_id}", get(get_report))
}

#[utoipa::path(
    post,
    path = "/results",
    tag = "results",
    request_body = SaveResultRequest,
    responses(
        (status = 200, description = "Result stored", body = SaveResultResponse),
        (status = 503, description = "Storage unavailable")
    )
)]
/// Append one answered question for a player.
pub async fn save_result(
    State(state): State<SharedState>,
    Json(payload): Json<SaveResultRequest>,
) -> Result<Json<SaveResultResponse>, AppError> {
    let response = result_service::save_result(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/report/{player_id}",
    tag = "results",
    params(("player_id" = i64, Path, description = "Identifier returned at registration")),
    responses(
        (status = 200, description = "Per-player report", body = ReportResponse),
        (status = 503, description = "Storage unavailable")
    )
)]
/// Return every recorded answer for a player along with their name.
pub async fn get_report(
    State(state): State<SharedState>,
    Path(player_id): Path<i64>,
) -> Result<Json<ReportResponse>, AppError> {
    let report = result_service::get_report(&state, player_id).await?;
    Ok(Json(report))
}
