use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the quiz panel backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::players::register_player,
        crate::routes::players::list_participants,
        crate::routes::results::save_result,
        crate::routes::results::get_report,
        crate::routes::sse::event_stream,
        crate::routes::websocket::ws_handler,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::player::RegisterPlayerRequest,
            crate::dto::player::RegisterPlayerResponse,
            crate::dto::player::ParticipantSummary,
            crate::dto::report::SaveResultRequest,
            crate::dto::report::SaveResultResponse,
            crate::dto::report::ReportResponse,
            crate::dto::report::ReportEntry,
            crate::dto::ws::ClientMessage,
            crate::dto::ws::ServerMessage,
        )
    ),
    tags(
        (name = "players", description = "Player registration and cohort listings"),
        (name = "results", description = "Answer results and per-player reports"),
        (name = "health", description = "Health check endpoints"),
        (name = "events", description = "Realtime event streams"),
    )
)]
pub struct ApiDoc;
