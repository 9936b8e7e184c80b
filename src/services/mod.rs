/// OpenAPI documentation generation.
pub mod documentation;
/// Realtime broadcast event helpers.
pub mod events;
/// Event coordinator applying realtime game events.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Player registration and participant listings.
pub mod player_service;
/// Result logging and report composition.
pub mod result_service;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
/// Storage connection supervision.
pub mod storage_supervisor;
/// WebSocket connection and message handling service.
pub mod websocket_service;
