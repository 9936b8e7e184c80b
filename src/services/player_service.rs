use tracing::info;

use crate::{
    dto::player::{ParticipantSummary, RegisterPlayerRequest, RegisterPlayerResponse},
    error::ServiceError,
    state::SharedState,
};

/// Store a new player and hand back the generated identifier.
pub async fn register_player(
    state: &SharedState,
    request: RegisterPlayerRequest,
) -> Result<RegisterPlayerResponse, ServiceError> {
    let store = state.require_store().await?;
    let id = store.create_player(request.name, request.cohort).await?;
    info!(id, "player registered");
    Ok(RegisterPlayerResponse::ok(id))
}

/// List every registered player belonging to a cohort.
pub async fn list_participants(
    state: &SharedState,
    cohort: String,
) -> Result<Vec<ParticipantSummary>, ServiceError> {
    let store = state.require_store().await?;
    let players = store.list_players_by_cohort(cohort).await?;
    Ok(players.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        dao::quiz_store::testing::MemoryStore,
        serial::SerialBridge,
        state::{AppState, EventHub},
    };

    fn request(name: &str, cohort: &str) -> RegisterPlayerRequest {
        RegisterPlayerRequest {
            name: name.into(),
            cohort: cohort.into(),
        }
    }

    #[tokio::test]
    async fn registered_player_shows_up_in_cohort_listing() {
        let state = AppState::new(SerialBridge::disconnected(), EventHub::new(8));
        state.install_store(Arc::new(MemoryStore::default())).await;

        let response = register_player(&state, request("Ana", "2024")).await.unwrap();
        assert_eq!(response.status, "ok");
        register_player(&state, request("Bruno", "2025")).await.unwrap();

        let participants = list_participants(&state, "2024".into()).await.unwrap();
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].id, response.id);
        assert_eq!(participants[0].name, "Ana");
    }

    #[tokio::test]
    async fn registration_fails_while_degraded() {
        let state = AppState::new(SerialBridge::disconnected(), EventHub::new(8));

        let outcome = register_player(&state, request("Ana", "2024")).await;
        assert!(matches!(outcome, Err(ServiceError::Degraded)));
    }
}
