use crate::{
    dto::report::{ReportEntry, ReportResponse, SaveResultRequest, SaveResultResponse},
    error::ServiceError,
    state::SharedState,
};

/// Fallback display name when a report references an unknown player.
const UNKNOWN_PLAYER: &str = "Unknown player";

/// Append one answer outcome on behalf of an HTTP client.
pub async fn save_result(
    state: &SharedState,
    request: SaveResultRequest,
) -> Result<SaveResultResponse, ServiceError> {
    let store = state.require_store().await?;
    store
        .record_result(request.player_id, request.category, request.correct)
        .await?;
    Ok(SaveResultResponse::ok())
}

/// Compose the per-player report of answered questions.
///
/// An unknown player identifier yields the sentinel name rather than an
/// error so the report always renders.
pub async fn get_report(
    state: &SharedState,
    player_id: i64,
) -> Result<ReportResponse, ServiceError> {
    let store = state.require_store().await?;
    let entries = store.results_for_player(player_id).await?;
    let name = store
        .find_player(player_id)
        .await?
        .map(|player| player.name)
        .unwrap_or_else(|| UNKNOWN_PLAYER.to_string());

    Ok(ReportResponse {
        name,
        entries: entries.into_iter().map(ReportEntry::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        dao::quiz_store::{QuizStore, testing::MemoryStore},
        serial::SerialBridge,
        state::{AppState, EventHub},
    };

    async fn state_with_store() -> (crate::state::SharedState, Arc<MemoryStore>) {
        let state = AppState::new(SerialBridge::disconnected(), EventHub::new(8));
        let store = Arc::new(MemoryStore::default());
        state.install_store(store.clone()).await;
        (state, store)
    }

    #[tokio::test]
    async fn report_tallies_correct_and_wrong() {
        let (state, store) = state_with_store().await;
        let id = store
            .create_player("Ana".into(), "2024".into())
            .await
            .unwrap();

        for _ in 0..3 {
            save_result(
                &state,
                SaveResultRequest {
                    player_id: id,
                    category: "history".into(),
                    correct: true,
                },
            )
            .await
            .unwrap();
        }
        for _ in 0..2 {
            save_result(
                &state,
                SaveResultRequest {
                    player_id: id,
                    category: "music".into(),
                    correct: false,
                },
            )
            .await
            .unwrap();
        }

        let report = get_report(&state, id).await.unwrap();
        assert_eq!(report.name, "Ana");
        assert_eq!(report.entries.len(), 5);
        assert_eq!(report.entries.iter().filter(|e| e.correct).count(), 3);
        assert_eq!(report.entries.iter().filter(|e| e.wrong).count(), 2);
        assert!(report.entries.iter().all(|e| e.wrong != e.correct));
    }

    #[tokio::test]
    async fn unknown_player_gets_sentinel_name() {
        let (state, _store) = state_with_store().await;

        let report = get_report(&state, 404).await.unwrap();
        assert_eq!(report.name, "Unknown player");
        assert!(report.entries.is_empty());
    }

    #[tokio::test]
    async fn store_failure_reaches_the_caller() {
        let state = AppState::new(SerialBridge::disconnected(), EventHub::new(8));
        state.install_store(Arc::new(MemoryStore::failing())).await;

        let outcome = save_result(
            &state,
            SaveResultRequest {
                player_id: 1,
                category: "history".into(),
                correct: true,
            },
        )
        .await;
        assert!(matches!(outcome, Err(ServiceError::Unavailable(_))));
    }
}
