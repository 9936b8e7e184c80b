use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with the current health of storage and the panel link.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.store().await {
        Some(store) => {
            if let Err(err) = store.health_check().await {
                warn!(error = %err, "storage health check failed");
            }
        }
        None => warn!("storage unavailable (degraded mode)"),
    }

    HealthResponse::new(state.is_degraded().await, state.panel().is_connected())
}
