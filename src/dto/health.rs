use serde::Serialize;
use utoipa::ToSchema;

/// Health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Storage status ("ok" or "degraded").
    pub status: String,
    /// Panel link status ("connected" or "absent").
    pub panel: String,
}

impl HealthResponse {
    /// Compose the health payload from the two independent subsystems.
    pub fn new(degraded: bool, panel_connected: bool) -> Self {
        Self {
            status: if degraded { "degraded" } else { "ok" }.to_string(),
            panel: if panel_connected {
                "connected"
            } else {
                "absent"
            }
            .to_string(),
        }
    }
}
