mod events;
mod score;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{dao::quiz_store::QuizStore, error::ServiceError, serial::SerialBridge};

pub use self::events::EventHub;
pub use self::score::SessionScore;

/// Cheaply clonable handle on the central application state.
pub type SharedState = Arc<AppState>;

/// Central application state shared by request handlers and background tasks.
pub struct AppState {
    store: RwLock<Option<Arc<dyn QuizStore>>>,
    events: EventHub,
    score: SessionScore,
    panel: SerialBridge,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until the storage supervisor
    /// installs a store.
    pub fn new(panel: SerialBridge, events: EventHub) -> SharedState {
        Arc::new(Self {
            store: RwLock::new(None),
            events,
            score: SessionScore::new(),
            panel,
        })
    }

    /// Obtain a handle to the current store, if one is installed.
    pub async fn store(&self) -> Option<Arc<dyn QuizStore>> {
        let guard = self.store.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the current store or fail with a degraded-mode error.
    pub async fn require_store(&self) -> Result<Arc<dyn QuizStore>, ServiceError> {
        self.store().await.ok_or(ServiceError::Degraded)
    }

    /// Install a storage backend and leave degraded mode.
    pub async fn install_store(&self, store: Arc<dyn QuizStore>) {
        let mut guard = self.store.write().await;
        *guard = Some(store);
    }

    /// Remove the current storage backend and enter degraded mode.
    pub async fn clear_store(&self) {
        let mut guard = self.store.write().await;
        guard.take();
    }

    /// Whether the application currently runs without storage.
    pub async fn is_degraded(&self) -> bool {
        let guard = self.store.read().await;
        guard.is_none()
    }

    /// Broadcast hub feeding every realtime subscriber.
    pub fn events(&self) -> &EventHub {
        &self.events
    }

    /// Correct-answer tally for the session in progress.
    pub fn score(&self) -> &SessionScore {
        &self.score
    }

    /// Handle for issuing commands to the button/lamp panel.
    pub fn panel(&self) -> &SerialBridge {
        &self.panel
    }
}
