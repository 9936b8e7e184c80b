//! Keeps the SQLite store installed, retrying in the background while the
//! database cannot be opened.

use std::{path::PathBuf, sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    dao::quiz_store::{QuizStore, sqlite::SqliteQuizStore},
    state::SharedState,
};

const INITIAL_DELAY: Duration = Duration::from_secs(1);
const MAX_DELAY: Duration = Duration::from_secs(10);
const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Open the store with exponential backoff, install it, then watch its health.
///
/// While no store is installed every persistence request fails with a
/// degraded-mode error; nothing is queued or retried on behalf of callers.
pub async fn run(state: SharedState, database_path: PathBuf) {
    let mut delay = INITIAL_DELAY;

    loop {
        match SqliteQuizStore::connect(&database_path).await {
            Ok(store) => {
                let store: Arc<dyn QuizStore> = Arc::new(store);
                state.install_store(store.clone()).await;
                info!("storage ready; leaving degraded mode");
                delay = INITIAL_DELAY;

                loop {
                    sleep(HEALTH_POLL_INTERVAL).await;
                    if let Err(err) = store.health_check().await {
                        warn!(error = %err, "storage health check failed; entering degraded mode");
                        state.clear_store().await;
                        break;
                    }
                }
            }
            Err(err) => {
                warn!(error = %err, "could not open storage; retrying");
            }
        }

        sleep(delay).await;
        delay = (delay * 2).min(MAX_DELAY);
    }
}
