pub mod sqlite;

use futures::future::BoxFuture;

use crate::dao::models::{PlayerEntity, PlayerSummaryEntity, ResultEntryEntity};
use crate::dao::storage::StorageResult;

/// Abstraction over the persistence layer for players and answer results.
pub trait QuizStore: Send + Sync {
    /// Insert a new player and return the generated identifier.
    fn create_player(&self, name: String, cohort: String) -> BoxFuture<'static, StorageResult<i64>>;
    /// Append one answer result for the given player, best effort: the
    /// player reference is not validated.
    fn record_result(
        &self,
        player_id: i64,
        category: String,
        correct: bool,
    ) -> BoxFuture<'static, StorageResult<()>>;
    /// All players whose cohort matches exactly, in insertion order.
    fn list_players_by_cohort(
        &self,
        cohort: String,
    ) -> BoxFuture<'static, StorageResult<Vec<PlayerSummaryEntity>>>;
    /// Look up a single player by identifier.
    fn find_player(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>>;
    /// All recorded results for a player, in insertion order.
    fn results_for_player(
        &self,
        player_id: i64,
    ) -> BoxFuture<'static, StorageResult<Vec<ResultEntryEntity>>>;
    /// Cheap liveness probe against the backend.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}

#[cfg(test)]
pub mod testing {
    //! In-memory [`QuizStore`] shared by unit tests across the crate.

    use std::sync::Mutex;

    use futures::future::BoxFuture;

    use crate::dao::{
        models::{PlayerEntity, PlayerSummaryEntity, ResultEntryEntity},
        storage::{StorageError, StorageResult},
    };

    use super::QuizStore;

    /// Store backed by plain vectors, with an optional write-failure switch.
    #[derive(Default)]
    pub struct MemoryStore {
        players: Mutex<Vec<PlayerEntity>>,
        results: Mutex<Vec<(i64, ResultEntryEntity)>>,
        pub fail_writes: bool,
    }

    impl MemoryStore {
        /// Store whose writes always fail with an unavailable error.
        pub fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        /// Snapshot of every recorded result with its player identifier.
        pub fn recorded(&self) -> Vec<(i64, ResultEntryEntity)> {
            self.results.lock().unwrap().clone()
        }
    }

    fn refused() -> StorageError {
        StorageError::unavailable("write refused".into(), std::io::Error::other("test"))
    }

    impl QuizStore for MemoryStore {
        fn create_player(
            &self,
            name: String,
            cohort: String,
        ) -> BoxFuture<'static, StorageResult<i64>> {
            if self.fail_writes {
                return Box::pin(async { Err(refused()) });
            }
            let mut players = self.players.lock().unwrap();
            let id = players.len() as i64 + 1;
            players.push(PlayerEntity {
                id,
                name,
                cohort,
                created_at: "1970-01-01T00:00:00Z".into(),
            });
            Box::pin(async move { Ok(id) })
        }

        fn record_result(
            &self,
            player_id: i64,
            category: String,
            correct: bool,
        ) -> BoxFuture<'static, StorageResult<()>> {
            if self.fail_writes {
                return Box::pin(async { Err(refused()) });
            }
            self.results
                .lock()
                .unwrap()
                .push((player_id, ResultEntryEntity { category, correct }));
            Box::pin(async { Ok(()) })
        }

        fn list_players_by_cohort(
            &self,
            cohort: String,
        ) -> BoxFuture<'static, StorageResult<Vec<PlayerSummaryEntity>>> {
            let matches = self
                .players
                .lock()
                .unwrap()
                .iter()
                .filter(|player| player.cohort == cohort)
                .map(|player| PlayerSummaryEntity {
                    id: player.id,
                    name: player.name.clone(),
                })
                .collect::<Vec<_>>();
            Box::pin(async move { Ok(matches) })
        }

        fn find_player(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
            let found = self
                .players
                .lock()
                .unwrap()
                .iter()
                .find(|player| player.id == id)
                .cloned();
            Box::pin(async move { Ok(found) })
        }

        fn results_for_player(
            &self,
            player_id: i64,
        ) -> BoxFuture<'static, StorageResult<Vec<ResultEntryEntity>>> {
            let entries = self
                .results
                .lock()
                .unwrap()
                .iter()
                .filter(|(id, _)| *id == player_id)
                .map(|(_, entry)| entry.clone())
                .collect::<Vec<_>>();
            Box::pin(async move { Ok(entries) })
        }

        fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(async { Ok(()) })
        }
    }
}
