use std::{path::Path, time::Duration};

use futures::future::BoxFuture;
use sqlx::{
    Row,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions},
};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::info;

use crate::dao::{
    models::{PlayerEntity, PlayerSummaryEntity, ResultEntryEntity},
    quiz_store::QuizStore,
    storage::{StorageError, StorageResult},
};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_CONNECTIONS: u32 = 4;

/// SQLite-backed implementation of [`QuizStore`].
///
/// The schema is created idempotently on connect. The `foreign_keys` pragma
/// stays off: result rows are best-effort logs and must be accepted even for
/// player identifiers the database has never seen.
#[derive(Clone)]
pub struct SqliteQuizStore {
    pool: SqlitePool,
}

impl SqliteQuizStore {
    /// Open (creating if missing) the database file and ensure the schema.
    pub async fn connect(path: &Path) -> StorageResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT)
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|source| {
                StorageError::unavailable(
                    format!("failed to open database at `{}`", path.display()),
                    source,
                )
            })?;

        let store = Self { pool };
        store.ensure_schema().await?;
        info!(path = %path.display(), "quiz database ready");
        Ok(store)
    }

    /// Create the players and results tables when they do not exist yet.
    async fn ensure_schema(&self) -> StorageResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                cohort TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|source| {
            StorageError::unavailable("failed to create players table".into(), source)
        })?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_id INTEGER NOT NULL,
                category TEXT NOT NULL,
                correct INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY(player_id) REFERENCES players(id)
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|source| {
            StorageError::unavailable("failed to create results table".into(), source)
        })?;

        Ok(())
    }
}

impl QuizStore for SqliteQuizStore {
    fn create_player(&self, name: String, cohort: String) -> BoxFuture<'static, StorageResult<i64>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let outcome =
                sqlx::query("INSERT INTO players (name, cohort, created_at) VALUES (?1, ?2, ?3)")
                    .bind(&name)
                    .bind(&cohort)
                    .bind(now_rfc3339())
                    .execute(&pool)
                    .await
                    .map_err(|source| {
                        StorageError::unavailable(
                            format!("failed to insert player `{name}`"),
                            source,
                        )
                    })?;

            Ok(outcome.last_insert_rowid())
        })
    }

    fn record_result(
        &self,
        player_id: i64,
        category: String,
        correct: bool,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            sqlx::query(
                "INSERT INTO results (player_id, category, correct, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(player_id)
            .bind(&category)
            .bind(correct)
            .bind(now_rfc3339())
            .execute(&pool)
            .await
            .map_err(|source| {
                StorageError::unavailable(
                    format!("failed to record result for player `{player_id}`"),
                    source,
                )
            })?;

            Ok(())
        })
    }

    fn list_players_by_cohort(
        &self,
        cohort: String,
    ) -> BoxFuture<'static, StorageResult<Vec<PlayerSummaryEntity>>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let rows = sqlx::query("SELECT id, name FROM players WHERE cohort = ?1 ORDER BY id")
                .bind(&cohort)
                .fetch_all(&pool)
                .await
                .map_err(|source| {
                    StorageError::unavailable(
                        format!("failed to list players for cohort `{cohort}`"),
                        source,
                    )
                })?;

            rows.into_iter()
                .map(|row| {
                    Ok(PlayerSummaryEntity {
                        id: row.try_get("id").map_err(decode_error)?,
                        name: row.try_get("name").map_err(decode_error)?,
                    })
                })
                .collect()
        })
    }

    fn find_player(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<PlayerEntity>>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let row = sqlx::query("SELECT id, name, cohort, created_at FROM players WHERE id = ?1")
                .bind(id)
                .fetch_optional(&pool)
                .await
                .map_err(|source| {
                    StorageError::unavailable(format!("failed to load player `{id}`"), source)
                })?;

            row.map(|row| {
                Ok(PlayerEntity {
                    id: row.try_get("id").map_err(decode_error)?,
                    name: row.try_get("name").map_err(decode_error)?,
                    cohort: row.try_get("cohort").map_err(decode_error)?,
                    created_at: row.try_get("created_at").map_err(decode_error)?,
                })
            })
            .transpose()
        })
    }

    fn results_for_player(
        &self,
        player_id: i64,
    ) -> BoxFuture<'static, StorageResult<Vec<ResultEntryEntity>>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let rows =
                sqlx::query("SELECT category, correct FROM results WHERE player_id = ?1 ORDER BY id")
                    .bind(player_id)
                    .fetch_all(&pool)
                    .await
                    .map_err(|source| {
                        StorageError::unavailable(
                            format!("failed to load results for player `{player_id}`"),
                            source,
                        )
                    })?;

            rows.into_iter()
                .map(|row| {
                    Ok(ResultEntryEntity {
                        category: row.try_get("category").map_err(decode_error)?,
                        correct: row.try_get("correct").map_err(decode_error)?,
                    })
                })
                .collect()
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            sqlx::query("SELECT 1")
                .execute(&pool)
                .await
                .map_err(|source| {
                    StorageError::unavailable("health check query failed".into(), source)
                })?;
            Ok(())
        })
    }
}

fn decode_error(source: sqlx::Error) -> StorageError {
    StorageError::unavailable("failed to decode row".into(), source)
}

/// Current wall-clock time as an RFC 3339 string for the `created_at` columns.
fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}
