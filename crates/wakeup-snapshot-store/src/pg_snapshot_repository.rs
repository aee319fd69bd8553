//! `PostgreSQL` implementation of the `SnapshotRepository` trait.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::{debug, instrument};

use wakeup_core::error::DomainError;
use wakeup_core::repository::SnapshotRepository;

use crate::schema::CREATE_SNAPSHOTS_TABLE;

/// PostgreSQL-backed snapshot repository.
#[derive(Debug, Clone)]
pub struct PgSnapshotRepository {
    pool: PgPool,
}

impl PgSnapshotRepository {
    /// Creates a new `PgSnapshotRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the snapshots table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::raw_sql(CREATE_SNAPSHOTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(infrastructure)?;
        Ok(())
    }
}

fn infrastructure(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

#[async_trait]
impl SnapshotRepository for PgSnapshotRepository {
    #[instrument(skip(self))]
    async fn load(&self, key: &str) -> Result<Option<Value>, DomainError> {
        let row: Option<(Json<Value>,)> =
            sqlx::query_as("SELECT snapshot FROM player_snapshots WHERE save_key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(infrastructure)?;
        debug!(found = row.is_some(), "snapshot loaded");
        Ok(row.map(|(Json(snapshot),)| snapshot))
    }

    #[instrument(skip(self, snapshot))]
    async fn save(&self, key: &str, snapshot: &Value) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO player_snapshots (save_key, snapshot, saved_at) \
             VALUES ($1, $2, NOW()) \
             ON CONFLICT (save_key) \
             DO UPDATE SET snapshot = EXCLUDED.snapshot, saved_at = EXCLUDED.saved_at",
        )
        .bind(key)
        .bind(Json(snapshot))
        .execute(&self.pool)
        .await
        .map_err(infrastructure)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM player_snapshots WHERE save_key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(infrastructure)?;
        debug!(rows = result.rows_affected(), "snapshot deleted");
        Ok(())
    }
}
