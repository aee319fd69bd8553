//! Snapshot persistence port.
//!
//! The game saves its whole player state as one JSON document under a fixed
//! key. Adapters only move documents around; decoding and repairing them is
//! the caller's job.

use async_trait::async_trait;

use crate::error::DomainError;

/// Key-value store for serialized player-state snapshots.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Loads the snapshot stored under `key`, or `None` if nothing is stored.
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, DomainError>;

    /// Stores `snapshot` under `key`, replacing any previous document.
    async fn save(&self, key: &str, snapshot: &serde_json::Value) -> Result<(), DomainError>;

    /// Removes the snapshot stored under `key`. Deleting a missing key is not
    /// an error.
    async fn delete(&self, key: &str) -> Result<(), DomainError>;
}
