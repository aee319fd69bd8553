//! In-process snapshot repository.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use wakeup_core::error::DomainError;
use wakeup_core::repository::SnapshotRepository;

/// Keeps snapshots in memory for the lifetime of the process. Used when no
/// database is configured.
#[derive(Debug, Default)]
pub struct InMemorySnapshotRepository {
    snapshots: RwLock<HashMap<String, Value>>,
}

impl InMemorySnapshotRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotRepository for InMemorySnapshotRepository {
    async fn load(&self, key: &str) -> Result<Option<Value>, DomainError> {
        Ok(self.snapshots.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, snapshot: &Value) -> Result<(), DomainError> {
        self.snapshots
            .write()
            .await
            .insert(key.to_owned(), snapshot.clone());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.snapshots.write().await.remove(key);
        Ok(())
    }
}
