//! Test repositories — mock `SnapshotRepository` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use wakeup_core::error::DomainError;
use wakeup_core::repository::SnapshotRepository;

/// An in-memory snapshot repository that records every `save` and `delete`.
#[derive(Debug, Default)]
pub struct RecordingSnapshotRepository {
    stored: Mutex<HashMap<String, Value>>,
    saved: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
}

impl RecordingSnapshotRepository {
    /// Create an empty recording repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `snapshot` under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_snapshot(key: &str, snapshot: Value) -> Self {
        let repo = Self::default();
        repo.stored.lock().unwrap().insert(key.to_owned(), snapshot);
        repo
    }

    /// Returns the document currently stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn stored(&self, key: &str) -> Option<Value> {
        self.stored.lock().unwrap().get(key).cloned()
    }

    /// Returns the keys passed to `save`, one entry per call.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_keys(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }

    /// Returns the keys passed to `delete`, one entry per call.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnapshotRepository for RecordingSnapshotRepository {
    async fn load(&self, key: &str) -> Result<Option<Value>, DomainError> {
        Ok(self.stored.lock().unwrap().get(key).cloned())
    }

    async fn save(&self, key: &str, snapshot: &Value) -> Result<(), DomainError> {
        self.stored
            .lock()
            .unwrap()
            .insert(key.to_owned(), snapshot.clone());
        self.saved.lock().unwrap().push(key.to_owned());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.stored.lock().unwrap().remove(key);
        self.deleted.lock().unwrap().push(key.to_owned());
        Ok(())
    }
}

/// A snapshot repository that never holds anything and silently accepts
/// writes.
#[derive(Debug)]
pub struct EmptySnapshotRepository;

#[async_trait]
impl SnapshotRepository for EmptySnapshotRepository {
    async fn load(&self, _key: &str) -> Result<Option<Value>, DomainError> {
        Ok(None)
    }

    async fn save(&self, _key: &str, _snapshot: &Value) -> Result<(), DomainError> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<(), DomainError> {
        Ok(())
    }
}

/// A snapshot repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingSnapshotRepository;

#[async_trait]
impl SnapshotRepository for FailingSnapshotRepository {
    async fn load(&self, _key: &str) -> Result<Option<Value>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn save(&self, _key: &str, _snapshot: &Value) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn delete(&self, _key: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

/// A snapshot repository whose stored document is not a player state.
#[derive(Debug)]
pub struct CorruptSnapshotRepository;

#[async_trait]
impl SnapshotRepository for CorruptSnapshotRepository {
    async fn load(&self, _key: &str) -> Result<Option<Value>, DomainError> {
        Ok(Some(Value::String("{not json".into())))
    }

    async fn save(&self, _key: &str, _snapshot: &Value) -> Result<(), DomainError> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<(), DomainError> {
        Ok(())
    }
}
