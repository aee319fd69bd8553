//! Snapshot codec and load/save services.
//!
//! The persistence adapter stores opaque JSON documents. This module turns
//! them into a repaired `PlayerState` and back. A snapshot that cannot be
//! read for any reason is treated as absent.

use tracing::{info, warn};
use wakeup_core::error::DomainError;
use wakeup_core::repository::SnapshotRepository;

use crate::domain::state::PlayerState;

/// Decodes a stored document. Anything that is not a JSON object, or does
/// not fit the schema, yields `None`.
#[must_use]
pub fn decode_snapshot(value: serde_json::Value) -> Option<PlayerState> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

/// Encodes a state for storage.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if serialization fails.
pub fn encode_snapshot(state: &PlayerState) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(state).map_err(|e| DomainError::Infrastructure(e.to_string()))
}

/// Loads the snapshot under `key`. Load failures and malformed documents are
/// logged and reported as `None`.
pub async fn load_player_state(repo: &dyn SnapshotRepository, key: &str) -> Option<PlayerState> {
    match repo.load(key).await {
        Ok(Some(value)) => {
            let decoded = decode_snapshot(value);
            if decoded.is_none() {
                warn!(save_key = %key, "discarding malformed snapshot");
            }
            decoded
        }
        Ok(None) => None,
        Err(e) => {
            warn!(save_key = %key, error = %e, "snapshot load failed; starting fresh");
            None
        }
    }
}

/// Persists `state` under `key`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if encoding or the repository fails.
pub async fn save_player_state(
    repo: &dyn SnapshotRepository,
    key: &str,
    state: &PlayerState,
) -> Result<(), DomainError> {
    let snapshot = encode_snapshot(state)?;
    repo.save(key, &snapshot).await
}

/// Loads the stored state, or a fresh default one, and repairs it.
pub async fn restore_player_state(repo: &dyn SnapshotRepository, key: &str) -> PlayerState {
    let mut state = load_player_state(repo, key).await.unwrap_or_default();
    if state.repair() {
        info!(save_key = %key, "repaired loaded snapshot");
    }
    state
}
