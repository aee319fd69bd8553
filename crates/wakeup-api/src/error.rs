//! Ali, Wake Up — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use wakeup_core::error::DomainError;

/// Startup errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The snapshot store could not be prepared.
    #[error("storage error: {0}")]
    Storage(#[from] DomainError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned when a game request is refused.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// What went wrong, fit to show the player.
    pub message: String,
    /// The scene the player is stuck in, when the error is about a scene or
    /// one of its choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_id: Option<String>,
    /// How the host can get the player moving again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            DomainError::SceneNotFound(_) => (StatusCode::NOT_FOUND, "scene_not_found"),
            DomainError::ChoiceOutOfRange { .. } => (StatusCode::NOT_FOUND, "choice_not_found"),
            DomainError::ChoiceDisabled { .. } => (StatusCode::CONFLICT, "choice_disabled"),
            DomainError::SetupAlreadyDone => (StatusCode::CONFLICT, "setup_completed"),
            DomainError::UnknownCharacter(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unknown_character")
            }
            DomainError::Infrastructure(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "storage_unavailable")
            }
        }
    }

    fn body(self, code: &'static str) -> ErrorBody {
        let (scene_id, hint) = match &self.0 {
            DomainError::SceneNotFound(raw) => (
                Some(raw.clone()),
                Some("the saved scene no longer exists; reset or use the console"),
            ),
            DomainError::ChoiceOutOfRange { scene, .. } => {
                (Some(scene.clone()), Some("fetch the scene again for its choices"))
            }
            DomainError::ChoiceDisabled { scene, .. } => (Some(scene.clone()), None),
            DomainError::SetupAlreadyDone => (None, Some("reset to start over")),
            DomainError::UnknownCharacter(_) | DomainError::Infrastructure(_) => (None, None),
        };
        let message = match self.0 {
            // Storage details stay in the log.
            DomainError::Infrastructure(detail) => {
                error!(%detail, "storage failure");
                "the game could not be loaded or saved".to_owned()
            }
            other => other.to_string(),
        };
        ErrorBody {
            error: code,
            message,
            scene_id,
            hint,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        (status, Json(self.body(code))).into_response()
    }
}
