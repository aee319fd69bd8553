//! Host audio hooks: user gestures, track ends and a status check.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{instrument, warn};
use wakeup_audio::AudioStatus;

use crate::state::AppState;

/// Response body for POST /gesture.
#[derive(Debug, Serialize)]
pub struct GestureResponse {
    pub ambient_playing: bool,
}

/// POST /gesture
#[instrument(skip(state))]
async fn gesture(State(state): State<AppState>) -> Json<GestureResponse> {
    let kick = state.game.lock().await.gesture();
    let ambient_playing = kick.await.unwrap_or_else(|err| {
        warn!(error = %err, "ambient kick task failed");
        false
    });
    Json(GestureResponse { ambient_playing })
}

/// POST /ambient-ended
#[instrument(skip(state))]
async fn ambient_ended(State(state): State<AppState>) -> Json<AudioStatus> {
    state.game.lock().await.ambient_track_ended().await;
    Json(state.audio.status().await)
}

/// GET /status
async fn status(State(state): State<AppState>) -> Json<AudioStatus> {
    Json(state.audio.status().await)
}

/// Returns the router for the audio hooks.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/gesture", post(gesture))
        .route("/ambient-ended", post(ambient_ended))
        .route("/status", get(status))
}
