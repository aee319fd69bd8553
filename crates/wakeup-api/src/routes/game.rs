//! Routes for playing the game: the current scene, choices, setup,
//! settings and the diary.

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, instrument};
use wakeup_session::{GameView, SettingsChange, SetupProfile, TurnReport};

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for GET /diary.
#[derive(Debug, Serialize)]
pub struct DiaryResponse {
    /// The diary lines joined by newlines, or a placeholder when empty.
    pub text: String,
    pub entries: usize,
}

/// GET /scene
#[instrument(skip(state))]
async fn current_scene(State(state): State<AppState>) -> Json<GameView> {
    Json(state.game.lock().await.view())
}

/// POST /choices/{index}
#[instrument(skip(state))]
async fn take_choice(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<TurnReport>, ApiError> {
    let report = state.game.lock().await.choose(index).await?;
    info!(turn_id = %report.turn_id, to = %report.to_scene, "choice handled");
    Ok(Json(report))
}

/// POST /setup
#[instrument(skip(state, request), fields(villain = %request.villain, buddy = %request.buddy))]
async fn setup(
    State(state): State<AppState>,
    Json(request): Json<SetupProfile>,
) -> Result<Json<GameView>, ApiError> {
    let view = state.game.lock().await.setup(request).await?;
    Ok(Json(view))
}

/// PUT /settings
#[instrument(skip(state))]
async fn update_settings(
    State(state): State<AppState>,
    Json(change): Json<SettingsChange>,
) -> Json<GameView> {
    Json(state.game.lock().await.update_settings(change).await)
}

/// GET /diary
#[instrument(skip(state))]
async fn diary(State(state): State<AppState>) -> Json<DiaryResponse> {
    let game = state.game.lock().await;
    Json(DiaryResponse {
        text: game.diary_text(),
        entries: game.state().diary.len(),
    })
}

/// POST /reset
#[instrument(skip(state))]
async fn reset(State(state): State<AppState>) -> Json<GameView> {
    let mut game = state.game.lock().await;
    game.reset().await;
    Json(game.view())
}

/// Returns the router for the game.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/scene", get(current_scene))
        .route("/choices/{index}", post(take_choice))
        .route("/setup", post(setup))
        .route("/settings", put(update_settings))
        .route("/diary", get(diary))
        .route("/reset", post(reset))
}
