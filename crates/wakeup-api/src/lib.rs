//! Ali, Wake Up — HTTP API.
//!
//! Exposes one game controller over JSON: render the current scene, take a
//! choice, run setup and settings, the debug console and the host audio
//! hooks.

pub mod config;
pub mod error;
pub mod headless;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use wakeup_audio::AudioCoordinator;
use wakeup_core::clock::{Clock, SystemClock};
use wakeup_core::playback::MediaChannel;
use wakeup_core::repository::SnapshotRepository;
use wakeup_core::rng::SystemRng;
use wakeup_session::GameController;

use crate::config::AppConfig;
use crate::headless::HeadlessChannel;
use crate::state::AppState;

/// Builds the full router: health plus every `/api/v1` context.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/game", routes::game::router())
        .nest("/api/v1/console", routes::console::router())
        .nest("/api/v1/audio", routes::audio::router())
        .with_state(app_state)
}

/// Boots the game on `repo` with silent channels, the system clock and an
/// entropy-seeded RNG.
pub async fn assemble_state(
    config: &AppConfig,
    repo: Arc<dyn SnapshotRepository>,
    persistence: &'static str,
) -> AppState {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let audio = Arc::new(AudioCoordinator::new(
        Arc::new(HeadlessChannel::new("ambient")) as Arc<dyn MediaChannel>,
        Arc::new(HeadlessChannel::new("sfx")) as Arc<dyn MediaChannel>,
        Arc::clone(&clock),
        config.audio(),
    ));
    let game = GameController::boot(
        config.save_key.clone(),
        repo,
        Arc::clone(&audio),
        clock,
        Box::new(SystemRng::from_entropy()),
    )
    .await;
    AppState::new(game, audio, persistence)
}
