//! Shared application state.

use std::sync::Arc;

use tokio::sync::Mutex;
use wakeup_audio::AudioCoordinator;
use wakeup_session::GameController;

/// Application state shared across all request handlers.
///
/// The controller sits behind an async mutex: turns are processed one at a
/// time, in arrival order.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single running game.
    pub game: Arc<Mutex<GameController>>,
    /// The coordinator the game drives, for diagnostics.
    pub audio: Arc<AudioCoordinator>,
    /// Which snapshot backend is in use (`postgres` or `memory`).
    pub persistence: &'static str,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        game: GameController,
        audio: Arc<AudioCoordinator>,
        persistence: &'static str,
    ) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
            audio,
            persistence,
        }
    }
}
