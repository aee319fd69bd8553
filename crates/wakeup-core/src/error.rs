//! Domain error types.

use thiserror::Error;

/// Why a game request could not be carried out.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The player's current scene id has no registered scene.
    #[error("scene not found: {0}")]
    SceneNotFound(String),

    /// The requested choice index is past the end of the scene's choices.
    #[error("scene {scene} has {available} choices; there is no choice {index}")]
    ChoiceOutOfRange {
        /// Scene the player is in.
        scene: String,
        /// The index that was asked for.
        index: usize,
        /// How many choices the scene offers.
        available: usize,
    },

    /// The choice is shown but cannot be taken right now.
    #[error("choice \"{label}\" in {scene} is not available")]
    ChoiceDisabled {
        /// Scene the player is in.
        scene: String,
        /// Label of the refused choice.
        label: String,
    },

    /// Setup runs once per game.
    #[error("setup was already completed; reset to start over")]
    SetupAlreadyDone,

    /// A villain or buddy that is not in the roster.
    #[error("unknown character: {0}")]
    UnknownCharacter(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
