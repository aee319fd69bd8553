//! Audio error types.

use std::time::Duration;

use thiserror::Error;
use wakeup_core::playback::PlaybackError;

/// Failure of an audio operation. Never fatal to the game: callers log it
/// and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// Every source of a track failed to start.
    #[error("no playable source for {track}")]
    Exhausted {
        /// Track name.
        track: String,
        /// The last channel error, if the last attempt failed rather than
        /// timed out.
        #[source]
        last: Option<PlaybackError>,
    },

    /// The channel did not answer in time.
    #[error("playback did not respond within {0:?}")]
    TimedOut(Duration),

    /// An ambient start is in flight; the channels are not free.
    #[error("an ambient start is in flight")]
    Busy,

    /// The ambient playlist is empty.
    #[error("ambient playlist is empty")]
    EmptyPlaylist,

    /// A single channel call failed.
    #[error(transparent)]
    Playback(#[from] PlaybackError),
}
