//! Media playback port.
//!
//! A `MediaChannel` is one audio element owned by the host (a browser audio
//! tag, a native sink, or a headless stand-in). The audio coordinator drives
//! exactly two of them and is the only code allowed to call these methods.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a media channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The host refused to start playback (e.g. autoplay blocked until the
    /// next user gesture).
    #[error("playback blocked for {uri}: {reason}")]
    Blocked {
        /// The media URI that was refused.
        uri: String,
        /// Host-provided reason.
        reason: String,
    },

    /// The media could not be fetched or decoded.
    #[error("unplayable media {uri}: {reason}")]
    Unplayable {
        /// The media URI that failed.
        uri: String,
        /// Host-provided reason.
        reason: String,
    },

    /// Resume was requested but nothing is loaded on the channel.
    #[error("nothing loaded on channel")]
    NothingLoaded,
}

/// One playback channel.
#[async_trait]
pub trait MediaChannel: Send + Sync {
    /// Loads `uri` and starts playing it from the beginning. Resolves once
    /// playback has actually started.
    async fn play(&self, uri: &str) -> Result<(), PlaybackError>;

    /// Continues the loaded media from its paused position.
    async fn resume(&self) -> Result<(), PlaybackError>;

    /// Resolves when the currently playing media reaches its end (or
    /// immediately if nothing is playing).
    async fn finished(&self);

    /// Pauses playback, keeping the position.
    fn pause(&self);

    /// Seeks the loaded media back to the start.
    fn rewind(&self);

    /// Whether the channel is audibly playing right now.
    fn is_playing(&self) -> bool;

    /// Whether the loaded media restarts by itself when it ends.
    fn set_looping(&self, looping: bool);

    /// Output volume in `[0.0, 1.0]`.
    fn set_volume(&self, volume: f32);
}
