//! A media channel for hosts without an audio device.
//!
//! Playback "starts" at once and every clip is zero-length, so the audio
//! coordinator runs its full protocol while the server stays silent. The
//! channel remembers what it was asked to do for the status endpoint.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::trace;
use wakeup_core::playback::{MediaChannel, PlaybackError};

/// Silent `MediaChannel`.
#[derive(Debug, Default)]
pub struct HeadlessChannel {
    name: &'static str,
    loaded: Mutex<Option<String>>,
    playing: AtomicBool,
    looping: AtomicBool,
    volume_bits: AtomicU32,
}

impl HeadlessChannel {
    /// Creates a channel; `name` only shows up in trace logs.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            volume_bits: AtomicU32::new(1.0_f32.to_bits()),
            ..Self::default()
        }
    }

    /// URI last loaded, if any.
    #[must_use]
    pub fn loaded(&self) -> Option<String> {
        self.loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Last volume set.
    #[must_use]
    pub fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Acquire))
    }
}

#[async_trait]
impl MediaChannel for HeadlessChannel {
    async fn play(&self, uri: &str) -> Result<(), PlaybackError> {
        *self.loaded.lock().unwrap_or_else(PoisonError::into_inner) = Some(uri.to_owned());
        self.playing.store(true, Ordering::Release);
        trace!(channel = self.name, uri, "play");
        Ok(())
    }

    async fn resume(&self) -> Result<(), PlaybackError> {
        if self.loaded().is_none() {
            return Err(PlaybackError::NothingLoaded);
        }
        self.playing.store(true, Ordering::Release);
        Ok(())
    }

    async fn finished(&self) {
        if !self.looping.load(Ordering::Acquire) {
            self.playing.store(false, Ordering::Release);
        }
    }

    fn pause(&self) {
        self.playing.store(false, Ordering::Release);
    }

    fn rewind(&self) {}

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }

    fn set_looping(&self, looping: bool) {
        self.looping.store(looping, Ordering::Release);
    }

    fn set_volume(&self, volume: f32) {
        self.volume_bits.store(volume.to_bits(), Ordering::Release);
    }
}
