//! The audio coordinator: sole owner of the ambient and one-shot channels.
//!
//! All channel-touching operations are serialized by one async lock, so the
//! two channels are never audible together: a sound effect pauses the
//! ambient track, plays to the end and only then lets the ambient resume.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::time::Duration;

use chrono::DateTime;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, info};
use wakeup_core::clock::Clock;
use wakeup_core::playback::MediaChannel;

use crate::domain::cue::AudioCue;
use crate::domain::error::AudioError;
use crate::domain::tracks::{AmbientMode, AudioConfig, Track};

const NEVER: i64 = i64::MIN;

#[derive(Debug, Default)]
struct Deck {
    /// Set only once the mode's track actually started.
    mode: Option<AmbientMode>,
    cursor: usize,
}

/// Snapshot of the coordinator for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioStatus {
    pub mode: Option<AmbientMode>,
    /// Name of the track the ambient channel is set up for.
    pub track: Option<String>,
    pub ambient_playing: bool,
}

/// Resets the "starting" latch however the kick ends.
struct Latch<'a>(&'a AtomicBool);

impl Drop for Latch<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Drives the ambient soundtrack and one-shot sound effects.
pub struct AudioCoordinator {
    ambient: Arc<dyn MediaChannel>,
    sfx: Arc<dyn MediaChannel>,
    clock: Arc<dyn Clock>,
    config: AudioConfig,
    deck: Mutex<Deck>,
    starting: AtomicBool,
    last_attempt_ms: AtomicI64,
}

impl std::fmt::Debug for AudioCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioCoordinator")
            .field("config", &self.config)
            .field("starting", &self.starting)
            .finish_non_exhaustive()
    }
}

impl AudioCoordinator {
    /// Takes ownership of the two channels.
    #[must_use]
    pub fn new(
        ambient: Arc<dyn MediaChannel>,
        sfx: Arc<dyn MediaChannel>,
        clock: Arc<dyn Clock>,
        config: AudioConfig,
    ) -> Self {
        Self {
            ambient,
            sfx,
            clock,
            config,
            deck: Mutex::new(Deck::default()),
            starting: AtomicBool::new(false),
            last_attempt_ms: AtomicI64::new(NEVER),
        }
    }

    /// Makes the ambient channel play whatever the cue calls for: the happy
    /// track once the story is finished, the playlist otherwise. A mode
    /// change or `force_restart` starts the target from the beginning;
    /// otherwise a paused channel is resumed.
    ///
    /// Returns `Ok(false)` when music is disabled.
    ///
    /// # Errors
    ///
    /// Returns an `AudioError` if no source of the target track starts.
    pub async fn ensure_ambient(
        &self,
        cue: &AudioCue,
        force_restart: bool,
    ) -> Result<bool, AudioError> {
        if !cue.music_on {
            return Ok(false);
        }
        let mut deck = self.deck.lock().await;
        self.ensure_locked(&mut deck, cue, force_restart).await?;
        Ok(true)
    }

    async fn ensure_locked(
        &self,
        deck: &mut Deck,
        cue: &AudioCue,
        force_restart: bool,
    ) -> Result<(), AudioError> {
        let target = if cue.wants_happy {
            AmbientMode::Happy
        } else {
            AmbientMode::Ambient
        };
        self.set_volumes(cue);
        self.ambient.set_looping(target == AmbientMode::Happy);

        if deck.mode != Some(target) || force_restart {
            self.ambient.pause();
            self.ambient.rewind();
            let track = match target {
                AmbientMode::Happy => &self.config.happy,
                AmbientMode::Ambient => self.playlist_track(deck.cursor)?,
            };
            play_first_available(self.ambient.as_ref(), track, self.config.playback_timeout)
                .await?;
            deck.mode = Some(target);
            info!(mode = ?target, track = %track.name, "soundtrack started");
            return Ok(());
        }

        if !self.ambient.is_playing() {
            self.resume_ambient().await?;
        }
        Ok(())
    }

    /// Host hook: the ambient track reached its end. In playlist mode the
    /// cursor advances (wrapping) and the next track starts; the happy track
    /// loops by itself and is left alone.
    ///
    /// # Errors
    ///
    /// Returns an `AudioError` if the next track cannot start.
    pub async fn on_ambient_ended(&self, cue: &AudioCue) -> Result<(), AudioError> {
        let mut deck = self.deck.lock().await;
        if deck.mode != Some(AmbientMode::Ambient) {
            return Ok(());
        }
        let len = self.config.playlist.len();
        if len == 0 {
            return Err(AudioError::EmptyPlaylist);
        }
        deck.cursor = (deck.cursor + 1) % len;
        if !cue.music_on {
            return Ok(());
        }
        self.set_volumes(cue);
        let track = self.playlist_track(deck.cursor)?;
        play_first_available(self.ambient.as_ref(), track, self.config.playback_timeout).await?;
        info!(track = %track.name, "playlist advanced");
        Ok(())
    }

    /// Plays a one-shot sound effect to completion with the ambient channel
    /// paused. The ambient resumes afterwards, whatever happened to the
    /// effect, if it was playing before and music is still on.
    ///
    /// # Errors
    ///
    /// Returns `AudioError::Busy` without waiting while an ambient start is
    /// in flight. Otherwise returns an `AudioError` if the channels stay
    /// locked past the playback timeout, no source starts, or the effect
    /// outlives the configured timeout. The ambient has been dealt with
    /// either way.
    pub async fn play_sfx(&self, cue: &AudioCue, sources: &[String]) -> Result<(), AudioError> {
        if !cue.sfx_on || sources.is_empty() {
            return Ok(());
        }
        if self.starting.load(Ordering::Acquire) {
            return Err(AudioError::Busy);
        }
        let wait = self.config.playback_timeout;
        let Ok(_deck) = timeout(wait, self.deck.lock()).await else {
            return Err(AudioError::TimedOut(wait));
        };

        let ambient_was_playing = self.ambient.is_playing();
        if ambient_was_playing {
            self.ambient.pause();
        }

        self.sfx.pause();
        self.sfx.rewind();
        self.set_volumes(cue);
        let effect = Track {
            name: "sound effect".to_owned(),
            sources: sources.to_vec(),
        };
        let mut result =
            play_first_available(self.sfx.as_ref(), &effect, self.config.playback_timeout).await;
        if result.is_ok() && timeout(self.config.sfx_timeout, self.sfx.finished()).await.is_err() {
            self.sfx.pause();
            result = Err(AudioError::TimedOut(self.config.sfx_timeout));
        }

        if ambient_was_playing && cue.music_on {
            if let Err(err) = self.resume_ambient().await {
                debug!(error = %err, "ambient did not resume after sound effect");
            }
        }
        result
    }

    /// Called on every raw user gesture. Starts or resumes the ambient
    /// unless music is off, a start is already in flight, the ambient is
    /// already playing, or the last attempt was too recent. Failures are
    /// swallowed so the next gesture can retry.
    ///
    /// Returns whether the ambient is (now) playing.
    pub async fn kick_ambient_if_needed(&self, cue: &AudioCue, force_restart: bool) -> bool {
        if !cue.music_on {
            return false;
        }
        if self.ambient.is_playing() {
            return true;
        }
        if self
            .starting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        let _latch = Latch(&self.starting);
        if self.throttled() {
            return false;
        }

        match self.ensure_ambient(cue, force_restart).await {
            Ok(started) => started,
            Err(err) => {
                debug!(error = %err, "ambient kick failed; will retry on next gesture");
                false
            }
        }
    }

    /// Applies changed settings: volumes always, then music on starts the
    /// ambient and music off pauses it.
    pub async fn apply_settings(&self, cue: &AudioCue) -> bool {
        self.set_volumes(cue);
        if cue.music_on {
            self.kick_ambient_if_needed(cue, false).await
        } else {
            self.stop_ambient().await;
            false
        }
    }

    /// Pauses the ambient channel, keeping its position and mode.
    pub async fn stop_ambient(&self) {
        let _deck = self.deck.lock().await;
        self.ambient.pause();
    }

    /// Sets both channel volumes from the cue.
    pub fn set_volumes(&self, cue: &AudioCue) {
        self.ambient.set_volume(cue.ambient_volume());
        self.sfx.set_volume(cue.sfx_volume());
    }

    /// Stops everything and forgets mode, cursor and throttle.
    pub async fn reset(&self) {
        let mut deck = self.deck.lock().await;
        for channel in [&self.ambient, &self.sfx] {
            channel.pause();
            channel.rewind();
        }
        self.ambient.set_looping(false);
        *deck = Deck::default();
        self.last_attempt_ms.store(NEVER, Ordering::Release);
        info!("audio reset");
    }

    /// Current mode, track and whether the ambient is audible.
    pub async fn status(&self) -> AudioStatus {
        let deck = self.deck.lock().await;
        let track = match deck.mode {
            Some(AmbientMode::Happy) => Some(self.config.happy.name.clone()),
            Some(AmbientMode::Ambient) => self
                .playlist_track(deck.cursor)
                .ok()
                .map(|t| t.name.clone()),
            None => None,
        };
        AudioStatus {
            mode: deck.mode,
            track,
            ambient_playing: self.ambient.is_playing(),
        }
    }

    fn playlist_track(&self, cursor: usize) -> Result<&Track, AudioError> {
        let len = self.config.playlist.len();
        self.config
            .playlist
            .get(cursor.checked_rem(len).unwrap_or(0))
            .ok_or(AudioError::EmptyPlaylist)
    }

    async fn resume_ambient(&self) -> Result<(), AudioError> {
        let wait = self.config.playback_timeout;
        match timeout(wait, self.ambient.resume()).await {
            Ok(result) => result.map_err(AudioError::from),
            Err(_) => Err(AudioError::TimedOut(wait)),
        }
    }

    /// Records an attempt unless the previous one is inside the throttle
    /// window.
    fn throttled(&self) -> bool {
        let previous = self.last_attempt_ms.load(Ordering::Acquire);
        if let Some(previous) = DateTime::from_timestamp_millis(previous) {
            let window = u64::try_from(self.config.retry_throttle.as_millis()).unwrap_or(u64::MAX);
            if self.clock.millis_since(previous) < window {
                return true;
            }
        }
        self.last_attempt_ms
            .store(self.clock.now().timestamp_millis(), Ordering::Release);
        false
    }
}

async fn play_first_available(
    channel: &dyn MediaChannel,
    track: &Track,
    wait: Duration,
) -> Result<(), AudioError> {
    let mut last = None;
    for uri in &track.sources {
        match timeout(wait, channel.play(uri)).await {
            Ok(Ok(())) => {
                debug!(track = %track.name, uri = %uri, "playback started");
                return Ok(());
            }
            Ok(Err(err)) => {
                debug!(track = %track.name, error = %err, "source failed; trying next");
                last = Some(err);
            }
            Err(_) => {
                debug!(track = %track.name, uri = %uri, "source timed out; trying next");
                last = None;
            }
        }
    }
    Err(AudioError::Exhausted {
        track: track.name.clone(),
        last,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use wakeup_core::playback::PlaybackError;
    use wakeup_test_support::{Mixer, ScriptedChannel, SteppingClock};
    use wakeup_world_state::PlayerState;

    use super::*;

    struct Rig {
        mixer: Arc<Mixer>,
        ambient: Arc<ScriptedChannel>,
        sfx: Arc<ScriptedChannel>,
        clock: Arc<SteppingClock>,
        audio: AudioCoordinator,
    }

    fn rig_with(config: AudioConfig) -> Rig {
        let mixer = Mixer::new();
        let ambient = ScriptedChannel::new("ambient", &mixer);
        let sfx = ScriptedChannel::new("sfx", &mixer);
        let clock = Arc::new(SteppingClock::new(
            Utc.with_ymd_and_hms(2026, 3, 1, 20, 0, 0).unwrap(),
        ));
        let audio = AudioCoordinator::new(
            Arc::clone(&ambient) as Arc<dyn MediaChannel>,
            Arc::clone(&sfx) as Arc<dyn MediaChannel>,
            Arc::clone(&clock) as Arc<dyn Clock>,
            config,
        );
        Rig {
            mixer,
            ambient,
            sfx,
            clock,
            audio,
        }
    }

    fn rig() -> Rig {
        rig_with(AudioConfig::default())
    }

    fn cue() -> AudioCue {
        AudioCue::from_state(&PlayerState::default())
    }

    fn happy_cue() -> AudioCue {
        AudioCue {
            wants_happy: true,
            ..cue()
        }
    }

    fn source(track: usize, index: usize) -> String {
        AudioConfig::default().playlist[track].sources[index].clone()
    }

    fn sfx_sources() -> Vec<String> {
        vec!["assets/sfx/crash.wav".to_owned()]
    }

    #[tokio::test]
    async fn test_ensure_ambient_is_a_no_op_with_music_off() {
        // Arrange
        let rig = rig();
        let muted = AudioCue {
            music_on: false,
            ..cue()
        };

        // Act
        let started = rig.audio.ensure_ambient(&muted, false).await.unwrap();

        // Assert
        assert!(!started);
        assert!(rig.mixer.events().is_empty());
    }

    #[tokio::test]
    async fn test_ensure_ambient_starts_the_first_playlist_track() {
        let rig = rig();

        rig.audio.ensure_ambient(&cue(), false).await.unwrap();

        assert_eq!(rig.ambient.plays(), vec![source(0, 0)]);
        assert!(!rig.ambient.is_looping());
        assert!((rig.ambient.volume() - 0.6).abs() < f32::EPSILON);
        let status = rig.audio.status().await;
        assert_eq!(status.mode, Some(AmbientMode::Ambient));
        assert_eq!(status.track.as_deref(), Some("Vastopia"));
    }

    #[tokio::test]
    async fn test_unplayable_source_falls_back_to_the_next() {
        let rig = rig();
        rig.ambient.reject(&source(0, 0));

        rig.audio.ensure_ambient(&cue(), false).await.unwrap();

        assert_eq!(rig.ambient.plays(), vec![source(0, 1)]);
        let events = rig.mixer.events();
        assert!(events.contains(&format!("ambient:rejected:{}", source(0, 0))));
    }

    #[tokio::test]
    async fn test_exhausted_sources_leave_the_mode_unset_so_the_next_try_restarts() {
        // Arrange
        let rig = rig();
        for i in 0..3 {
            rig.ambient.reject(&source(0, i));
        }

        // Act
        let err = rig.audio.ensure_ambient(&cue(), false).await.unwrap_err();

        // Assert
        assert!(matches!(
            err,
            AudioError::Exhausted { ref track, last: Some(PlaybackError::Unplayable { .. }) }
                if track == "Vastopia"
        ));
        assert_eq!(rig.audio.status().await.mode, None);
    }

    #[tokio::test]
    async fn test_finale_switches_to_the_looped_happy_track() {
        // Arrange
        let rig = rig();
        rig.audio.ensure_ambient(&cue(), false).await.unwrap();

        // Act
        rig.audio.ensure_ambient(&happy_cue(), false).await.unwrap();

        // Assert
        let plays = rig.ambient.plays();
        assert_eq!(plays.len(), 2);
        assert_eq!(plays[1], AudioConfig::default().happy.sources[0]);
        assert!(rig.ambient.is_looping());
        let events = rig.mixer.events();
        let pause_at = events.iter().rposition(|e| e == "ambient:pause").unwrap();
        let play_at = events.iter().rposition(|e| e.starts_with("ambient:play:")).unwrap();
        assert!(pause_at < play_at);
        assert_eq!(rig.audio.status().await.mode, Some(AmbientMode::Happy));
    }

    #[tokio::test]
    async fn test_same_mode_resumes_a_paused_ambient_instead_of_restarting() {
        let rig = rig();
        rig.audio.ensure_ambient(&cue(), false).await.unwrap();
        rig.audio.stop_ambient().await;

        rig.audio.ensure_ambient(&cue(), false).await.unwrap();

        assert_eq!(rig.ambient.plays().len(), 1);
        assert_eq!(rig.mixer.events().last().unwrap(), "ambient:resume");
        assert!(rig.ambient.is_playing());
    }

    #[tokio::test]
    async fn test_forced_restart_replays_the_current_track() {
        let rig = rig();
        rig.audio.ensure_ambient(&cue(), false).await.unwrap();

        rig.audio.ensure_ambient(&cue(), true).await.unwrap();

        assert_eq!(rig.ambient.plays(), vec![source(0, 0), source(0, 0)]);
    }

    #[tokio::test]
    async fn test_playlist_advances_and_wraps_when_a_track_ends() {
        // Arrange
        let rig = rig();
        rig.audio.ensure_ambient(&cue(), false).await.unwrap();

        // Act
        rig.ambient.end_track();
        rig.audio.on_ambient_ended(&cue()).await.unwrap();
        rig.ambient.end_track();
        rig.audio.on_ambient_ended(&cue()).await.unwrap();

        // Assert
        assert_eq!(
            rig.ambient.plays(),
            vec![source(0, 0), source(1, 0), source(0, 0)]
        );
    }

    #[tokio::test]
    async fn test_happy_track_end_never_advances_the_playlist() {
        let rig = rig();
        rig.audio.ensure_ambient(&happy_cue(), false).await.unwrap();

        rig.audio.on_ambient_ended(&happy_cue()).await.unwrap();

        assert_eq!(rig.ambient.plays().len(), 1);
        rig.audio.ensure_ambient(&cue(), false).await.unwrap();
        assert_eq!(rig.ambient.plays().last().unwrap(), &source(0, 0));
    }

    #[tokio::test]
    async fn test_sound_effect_pauses_ambient_and_resumes_it_afterwards() {
        // Arrange
        let rig = rig();
        rig.audio.ensure_ambient(&cue(), false).await.unwrap();

        // Act
        rig.audio.play_sfx(&cue(), &sfx_sources()).await.unwrap();

        // Assert
        assert!(!rig.mixer.overlapped());
        let events = rig.mixer.events();
        // The first three events are the ambient start.
        let tail: Vec<&str> = events.iter().skip(3).map(String::as_str).collect();
        assert_eq!(
            tail,
            [
                "ambient:pause",
                "sfx:pause",
                "sfx:rewind",
                "sfx:play:assets/sfx/crash.wav",
                "sfx:finished",
                "ambient:resume",
            ]
        );
        assert!(rig.ambient.is_playing());
    }

    #[tokio::test]
    async fn test_failed_sound_effect_still_resumes_ambient() {
        let rig = rig();
        rig.audio.ensure_ambient(&cue(), false).await.unwrap();
        rig.sfx.reject("assets/sfx/crash.wav");

        let result = rig.audio.play_sfx(&cue(), &sfx_sources()).await;

        assert!(matches!(result, Err(AudioError::Exhausted { .. })));
        assert!(rig.ambient.is_playing());
        assert!(!rig.mixer.overlapped());
    }

    #[tokio::test]
    async fn test_sound_effect_does_not_resume_ambient_once_music_is_off() {
        let rig = rig();
        rig.audio.ensure_ambient(&cue(), false).await.unwrap();
        let muted = AudioCue {
            music_on: false,
            ..cue()
        };

        rig.audio.play_sfx(&muted, &sfx_sources()).await.unwrap();

        assert!(!rig.ambient.is_playing());
    }

    #[tokio::test]
    async fn test_sound_effect_with_silent_ambient_resumes_nothing() {
        let rig = rig();

        rig.audio.play_sfx(&cue(), &sfx_sources()).await.unwrap();

        assert!(!rig.mixer.events().iter().any(|e| e.starts_with("ambient:")));
    }

    #[tokio::test]
    async fn test_sound_effects_off_plays_nothing() {
        let rig = rig();
        let quiet = AudioCue {
            sfx_on: false,
            ..cue()
        };

        rig.audio.play_sfx(&quiet, &sfx_sources()).await.unwrap();

        assert!(rig.sfx.plays().is_empty());
    }

    #[tokio::test]
    async fn test_stalled_sound_effect_times_out_and_ambient_resumes() {
        // Arrange
        let rig = rig_with(AudioConfig {
            sfx_timeout: Duration::from_millis(20),
            ..AudioConfig::default()
        });
        rig.audio.ensure_ambient(&cue(), false).await.unwrap();
        rig.sfx.stall();

        // Act
        let result = rig.audio.play_sfx(&cue(), &sfx_sources()).await;

        // Assert
        assert_eq!(result, Err(AudioError::TimedOut(Duration::from_millis(20))));
        assert!(!rig.sfx.is_playing());
        assert!(rig.ambient.is_playing());
        assert!(!rig.mixer.overlapped());
    }

    #[tokio::test]
    async fn test_blocked_kick_is_throttled_then_retried() {
        // Arrange
        let rig = rig();
        rig.ambient.set_blocked(true);

        // Act
        let blocked_attempts = |rig: &Rig| {
            rig.mixer
                .events()
                .iter()
                .filter(|e| e.starts_with("ambient:blocked:"))
                .count()
        };
        let first = rig.audio.kick_ambient_if_needed(&cue(), false).await;
        let attempts_after_first = blocked_attempts(&rig);
        let throttled = rig.audio.kick_ambient_if_needed(&cue(), false).await;
        let attempts_after_throttled = blocked_attempts(&rig);
        rig.clock.advance_millis(350);
        rig.ambient.set_blocked(false);
        let retried = rig.audio.kick_ambient_if_needed(&cue(), false).await;

        // Assert
        assert!(!first);
        assert!(!throttled);
        assert_eq!(attempts_after_first, 3);
        assert_eq!(attempts_after_throttled, attempts_after_first);
        assert!(retried);
        assert!(rig.ambient.is_playing());
    }

    fn hanging_rig() -> (Arc<AudioCoordinator>, Rig) {
        let rig = rig_with(AudioConfig {
            playback_timeout: Duration::from_millis(30),
            ..AudioConfig::default()
        });
        rig.ambient.set_hanging(true);
        let audio = Arc::new(AudioCoordinator::new(
            Arc::clone(&rig.ambient) as Arc<dyn MediaChannel>,
            Arc::clone(&rig.sfx) as Arc<dyn MediaChannel>,
            Arc::clone(&rig.clock) as Arc<dyn Clock>,
            rig.audio.config.clone(),
        ));
        (audio, rig)
    }

    #[tokio::test]
    async fn test_kick_refused_by_an_inflight_start_leaves_the_throttle_alone() {
        // Arrange
        let (audio, rig) = hanging_rig();
        let inflight = tokio::spawn({
            let audio = Arc::clone(&audio);
            async move { audio.kick_ambient_if_needed(&cue(), false).await }
        });
        tokio::task::yield_now().await;
        rig.clock.advance_millis(400);

        // Act
        let refused = audio.kick_ambient_if_needed(&cue(), false).await;
        let first = inflight.await.unwrap();
        rig.ambient.set_hanging(false);
        let retried = audio.kick_ambient_if_needed(&cue(), false).await;

        // Assert
        assert!(!refused);
        assert!(!first);
        assert!(retried);
        assert!(rig.ambient.is_playing());
    }

    #[tokio::test]
    async fn test_sound_effect_is_skipped_while_an_ambient_start_hangs() {
        // Arrange
        let (audio, rig) = hanging_rig();
        let inflight = tokio::spawn({
            let audio = Arc::clone(&audio);
            async move { audio.kick_ambient_if_needed(&cue(), false).await }
        });
        tokio::task::yield_now().await;

        // Act
        let result = audio.play_sfx(&cue(), &sfx_sources()).await;

        // Assert
        assert_eq!(result, Err(AudioError::Busy));
        assert!(rig.sfx.plays().is_empty());
        assert!(!inflight.await.unwrap());
    }

    #[tokio::test]
    async fn test_sound_effect_waits_for_the_channels_only_so_long() {
        // Arrange: the playlist advance hangs while holding the channels.
        let (audio, rig) = hanging_rig();
        rig.ambient.set_hanging(false);
        audio.ensure_ambient(&cue(), false).await.unwrap();
        rig.ambient.set_hanging(true);
        let advancing = tokio::spawn({
            let audio = Arc::clone(&audio);
            async move { audio.on_ambient_ended(&cue()).await }
        });
        tokio::task::yield_now().await;

        // Act
        let result = audio.play_sfx(&cue(), &sfx_sources()).await;

        // Assert
        assert_eq!(result, Err(AudioError::TimedOut(Duration::from_millis(30))));
        assert!(rig.sfx.plays().is_empty());
        assert!(advancing.await.unwrap().is_err());
    }

    #[tokio::test]
    async fn test_kick_while_playing_does_nothing() {
        let rig = rig();
        rig.audio.ensure_ambient(&cue(), false).await.unwrap();

        let playing = rig.audio.kick_ambient_if_needed(&cue(), false).await;

        assert!(playing);
        assert_eq!(rig.ambient.plays().len(), 1);
    }

    #[tokio::test]
    async fn test_turning_music_off_pauses_the_ambient() {
        let rig = rig();
        rig.audio.ensure_ambient(&cue(), false).await.unwrap();
        let muted = AudioCue {
            music_on: false,
            ..cue()
        };

        rig.audio.apply_settings(&muted).await;

        assert!(!rig.ambient.is_playing());
        assert!(rig.ambient.volume().abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_reset_forgets_mode_and_stops_both_channels() {
        let rig = rig();
        rig.audio.ensure_ambient(&happy_cue(), false).await.unwrap();

        rig.audio.reset().await;

        let status = rig.audio.status().await;
        assert_eq!(status.mode, None);
        assert!(!status.ambient_playing);
        assert!(!rig.ambient.is_looping());
    }
}
