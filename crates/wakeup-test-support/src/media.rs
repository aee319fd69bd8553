//! Scripted media channels that share a mixer.
//!
//! The mixer sees every channel that is audibly playing and records an
//! overlap whenever two are active at once, so tests can assert that ambient
//! music and sound effects never play together.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wakeup_core::playback::{MediaChannel, PlaybackError};

#[derive(Debug, Default)]
struct MixerState {
    playing: HashMap<String, bool>,
    events: Vec<String>,
    overlapped: bool,
}

/// Shared output stage for scripted channels.
#[derive(Debug, Default)]
pub struct Mixer {
    state: Mutex<MixerState>,
}

impl Mixer {
    /// Create a mixer with nothing playing.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every channel operation in order, as `"<channel>:<op>[:<uri>]"`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn events(&self) -> Vec<String> {
        self.state.lock().unwrap().events.clone()
    }

    /// Whether two channels were ever audible at the same time.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn overlapped(&self) -> bool {
        self.state.lock().unwrap().overlapped
    }

    fn record(&self, channel: &str, event: String) {
        self.state
            .lock()
            .unwrap()
            .events
            .push(format!("{channel}:{event}"));
    }

    fn set_playing(&self, channel: &str, playing: bool) {
        let mut state = self.state.lock().unwrap();
        state.playing.insert(channel.to_owned(), playing);
        if state.playing.values().filter(|p| **p).count() > 1 {
            state.overlapped = true;
        }
    }
}

#[derive(Debug, Default)]
struct ChannelState {
    loaded: Option<String>,
    playing: bool,
    looping: bool,
    volume: f32,
    rejected: HashSet<String>,
    blocked: bool,
    stalled: bool,
    hanging: bool,
    plays: Vec<String>,
}

/// A `MediaChannel` whose behaviour is scripted by the test.
///
/// By default every `play` starts immediately and `finished` resolves at
/// once, as if the clip were zero-length. Individual URIs can be rejected,
/// all playback can be blocked (autoplay refused), and `finished` can be made
/// to never resolve.
#[derive(Debug)]
pub struct ScriptedChannel {
    name: String,
    mixer: Arc<Mixer>,
    state: Mutex<ChannelState>,
}

impl ScriptedChannel {
    /// Create a channel called `name` wired into `mixer`.
    #[must_use]
    pub fn new(name: &str, mixer: &Arc<Mixer>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_owned(),
            mixer: Arc::clone(mixer),
            state: Mutex::new(ChannelState {
                volume: 1.0,
                ..ChannelState::default()
            }),
        })
    }

    /// Makes `play(uri)` fail as unplayable.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn reject(&self, uri: &str) {
        self.state.lock().unwrap().rejected.insert(uri.to_owned());
    }

    /// Blocks (or unblocks) every `play` and `resume`, as a host does before
    /// the first user gesture.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn set_blocked(&self, blocked: bool) {
        self.state.lock().unwrap().blocked = blocked;
    }

    /// Makes `finished` never resolve.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn stall(&self) {
        self.state.lock().unwrap().stalled = true;
    }

    /// Makes `play` and `resume` never resolve (or resolve again), like a
    /// host that never answers.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn set_hanging(&self, hanging: bool) {
        self.state.lock().unwrap().hanging = hanging;
    }

    /// Simulates the loaded track reaching its end.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn end_track(&self) {
        self.state.lock().unwrap().playing = false;
        self.mixer.set_playing(&self.name, false);
        self.mixer.record(&self.name, "ended".into());
    }

    /// URI currently loaded, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn loaded(&self) -> Option<String> {
        self.state.lock().unwrap().loaded.clone()
    }

    /// Every URI that started playing, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn plays(&self) -> Vec<String> {
        self.state.lock().unwrap().plays.clone()
    }

    /// Whether looping is enabled.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn is_looping(&self) -> bool {
        self.state.lock().unwrap().looping
    }

    /// Last volume set.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn volume(&self) -> f32 {
        self.state.lock().unwrap().volume
    }

    async fn hang_if_scripted(&self, event: &str) {
        let hanging = self.state.lock().unwrap().hanging;
        if hanging {
            self.mixer.record(&self.name, event.to_owned());
            std::future::pending::<()>().await;
        }
    }

    fn start(&self, state: &mut ChannelState) {
        state.playing = true;
        self.mixer.set_playing(&self.name, true);
    }
}

#[async_trait]
impl MediaChannel for ScriptedChannel {
    async fn play(&self, uri: &str) -> Result<(), PlaybackError> {
        self.hang_if_scripted(&format!("hang:{uri}")).await;
        let mut state = self.state.lock().unwrap();
        state.loaded = Some(uri.to_owned());
        if state.blocked {
            self.mixer.record(&self.name, format!("blocked:{uri}"));
            return Err(PlaybackError::Blocked {
                uri: uri.to_owned(),
                reason: "autoplay refused".into(),
            });
        }
        if state.rejected.contains(uri) {
            self.mixer.record(&self.name, format!("rejected:{uri}"));
            return Err(PlaybackError::Unplayable {
                uri: uri.to_owned(),
                reason: "404".into(),
            });
        }
        state.plays.push(uri.to_owned());
        self.start(&mut state);
        self.mixer.record(&self.name, format!("play:{uri}"));
        Ok(())
    }

    async fn resume(&self) -> Result<(), PlaybackError> {
        self.hang_if_scripted("hang:resume").await;
        let mut state = self.state.lock().unwrap();
        let Some(uri) = state.loaded.clone() else {
            return Err(PlaybackError::NothingLoaded);
        };
        if state.blocked {
            return Err(PlaybackError::Blocked {
                uri,
                reason: "autoplay refused".into(),
            });
        }
        self.start(&mut state);
        self.mixer.record(&self.name, "resume".into());
        Ok(())
    }

    async fn finished(&self) {
        let stalled = self.state.lock().unwrap().stalled;
        if stalled {
            std::future::pending::<()>().await;
        }
        let mut state = self.state.lock().unwrap();
        if state.playing && !state.looping {
            state.playing = false;
            self.mixer.set_playing(&self.name, false);
            self.mixer.record(&self.name, "finished".into());
        }
    }

    fn pause(&self) {
        let mut state = self.state.lock().unwrap();
        state.playing = false;
        self.mixer.set_playing(&self.name, false);
        self.mixer.record(&self.name, "pause".into());
    }

    fn rewind(&self) {
        self.mixer.record(&self.name, "rewind".into());
    }

    fn is_playing(&self) -> bool {
        self.state.lock().unwrap().playing
    }

    fn set_looping(&self, looping: bool) {
        self.state.lock().unwrap().looping = looping;
    }

    fn set_volume(&self, volume: f32) {
        self.state.lock().unwrap().volume = volume;
    }
}
