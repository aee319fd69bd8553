//! The slice of player state the audio layer listens to.

use wakeup_world_state::PlayerState;

/// Audio-relevant view of the player state, taken at the moment of a call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioCue {
    pub music_on: bool,
    pub music_volume: f32,
    pub sfx_on: bool,
    pub sfx_volume: f32,
    /// Finished story or finale scene: the happy track replaces the playlist.
    pub wants_happy: bool,
}

impl AudioCue {
    /// Reads the cue off the player state.
    #[must_use]
    pub fn from_state(state: &PlayerState) -> Self {
        let settings = &state.settings;
        Self {
            music_on: settings.music_on,
            music_volume: settings.music_volume,
            sfx_on: settings.sfx_on,
            sfx_volume: settings.sfx_volume,
            wants_happy: state.is_finale(),
        }
    }

    /// Effective ambient volume: zero when music is off.
    #[must_use]
    pub fn ambient_volume(&self) -> f32 {
        if self.music_on {
            unit(self.music_volume)
        } else {
            0.0
        }
    }

    /// Effective one-shot volume: zero when sound effects are off.
    #[must_use]
    pub fn sfx_volume(&self) -> f32 {
        if self.sfx_on { unit(self.sfx_volume) } else { 0.0 }
    }
}

fn unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
