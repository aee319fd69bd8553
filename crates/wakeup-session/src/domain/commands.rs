//! Inputs the host sends to the game controller.

use serde::Deserialize;
use wakeup_world_state::{Profile, Settings};

/// Profile submitted by the setup dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SetupProfile {
    pub name: String,
    /// Any integer; clamped into `1..=120`.
    pub age: Option<i64>,
    pub job: String,
    pub villain: String,
    pub buddy: String,
}

impl SetupProfile {
    /// Builds a sanitized profile. A blank villain or buddy keeps the
    /// current one; `villain == buddy` is repaired.
    #[must_use]
    pub fn into_profile(self, current: &Profile) -> Profile {
        let or_current = |value: String, fallback: &str| {
            if value.trim().is_empty() {
                fallback.to_owned()
            } else {
                value.trim().to_owned()
            }
        };
        let age = self
            .age
            .map_or(current.age, |age| {
                u32::try_from(age.clamp(1, 120)).unwrap_or(current.age)
            });
        let mut profile = Profile {
            name: self.name,
            age,
            job: self.job,
            villain: or_current(self.villain, &current.villain),
            buddy: or_current(self.buddy, &current.buddy),
        };
        profile.sanitize();
        profile
    }
}

/// A partial settings update; absent fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsChange {
    pub music_on: Option<bool>,
    pub music_volume: Option<f32>,
    pub sfx_on: Option<bool>,
    pub sfx_volume: Option<f32>,
}

impl SettingsChange {
    /// Applies the change and clamps the volumes.
    pub fn apply(self, settings: &mut Settings) {
        if let Some(on) = self.music_on {
            settings.music_on = on;
        }
        if let Some(volume) = self.music_volume {
            settings.music_volume = volume;
        }
        if let Some(on) = self.sfx_on {
            settings.sfx_on = on;
        }
        if let Some(volume) = self.sfx_volume {
            settings.sfx_volume = volume;
        }
        settings.clamp_volumes();
    }
}

/// Debug console commands. Matching ignores case and surrounding blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Help,
    Status,
    Reset,
    /// Jump to the final confrontation with everything unlocked.
    GotoFinale,
    /// Jump to the finale.
    HappyBirthday,
    /// Blank input.
    Empty,
    Unknown(String),
}

impl ConsoleCommand {
    /// Parses a console line.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let command = raw.trim();
        match command.to_lowercase().as_str() {
            "" => ConsoleCommand::Empty,
            "help" => ConsoleCommand::Help,
            "status" => ConsoleCommand::Status,
            "reset" => ConsoleCommand::Reset,
            "goto finale" => ConsoleCommand::GotoFinale,
            "happy birthday" | "cheat happy birthday" => ConsoleCommand::HappyBirthday,
            _ => ConsoleCommand::Unknown(command.to_owned()),
        }
    }
}
