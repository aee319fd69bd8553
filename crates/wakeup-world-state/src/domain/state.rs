//! The persisted player-state aggregate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wakeup_core::clock::Clock;

use super::needs::{Need, Needs};
use super::roster::enforce_buddy_not_villain;
use super::stats::clamp_all;

/// Maximum number of diary lines kept; older lines are dropped first.
pub const DIARY_CAPACITY: usize = 120;

/// Pseudo-character used for trust changes that affect everyone at once.
pub const EVERYONE: &str = "everyone";

/// Scene a brand-new game starts in.
pub const START_SCENE: &str = "drive";

const DEFAULT_NAME: &str = "Ali Shahrokhi";
const DEFAULT_AGE: u32 = 27;
const DEFAULT_JOB: &str = "SnapPay QA";
const DEFAULT_VILLAIN: &str = "Dr.Mansoor Rezghi";

/// Who the player is and who they are up against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Player name.
    pub name: String,
    /// Player age in years, `1..=120`.
    pub age: u32,
    /// Job title shown on the work scene.
    pub job: String,
    /// The antagonist; never equal to `buddy`.
    pub villain: String,
    /// The player's closest ally.
    pub buddy: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            age: DEFAULT_AGE,
            job: DEFAULT_JOB.into(),
            villain: DEFAULT_VILLAIN.into(),
            buddy: super::roster::DEFAULT_BUDDY.into(),
        }
    }
}

impl Profile {
    /// Normalizes user-supplied fields: trims the name (blank falls back to
    /// the default), clamps the age and repairs a buddy equal to the villain.
    pub fn sanitize(&mut self) {
        let trimmed = self.name.trim();
        self.name = if trimmed.is_empty() {
            DEFAULT_NAME.to_owned()
        } else {
            trimmed.to_owned()
        };
        if self.job.trim().is_empty() {
            DEFAULT_JOB.clone_into(&mut self.job);
        }
        self.age = self.age.clamp(1, 120);
        enforce_buddy_not_villain(self);
    }
}

/// Audio preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Whether the ambient soundtrack plays at all.
    pub music_on: bool,
    /// Ambient volume in `[0, 1]`.
    #[serde(rename = "musicVol", alias = "musicVolume")]
    pub music_volume: f32,
    /// Whether sound effects play.
    pub sfx_on: bool,
    /// Sound-effect volume in `[0, 1]`.
    #[serde(rename = "sfxVol", alias = "sfxVolume")]
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_on: true,
            music_volume: 0.6,
            sfx_on: true,
            sfx_volume: 0.9,
        }
    }
}

impl Settings {
    /// Clamps both volumes into `[0, 1]`. NaN becomes 0.
    pub fn clamp_volumes(&mut self) {
        self.music_volume = unit(self.music_volume);
        self.sfx_volume = unit(self.sfx_volume);
    }
}

fn unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// One-shot story milestones. Each flips from `false` to `true` once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryEvents {
    /// First disappearance.
    pub e1: bool,
    /// The red light.
    pub e2: bool,
    /// The strange signal was followed to the hospital.
    pub hospital: bool,
}

/// Progress flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Flags {
    /// The setup dialog has been completed.
    pub intro_done: bool,
    /// The story has been finished.
    pub finished: bool,
    /// Day on which the buddy last shared a clue (0 = never).
    pub buddy_clue_day: u32,
}

/// The whole persisted game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerState {
    /// Player profile.
    pub profile: Profile,
    /// Audio preferences.
    pub settings: Settings,
    /// Current needs.
    pub needs: Needs,
    /// Timestamped log lines, oldest first.
    pub diary: Vec<String>,
    /// Current day, starting at 1.
    pub day: u32,
    /// Trust per character, including the `everyone` pseudo-character.
    pub trust_by: BTreeMap<String, i32>,
    /// Characters who have disappeared, in the order they vanished.
    pub missing: Vec<String>,
    /// Story milestones.
    pub events: StoryEvents,
    /// Progress flags.
    pub flags: Flags,
    /// The scene the player is in.
    pub scene_id: String,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            settings: Settings::default(),
            needs: Needs::default(),
            diary: Vec::new(),
            day: 1,
            trust_by: BTreeMap::new(),
            missing: Vec::new(),
            events: StoryEvents::default(),
            flags: Flags::default(),
            scene_id: START_SCENE.into(),
        }
    }
}

impl PlayerState {
    /// Appends a timestamped diary line, dropping the oldest lines beyond
    /// [`DIARY_CAPACITY`]. Empty lines are ignored.
    pub fn push_diary(&mut self, clock: &dyn Clock, line: &str) {
        if line.is_empty() {
            return;
        }
        let stamp = clock.now().format("%Y-%m-%d %H:%M:%S");
        self.diary.push(format!("[{stamp}] {line}"));
        if self.diary.len() > DIARY_CAPACITY {
            let overflow = self.diary.len() - DIARY_CAPACITY;
            self.diary.drain(..overflow);
        }
    }

    /// The diary as one block of text.
    #[must_use]
    pub fn diary_text(&self) -> String {
        if self.diary.is_empty() {
            "No entries yet.".to_owned()
        } else {
            self.diary.join("\n")
        }
    }

    /// Marks `name` as missing. Blank names and repeats are ignored.
    pub fn add_missing(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.is_missing(name) {
            return;
        }
        self.missing.push(name.to_owned());
    }

    /// Whether `name` has disappeared.
    #[must_use]
    pub fn is_missing(&self, name: &str) -> bool {
        self.missing.iter().any(|m| m == name)
    }

    /// Aggregate trust.
    #[must_use]
    pub fn trust(&self) -> i32 {
        self.needs.get(Need::Trust)
    }

    /// Trust accumulated with one character.
    #[must_use]
    pub fn trust_with(&self, who: &str) -> i32 {
        self.trust_by.get(who).copied().unwrap_or(0)
    }

    /// Whether the finale soundtrack should be playing.
    #[must_use]
    pub fn is_finale(&self) -> bool {
        self.flags.finished || self.scene_id == "finale"
    }

    /// Brings a freshly loaded state back within its invariants. Returns
    /// `true` if anything had to change.
    pub fn repair(&mut self) -> bool {
        let before = self.clone();
        self.profile.sanitize();
        self.settings.clamp_volumes();
        self.day = self.day.max(1);
        if self.scene_id.trim().is_empty() {
            START_SCENE.clone_into(&mut self.scene_id);
        }
        let mut seen = Vec::with_capacity(self.missing.len());
        for name in std::mem::take(&mut self.missing) {
            if !name.trim().is_empty() && !seen.contains(&name) {
                seen.push(name);
            }
        }
        self.missing = seen;
        if self.diary.len() > DIARY_CAPACITY {
            let overflow = self.diary.len() - DIARY_CAPACITY;
            self.diary.drain(..overflow);
        }
        clamp_all(self);
        *self != before
    }
}
