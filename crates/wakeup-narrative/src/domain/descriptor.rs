//! Scene descriptors: what a scene looks like and what it offers.

use serde::Serialize;

use super::effect::Effect;
use super::scene_id::SceneId;

/// Background used when a scene does not set one.
pub const DEFAULT_BACKGROUND: &str = "assets/bg/bunker_room.png";

/// Which side of the chat a speaker sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// One line of scene dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DialogueLine {
    /// Narration without a speaker.
    System { text: String },
    /// A character speaking.
    Speech {
        speaker: String,
        side: Side,
        text: String,
    },
}

impl DialogueLine {
    /// Narration line.
    pub fn system(text: impl Into<String>) -> Self {
        DialogueLine::System { text: text.into() }
    }

    /// A non-player character speaking (left side).
    pub fn left(speaker: &str, text: impl Into<String>) -> Self {
        DialogueLine::Speech {
            speaker: speaker.to_owned(),
            side: Side::Left,
            text: text.into(),
        }
    }

    /// The player speaking (right side).
    pub fn right(speaker: &str, text: impl Into<String>) -> Self {
        DialogueLine::Speech {
            speaker: speaker.to_owned(),
            side: Side::Right,
            text: text.into(),
        }
    }

    /// The spoken or narrated text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            DialogueLine::System { text } | DialogueLine::Speech { text, .. } => text,
        }
    }
}

/// A one-shot action run when the player arrives in a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnterHook {
    /// The buddy shares one clue per day.
    BuddyDailyClue,
    /// A conversation partner whispered a clue.
    WhisperedClue { from: String },
    /// The story is over: mark it finished and switch the soundtrack.
    Finale,
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    /// Button label.
    pub label: String,
    /// Secondary line under the label.
    pub sub: String,
    /// Sound-effect fallback list, played before the effect.
    pub sfx: Vec<String>,
    /// What selecting the choice does to the state.
    #[serde(skip)]
    pub effect: Option<Effect>,
    /// Where the player goes afterwards, unless something overrides it.
    pub next: Option<SceneId>,
    /// Disabled choices are shown but cannot be taken.
    pub enabled: bool,
}

impl Choice {
    /// A choice leading to `next` with no effect.
    pub fn to(label: impl Into<String>, sub: impl Into<String>, next: SceneId) -> Self {
        Self {
            label: label.into(),
            sub: sub.into(),
            sfx: Vec::new(),
            effect: None,
            next: Some(next),
            enabled: true,
        }
    }

    /// Attaches an effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Attaches a sound effect.
    #[must_use]
    pub fn with_sfx(mut self, sources: &[&str]) -> Self {
        self.sfx = sources.iter().map(|s| (*s).to_owned()).collect();
        self
    }

    /// Enables or disables the choice.
    #[must_use]
    pub fn enabled_if(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Everything needed to render a scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescriptor {
    /// Heading shown above the scene.
    pub title: String,
    /// Small status line under the title (day, buddy, party); may be empty.
    pub meta: String,
    /// Narration; line breaks are kept.
    pub text: String,
    /// Background image URI.
    pub background: String,
    /// Optional illustration shown above the dialogue.
    pub media: Option<String>,
    pub dialogue: Vec<DialogueLine>,
    /// In display order; the turn API addresses them by index.
    pub choices: Vec<Choice>,
    /// Run once when the player arrives; never on a plain re-render.
    #[serde(skip)]
    pub on_enter: Option<EnterHook>,
}

impl SceneDescriptor {
    /// A scene with a title, text and background and nothing else.
    pub fn new(title: impl Into<String>, text: impl Into<String>, background: &str) -> Self {
        Self {
            title: title.into(),
            meta: String::new(),
            text: text.into(),
            background: background.to_owned(),
            media: None,
            dialogue: Vec::new(),
            choices: Vec::new(),
            on_enter: None,
        }
    }

    #[must_use]
    pub fn meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = meta.into();
        self
    }

    #[must_use]
    pub fn media(mut self, media: &str) -> Self {
        self.media = Some(media.to_owned());
        self
    }

    #[must_use]
    pub fn dialogue(mut self, lines: Vec<DialogueLine>) -> Self {
        self.dialogue = lines;
        self
    }

    #[must_use]
    pub fn choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    #[must_use]
    pub fn on_enter(mut self, hook: EnterHook) -> Self {
        self.on_enter = Some(hook);
        self
    }

    /// Looks up a choice by its label. Mostly useful in tests.
    #[must_use]
    pub fn choice(&self, label: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.label == label)
    }
}
