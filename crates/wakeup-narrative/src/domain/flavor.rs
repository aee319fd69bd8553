//! Talk flavor: the small, stable conversations in other people's bunkers.
//!
//! Lines are picked by a xorshift32 generator seeded from who is talking,
//! the day and the profile, so the same conversation is rendered every time
//! the scene is drawn that day. The draw order is fixed: opener, two voice
//! lines, the player's question, the clue roll (skipped for the villain),
//! the clue text, then the villain's line.

use wakeup_rules::domain::odds::whisper_chance;
use wakeup_world_state::PlayerState;

use super::descriptor::DialogueLine;

/// Personality bucket, fixed per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    Calm,
    Paranoid,
    Jokey,
    Broken,
    Cryptic,
}

impl Voice {
    const ALL: [Voice; 5] = [
        Voice::Calm,
        Voice::Paranoid,
        Voice::Jokey,
        Voice::Broken,
        Voice::Cryptic,
    ];

    /// The voice a character speaks with.
    #[must_use]
    pub fn of(who: &str) -> Self {
        let hash = who
            .encode_utf16()
            .fold(0u32, |h, unit| h.wrapping_mul(33).wrapping_add(u32::from(unit)));
        Self::ALL[hash as usize % Self::ALL.len()]
    }

    fn lines(self) -> &'static [&'static str] {
        match self {
            Voice::Calm => &[
                "Keep your breathing slow. Panic attracts attention.",
                "I marked a safe route. It's not perfect, but it's something.",
                "Everyone here pretends they're okay. They're not.",
            ],
            Voice::Paranoid => &[
                "Don't say names too loudly. The walls… remember.",
                "I heard footsteps outside my door. No one was there.",
                "Something mimics voices at night. If you hear me… verify.",
            ],
            Voice::Jokey => &[
                "If this is heaven, I want a refund.",
                "At least the coffee is… never mind. There's no coffee.",
                "If we survive, I'm never skipping sleep again. Ever.",
            ],
            Voice::Broken => &[
                "I keep replaying the moment I died. Like a looping GIF.",
                "Sometimes I forget what day it is… then I remember: it doesn't matter.",
                "I try not to look at the ceiling. It feels too close.",
            ],
            Voice::Cryptic => &[
                "The red light isn't a warning. It's a reset.",
                "Maps lie here. But they lie less than people.",
                "Nothing is real… but consequences are.",
            ],
        }
    }
}

const OPENERS: [&str; 4] = [
    "You look like you haven't slept in days.",
    "Your face says you saw the sky break.",
    "You came from the crossroads… did it change again?",
    "You smell like rust and rain.",
];

const QUESTIONS: [&str; 4] = [
    "Do you think this is the afterlife?",
    "Why do people disappear?",
    "Have you seen the red light?",
    "What do you know about the regions?",
];

const WHISPERS: [&str; 4] = [
    "I saw a symbol scratched near the hospital doors.",
    "Someone left a note: 'Nothing is real…' in the corridor.",
    "The signal comes back when the sky turns red.",
    "A map exists. It doesn't appear until you wake in the hospital.",
];

const VILLAIN_LINES: [&str; 3] = [
    "Nothing is real…",
    "You're doing great, Ali. Keep walking the paths.",
    "Clues won't save you. Only endings do.",
];

/// xorshift32 with the shift triple (13, 17, 5). The right shift is
/// arithmetic (sign-propagating).
#[derive(Debug, Clone)]
struct TalkRng(u32);

impl TalkRng {
    fn seeded(seed: &str) -> Self {
        Self(
            seed.encode_utf16()
                .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit))),
        )
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= ((x as i32) >> 17) as u32;
        x ^= x << 5;
        self.0 = x;
        f64::from(x) / 4_294_967_296.0
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        let index = (self.next_f64() * items.len() as f64).floor() as usize;
        items[index.min(items.len() - 1)]
    }
}

/// A rendered conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkFlavor {
    pub voice: Voice,
    pub lines: Vec<DialogueLine>,
    /// The partner whispered a clue; the scene grants it on entry.
    pub whispered_clue: bool,
}

/// Builds the conversation with `who` for the current day.
#[must_use]
pub fn talk_flavor(state: &PlayerState, who: &str) -> TalkFlavor {
    let profile = &state.profile;
    let seed = format!("{who}|{}|{}|{}", state.day, profile.villain, profile.buddy);
    let mut rng = TalkRng::seeded(&seed);
    let voice = Voice::of(who);

    let opener = rng.pick(&OPENERS);
    let first = rng.pick(voice.lines());
    let second = rng.pick(voice.lines());
    let question = rng.pick(&QUESTIONS);

    let mut lines = vec![
        DialogueLine::system(opener),
        DialogueLine::left(who, first),
        DialogueLine::right(&profile.name, question),
        DialogueLine::left(who, second),
    ];

    let is_villain = who == profile.villain;
    let whispered_clue = !is_villain && rng.next_f64() < whisper_chance(state);
    if whispered_clue {
        let clue = rng.pick(&WHISPERS);
        lines.push(DialogueLine::system("They hesitate… then whisper:"));
        lines.push(DialogueLine::left(who, clue));
        lines.push(DialogueLine::system("You feel something click into place."));
        lines.push(DialogueLine::system("Clue +1"));
    }

    if is_villain {
        lines.push(DialogueLine::system(
            "They smile like they're reading a script.",
        ));
        lines.push(DialogueLine::left(&profile.villain, rng.pick(&VILLAIN_LINES)));
    }

    TalkFlavor {
        voice,
        lines,
        whispered_clue,
    }
}
