//! Story milestones evaluated right after the player sleeps.

use tracing::info;
use wakeup_core::clock::Clock;
use wakeup_core::rng::DeterministicRng;
use wakeup_world_state::{CHARACTERS, Need, PlayerState};

/// Number of characters missing once the red light has fallen.
pub const MISSING_AFTER_RED_LIGHT: usize = 5;

/// A milestone that fired this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Milestone {
    /// Event 1: someone "went to heaven".
    Disappearance {
        /// Who vanished, if anyone was left to vanish.
        vanished: Option<String>,
    },
    /// Event 2: the red light. Buddy, villain and others are gone.
    RedLight {
        /// Everyone missing afterwards.
        missing: Vec<String>,
    },
}

impl Milestone {
    /// The scene the milestone sends the player to.
    #[must_use]
    pub fn scene_id(&self) -> &'static str {
        match self {
            Milestone::Disappearance { .. } => "event1",
            Milestone::RedLight { .. } => "event2",
        }
    }
}

fn pick_candidate(state: &PlayerState, rng: &mut dyn DeterministicRng) -> Option<String> {
    let profile = &state.profile;
    let pool: Vec<&str> = CHARACTERS
        .iter()
        .copied()
        .filter(|name| *name != profile.buddy && *name != profile.villain)
        .filter(|name| !state.is_missing(name))
        .collect();
    let index = rng.pick_index(pool.len())?;
    pool.get(index).map(|name| (*name).to_owned())
}

/// Fires at most one milestone and moves the player to its scene.
///
/// Event 1 needs 3 Clues and 30 Resources; Event 2 needs Event 1 plus 6
/// Clues and 60 Resources. Each fires once per game.
pub fn evaluate_after_sleep(
    state: &mut PlayerState,
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
) -> Option<Milestone> {
    let clues = state.needs.get(Need::Clues);
    let resources = state.needs.get(Need::Resources);

    let milestone = if !state.events.e1 && clues >= 3 && resources >= 30 {
        state.events.e1 = true;
        let vanished = pick_candidate(state, rng);
        if let Some(name) = &vanished {
            state.add_missing(name);
        }
        Milestone::Disappearance { vanished }
    } else if state.events.e1 && !state.events.e2 && clues >= 6 && resources >= 60 {
        state.events.e2 = true;
        let buddy = state.profile.buddy.clone();
        let villain = state.profile.villain.clone();
        state.add_missing(&buddy);
        state.add_missing(&villain);
        while state.missing.len() < MISSING_AFTER_RED_LIGHT {
            let Some(name) = pick_candidate(state, rng) else {
                break;
            };
            state.add_missing(&name);
        }
        state.push_diary(clock, "The sky turned red. Everyone fainted.");
        Milestone::RedLight {
            missing: state.missing.clone(),
        }
    } else {
        return None;
    };

    milestone.scene_id().clone_into(&mut state.scene_id);
    info!(scene = milestone.scene_id(), day = state.day, "milestone fired");
    Some(milestone)
}
