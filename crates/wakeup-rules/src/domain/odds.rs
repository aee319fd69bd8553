//! Chance formulas. All of them scale with aggregate Trust and are clamped
//! to fixed balance bounds.

use wakeup_core::rng::DeterministicRng;
use wakeup_world_state::PlayerState;

fn trust(state: &PlayerState) -> f64 {
    f64::from(state.trust())
}

/// Probability that a luck roll succeeds.
#[must_use]
pub fn luck_chance(state: &PlayerState) -> f64 {
    (0.08 + trust(state) / 300.0).clamp(0.08, 0.55)
}

/// Probability that stealing from a present character goes unnoticed.
#[must_use]
pub fn steal_chance(state: &PlayerState) -> f64 {
    (0.35 - trust(state) / 600.0).clamp(0.08, 0.45)
}

/// Probability of finding a clue in a missing character's empty bunker.
#[must_use]
pub fn search_empty_chance(state: &PlayerState) -> f64 {
    (0.12 + trust(state) / 400.0).clamp(0.12, 0.55)
}

/// Probability of finding a clue while searching a present character's
/// bunker.
#[must_use]
pub fn search_occupied_chance(state: &PlayerState) -> f64 {
    (0.12 + trust(state) / 500.0).clamp(0.12, 0.55)
}

/// Probability that a conversation ends with a whispered clue.
#[must_use]
pub fn whisper_chance(state: &PlayerState) -> f64 {
    (0.08 + trust(state) / 1500.0).min(0.20)
}

/// Rolls for luck.
pub fn roll_luck(state: &PlayerState, rng: &mut dyn DeterministicRng) -> bool {
    rng.chance(luck_chance(state))
}
