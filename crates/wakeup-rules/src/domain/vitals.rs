//! Post-action vitals checks.
//!
//! Run after every mutation, once needs have been clamped. Both checks may
//! write the diary and raise notices; a collapse also moves the player back
//! to their bunker.

use tracing::info;
use wakeup_core::clock::Clock;
use wakeup_world_state::{EVERYONE, Need, Notices, PlayerState, adjust_trust};

/// Bladder level at which an accident happens.
pub const BLADDER_ACCIDENT: i32 = 6;
/// Bladder level that triggers a warning.
pub const BLADDER_WARNING: i32 = 5;
/// Trust lost to everyone after an accident.
pub const ACCIDENT_TRUST_PENALTY: i32 = -12;
/// Scene the player wakes in after collapsing.
pub const COLLAPSE_SCENE: &str = "bunker";

/// A collapse forced by a depleted critical need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collapse {
    /// The need that ran out.
    pub need: Need,
    /// The day the player wakes up on.
    pub day: u32,
}

/// Handles a full bladder. At [`BLADDER_ACCIDENT`] the bladder empties and
/// everyone trusts the player a little less; one below that only warns.
pub fn check_bladder(state: &mut PlayerState, clock: &dyn Clock, notices: &mut Notices) {
    let bladder = state.needs.get(Need::Bladder);
    if bladder >= BLADDER_ACCIDENT {
        state.needs.set(Need::Bladder, 0);
        adjust_trust(state, EVERYONE, ACCIDENT_TRUST_PENALTY);
        state.push_diary(clock, "Accident… You embarrassed yourself. Trust -12.");
        notices.warn("You… uh… had an accident. Trust -12.");
        info!(day = state.day, "bladder accident");
    } else if bladder == BLADDER_WARNING {
        notices.warn("Bladder is high. Get to your bunker toilet.");
    }
}

/// Checks the critical needs in priority order. The first one at or below
/// -1 resets to 1, advances the day and sends the player to their bunker;
/// later needs are not examined. Needs sitting at exactly 0 only warn.
pub fn check_collapse(
    state: &mut PlayerState,
    clock: &dyn Clock,
    notices: &mut Notices,
) -> Option<Collapse> {
    for need in Need::CRITICAL {
        let value = state.needs.get(need);
        if value <= -1 {
            state.needs.set(need, 1);
            state.day = state.day.saturating_add(1);
            COLLAPSE_SCENE.clone_into(&mut state.scene_id);
            let line = format!(
                "You fainted ({need} depleted). Day {}. You wake in your bunker.",
                state.day
            );
            state.push_diary(clock, &line);
            notices.warn("You fainted… Next morning, you wake up in your bunker.");
            info!(%need, day = state.day, "player collapsed");
            return Some(Collapse {
                need,
                day: state.day,
            });
        }
        if value == 0 {
            notices.warn(format!("{need} is zero. You have little time…"));
        }
    }
    None
}

/// Runs the bladder check then the collapse check. Returns the collapse, if
/// one overrode the current scene.
pub fn run_vitals(
    state: &mut PlayerState,
    clock: &dyn Clock,
    notices: &mut Notices,
) -> Option<Collapse> {
    check_bladder(state, clock, notices);
    check_collapse(state, clock, notices)
}
