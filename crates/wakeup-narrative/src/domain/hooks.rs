//! One-shot enter hooks.

use tracing::info;
use wakeup_core::clock::Clock;
use wakeup_world_state::{Need, Notices, PlayerState, gain};

use super::descriptor::EnterHook;

/// Side effects the caller must perform after a hook ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookOutcome {
    /// The soundtrack must be restarted for the current state (the finale
    /// switches to the happy track).
    pub restart_soundtrack: bool,
}

/// Runs `hook` against the state. Called once when the player arrives in a
/// scene, never when a scene is merely re-rendered.
pub fn run_enter_hook(
    hook: &EnterHook,
    state: &mut PlayerState,
    clock: &dyn Clock,
    notices: &mut Notices,
) -> HookOutcome {
    match hook {
        EnterHook::BuddyDailyClue => {
            if state.flags.buddy_clue_day != state.day {
                state.flags.buddy_clue_day = state.day;
                gain(state, &[(Need::Clues, 1)]);
                let line = format!("Your buddy shared a clue. (Day {})", state.day);
                state.push_diary(clock, &line);
                notices.info("Clue gained from your buddy.");
            }
            HookOutcome::default()
        }
        EnterHook::WhisperedClue { from } => {
            gain(state, &[(Need::Clues, 1)]);
            state.push_diary(clock, &format!("A whispered clue from {from}."));
            HookOutcome::default()
        }
        EnterHook::Finale => {
            if !state.flags.finished {
                state.flags.finished = true;
                state.push_diary(clock, "Finished: Happy Birthday unlocked.");
                info!(day = state.day, "story finished");
            }
            HookOutcome {
                restart_soundtrack: true,
            }
        }
    }
}
