//! Stat model: the total functions that adjust and clamp needs.
//!
//! None of these fail. Values may leave their bounds between a mutation and
//! the next `clamp_all`, which is run at the end of every mutation path.

use super::needs::Need;
use super::state::PlayerState;

/// Re-clamps every bounded need into its range. Trust is left as is.
pub fn clamp_all(state: &mut PlayerState) {
    for need in Need::ALL {
        if let Some((min, max)) = need.bounds() {
            let slot = state.needs.slot(need);
            *slot = (*slot).clamp(min, max);
        }
    }
}

/// Subtracts each delta from its need.
pub fn spend(state: &mut PlayerState, deltas: &[(Need, i32)]) {
    for &(need, delta) in deltas {
        let slot = state.needs.slot(need);
        *slot = slot.saturating_sub(delta);
    }
}

/// Adds each delta to its need.
pub fn gain(state: &mut PlayerState, deltas: &[(Need, i32)]) {
    for &(need, delta) in deltas {
        let slot = state.needs.slot(need);
        *slot = slot.saturating_add(delta);
    }
}

/// Changes aggregate Trust and the per-character ledger by the same amount.
pub fn adjust_trust(state: &mut PlayerState, who: &str, delta: i32) {
    let total = state.needs.slot(Need::Trust);
    *total = total.saturating_add(delta);
    let entry = state.trust_by.entry(who.to_owned()).or_insert(0);
    *entry = entry.saturating_add(delta);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::EVERYONE;

    #[test]
    fn test_clamp_all_bounds_every_need() {
        let mut state = PlayerState::default();
        for need in Need::ALL {
            state.needs.set(need, 5_000);
        }

        clamp_all(&mut state);

        for need in Need::ALL {
            match need.bounds() {
                Some((_, max)) => assert_eq!(state.needs.get(need), max, "{need}"),
                None => assert_eq!(state.needs.get(need), 5_000),
            }
        }
    }

    #[test]
    fn test_clamp_all_raises_values_below_the_floor() {
        let mut state = PlayerState::default();
        state.needs.food = -7;
        state.needs.resources = -2;
        state.needs.trust = -300;

        clamp_all(&mut state);

        assert_eq!(state.needs.food, -1);
        assert_eq!(state.needs.resources, 0);
        assert_eq!(state.needs.trust, -300);
    }

    #[test]
    fn test_spend_and_gain_apply_deltas() {
        let mut state = PlayerState::default();

        spend(&mut state, &[(Need::Energy, 2), (Need::Water, 1)]);
        gain(&mut state, &[(Need::Food, 3)]);

        assert_eq!(state.needs.energy, 3);
        assert_eq!(state.needs.water, 4);
        assert_eq!(state.needs.food, 8);
    }

    #[test]
    fn test_spend_does_not_clamp_by_itself() {
        let mut state = PlayerState::default();

        spend(&mut state, &[(Need::Sanity, 9)]);

        assert_eq!(state.needs.sanity, -4);
    }

    #[test]
    fn test_adjust_trust_updates_aggregate_and_ledger() {
        let mut state = PlayerState::default();

        adjust_trust(&mut state, "Erfan", 8);
        adjust_trust(&mut state, EVERYONE, -12);
        adjust_trust(&mut state, "Erfan", -10);

        assert_eq!(state.trust(), -14);
        assert_eq!(state.trust_with("Erfan"), -2);
        assert_eq!(state.trust_with(EVERYONE), -12);
        assert_eq!(state.trust_with("Mahdi"), 0);
    }
}
