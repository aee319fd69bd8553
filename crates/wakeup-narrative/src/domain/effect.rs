//! Choice effects and their interpreter.
//!
//! Effects are plain data attached to choices. `apply_effect` is the single
//! place where a choice mutates the player state. It does not clamp; the
//! turn pipeline clamps and runs the vitals checks afterwards.

use tracing::info;
use wakeup_core::clock::Clock;
use wakeup_core::rng::DeterministicRng;
use wakeup_rules::domain::odds::{search_empty_chance, search_occupied_chance, steal_chance};
use wakeup_rules::{evaluate_after_sleep, roll_luck};
use wakeup_world_state::{Need, Notices, PlayerState, adjust_trust, gain, spend};

use super::context::{Party, TurnContext};
use super::scene_id::SceneId;

/// A plain stat change with an optional diary line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjustment {
    /// Subtracted first.
    pub spend: Vec<(Need, i32)>,
    /// Added after the spend.
    pub gain: Vec<(Need, i32)>,
    /// Written to the diary once both are applied.
    pub diary: Option<String>,
}

impl Adjustment {
    /// Subtracts the given deltas.
    #[must_use]
    pub fn spend(deltas: &[(Need, i32)]) -> Self {
        Self {
            spend: deltas.to_vec(),
            ..Self::default()
        }
    }

    /// Adds the given deltas.
    #[must_use]
    pub fn gain(deltas: &[(Need, i32)]) -> Self {
        Self {
            gain: deltas.to_vec(),
            ..Self::default()
        }
    }

    /// Also adds the given deltas.
    #[must_use]
    pub fn and_gain(mut self, deltas: &[(Need, i32)]) -> Self {
        self.gain.extend_from_slice(deltas);
        self
    }

    /// Also writes a diary line.
    #[must_use]
    pub fn logged(mut self, line: impl Into<String>) -> Self {
        self.diary = Some(line.into());
        self
    }
}

/// Gathering spots outside the bunkers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forage {
    /// Fishing: costs Energy and Water, yields Food.
    Lake,
    /// Costs Energy, yields Water.
    Spring,
    /// Costs Energy, Food and Water, yields Resources.
    Scrapyard,
}

impl Forage {
    fn cost(self) -> &'static [(Need, i32)] {
        match self {
            Forage::Lake => &[(Need::Energy, 2), (Need::Water, 1)],
            Forage::Spring => &[(Need::Energy, 1)],
            Forage::Scrapyard => &[(Need::Energy, 2), (Need::Food, 1), (Need::Water, 1)],
        }
    }

    fn yield_of(self) -> (Need, i32) {
        match self {
            Forage::Lake => (Need::Food, 1),
            Forage::Spring => (Need::Water, 1),
            Forage::Scrapyard => (Need::Resources, 3),
        }
    }

    fn diary(self, amount: i32) -> String {
        match self {
            Forage::Lake => format!("Fished at the lake. Food +{amount}."),
            Forage::Spring => format!("Collected water. Water +{amount}."),
            Forage::Scrapyard => format!("Gathered resources. Resources +{amount}."),
        }
    }
}

/// Everything a choice can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Spend and gain fixed amounts.
    Adjust(Adjustment),
    /// Empties the bladder.
    UseToilet,
    /// One Resource for full Food and +1 Bladder. Refused without Resources.
    Eat,
    /// One Resource for full Water and +2 Bladder. Refused without Resources.
    Drink,
    /// Advances the day and may fire a story milestone.
    Sleep,
    /// Gather at a spot; a lucky roll triples the yield.
    Forage(Forage),
    /// Follow the strange signal to the hospital.
    InvestigateSignal,
    /// Remember whose bunker the player walked up to.
    Visit(String),
    /// Search a missing character's empty bunker.
    SearchEmpty(String),
    /// Give two Resources for +8 trust. Refused with fewer than two.
    Help(String),
    /// Search a bunker while its owner is home; trust raises the odds.
    SearchOccupied(String),
    /// Take Resources at the cost of trust, or get caught and lose more.
    Steal(String),
    /// Decide who follows the player to the final door.
    GatherParty,
    /// Open the final door. Refused without the keycard.
    EnterFinalDoor,
    TakeKeycard,
    /// Log the villain's end in the diary.
    EndVillain,
    /// Mark the story finished.
    FinishStory,
    /// Console cheat: jump to the final confrontation with everything unlocked.
    CheatGotoFinale,
    /// Console cheat: jump straight to the finale.
    CheatHappyBirthday,
}

/// What `apply_effect` needs to work with.
pub struct EffectScope<'a> {
    /// The state the effect mutates.
    pub state: &'a mut PlayerState,
    /// Per-turn context: who is being visited, who follows.
    pub ctx: &'a mut TurnContext,
    /// Source for every chance roll.
    pub rng: &'a mut dyn DeterministicRng,
    /// Timestamps diary lines.
    pub clock: &'a dyn Clock,
    /// Toasts for the player.
    pub notices: &'a mut Notices,
}

/// Result of applying an effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectOutcome {
    /// The effect chose the next scene itself; the choice's `next` is
    /// ignored.
    pub redirect: Option<SceneId>,
    /// The effect was refused; nothing changed and the player stays put.
    pub rejected: bool,
}

impl EffectOutcome {
    fn redirect(scene: SceneId) -> Self {
        Self {
            redirect: Some(scene),
            rejected: false,
        }
    }

    fn rejected() -> Self {
        Self {
            redirect: None,
            rejected: true,
        }
    }
}

/// Applies `effect` to the scope's state.
pub fn apply_effect(effect: &Effect, scope: &mut EffectScope<'_>) -> EffectOutcome {
    let EffectScope {
        state,
        ctx,
        rng,
        clock,
        notices,
    } = scope;
    let clock = *clock;

    match effect {
        Effect::Adjust(adjustment) => {
            spend(state, &adjustment.spend);
            gain(state, &adjustment.gain);
            if let Some(line) = &adjustment.diary {
                state.push_diary(clock, line);
            }
        }
        Effect::UseToilet => {
            state.needs.set(Need::Bladder, 0);
            state.push_diary(clock, "Used the bunker toilet.");
        }
        Effect::Eat | Effect::Drink => {
            if state.needs.get(Need::Resources) <= 0 {
                notices.warn("No Resources.");
                return EffectOutcome::rejected();
            }
            spend(state, &[(Need::Resources, 1)]);
            if *effect == Effect::Eat {
                state.needs.set(Need::Food, 10);
                gain(state, &[(Need::Bladder, 1)]);
                state.push_diary(clock, "Ate. Food -> 10.");
            } else {
                state.needs.set(Need::Water, 10);
                gain(state, &[(Need::Bladder, 2)]);
                state.push_diary(clock, "Drank. Water -> 10.");
            }
        }
        Effect::Sleep => {
            state.day = state.day.saturating_add(1);
            state.needs.set(Need::Energy, 10);
            let sanity = (state.needs.get(Need::Sanity) + 1).clamp(-1, 10);
            state.needs.set(Need::Sanity, sanity);
            let line = format!("Slept. Day {}.", state.day);
            state.push_diary(clock, &line);
            if let Some(milestone) = evaluate_after_sleep(state, &mut **rng, clock) {
                if let Ok(scene) = milestone.scene_id().parse() {
                    return EffectOutcome::redirect(scene);
                }
            }
        }
        Effect::Forage(spot) => {
            spend(state, spot.cost());
            let multiplier = if roll_luck(state, &mut **rng) { 3 } else { 1 };
            let (need, base) = spot.yield_of();
            let amount = base * multiplier;
            gain(state, &[(need, amount)]);
            state.push_diary(clock, &spot.diary(amount));
        }
        Effect::InvestigateSignal => {
            let ready = state.events.e2
                && state.needs.get(Need::Clues) >= 7
                && state.needs.get(Need::Maps) >= 1;
            if !ready {
                notices.warn("You need Clues ≥ 7 and at least 1 Map (found in the hospital).");
                return EffectOutcome::rejected();
            }
            state.events.hospital = true;
            info!(day = state.day, "followed the strange signal");
            return EffectOutcome::redirect(SceneId::Hospital);
        }
        Effect::Visit(name) => {
            ctx.visiting = Some(name.clone());
        }
        Effect::SearchEmpty(name) => {
            if rng.chance(search_empty_chance(state)) {
                gain(state, &[(Need::Clues, 1)]);
                state.push_diary(clock, &format!("Found a clue in {name}'s bunker."));
                notices.info("Clue found.");
            } else {
                notices.info("Nothing useful.");
            }
        }
        Effect::Help(name) => {
            if state.needs.get(Need::Resources) < 2 {
                notices.warn("Not enough Resources.");
                return EffectOutcome::rejected();
            }
            spend(state, &[(Need::Resources, 2)]);
            adjust_trust(state, name, 8);
            state.push_diary(clock, &format!("Helped {name}. Trust +8."));
        }
        Effect::SearchOccupied(name) => {
            if rng.chance(search_occupied_chance(state)) {
                let bonus = if roll_luck(state, &mut **rng) { 2 } else { 1 };
                gain(state, &[(Need::Clues, bonus)]);
                state.push_diary(clock, &format!("Found {bonus} clue(s) in {name}'s bunker."));
                notices.info(format!("Clue +{bonus}"));
            } else {
                notices.info("You find nothing useful.");
            }
        }
        Effect::Steal(name) => {
            if rng.chance(steal_chance(state)) {
                let loot = if roll_luck(state, &mut **rng) { 6 } else { 3 };
                gain(state, &[(Need::Resources, loot)]);
                adjust_trust(state, name, -10);
                state.push_diary(
                    clock,
                    &format!("Stole from {name}. Resources +{loot}. Trust -10."),
                );
                notices.info("Stole successfully. Trust -10.");
            } else {
                adjust_trust(state, name, -18);
                spend(state, &[(Need::Sanity, 1)]);
                state.push_diary(clock, &format!("Tried to steal from {name}. Caught. Trust -18."));
                notices.warn("Caught stealing. Trust -18.");
            }
        }
        Effect::GatherParty => {
            ctx.party = Some(Party::for_trust(state.trust()));
        }
        Effect::EnterFinalDoor => {
            if state.needs.get(Need::Keycard) != 1 {
                notices.warn("Need keycard.");
                return EffectOutcome::rejected();
            }
        }
        Effect::TakeKeycard => {
            state.needs.set(Need::Keycard, 1);
            state.push_diary(clock, "Found a keycard.");
        }
        Effect::EndVillain => {
            let line = format!("You ended {}.", state.profile.villain);
            state.push_diary(clock, &line);
        }
        Effect::FinishStory => {
            state.flags.finished = true;
        }
        Effect::CheatGotoFinale => {
            let needs = &mut state.needs;
            needs.trust = needs.trust.max(110);
            needs.resources = needs.resources.max(80);
            needs.clues = needs.clues.max(20);
            needs.keycard = 1;
            needs.maps = needs.maps.max(2);
            ctx.party = Some(Party::Everyone);
            state.events.e1 = true;
            state.events.e2 = true;
            state.events.hospital = true;
            state.push_diary(clock, "CHEAT used: goto finale (killroom unlocked)");
            return EffectOutcome::redirect(SceneId::Killroom);
        }
        Effect::CheatHappyBirthday => {
            state.flags.finished = true;
            state.push_diary(clock, "CHEAT used: happy birthday");
            return EffectOutcome::redirect(SceneId::Finale);
        }
    }
    EffectOutcome::default()
}
