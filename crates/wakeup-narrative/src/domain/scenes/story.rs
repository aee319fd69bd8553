//! Milestone scenes: the first disappearance and the red light.

use wakeup_world_state::{Need, PlayerState};

use super::bg;
use crate::domain::context::TurnContext;
use crate::domain::descriptor::{Choice, DialogueLine, SceneDescriptor};
use crate::domain::effect::{Adjustment, Effect};
use crate::domain::scene_id::SceneId;

pub(crate) fn event1(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    let p = &s.profile;
    SceneDescriptor::new(
        "Event 1",
        "Next day…\n\n\
         One of the characters is gone.\n\
         They say: \"They went to heaven.\"",
        bg::SECRET_RED,
    )
    .meta(format!("Day {}", s.day))
    .dialogue(vec![
        DialogueLine::system(format!("Missing: {}", s.missing.join(", "))),
        DialogueLine::left(&p.buddy, "Ali… this isn't heaven."),
        DialogueLine::right(&p.name, "Then what is it?"),
    ])
    .choices(vec![
        Choice::to("Investigate disappearance", "+1 Clue", SceneId::VillainMeet).with_effect(
            Effect::Adjust(
                Adjustment::gain(&[(Need::Clues, 1)]).logged("Found a letter: 'Nothing is real…'"),
            ),
        ),
        Choice::to("Back to bunker", "", SceneId::Bunker),
    ])
}

pub(crate) fn villain_meet(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    let p = &s.profile;
    SceneDescriptor::new(
        "Villain confrontation",
        format!("You spot {}. Calm. Comfortable.", p.villain),
        bg::FINAL_DOOR,
    )
    .dialogue(vec![
        DialogueLine::left(&p.villain, "You finally started asking the right questions."),
        DialogueLine::right(&p.name, "What did you do?"),
        DialogueLine::left(&p.villain, "I opened a door."),
    ])
    .choices(vec![
        Choice::to("Fight", "Cost Energy & Sanity (+1 Clue)", SceneId::World).with_effect(
            Effect::Adjust(
                Adjustment::spend(&[(Need::Energy, 2), (Need::Sanity, 2)])
                    .and_gain(&[(Need::Clues, 1)])
                    .logged("You fought. You felt watched."),
            ),
        ),
        Choice::to("Retreat", "", SceneId::World),
    ])
}

pub(crate) fn event2(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "Event 2 — Red light",
        "A red light blooms in the sky.\n\nThen everyone faints.",
        bg::SECRET_RED,
    )
    .meta(format!("Day {}", s.day))
    .dialogue(vec![DialogueLine::system("You lose time.")])
    .choices(vec![
        Choice::to("Wake up", "5 people are missing now…", SceneId::AfterRed)
            .with_effect(Effect::Adjust(Adjustment::spend(&[(Need::Sanity, 1)]))),
    ])
}

pub(crate) fn after_red(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "After the red light",
        "You wake in your bunker.\n\n\
         Your best friend is missing.\n\
         The villain is missing.\n\
         Two more are missing.\n\n\
         The air outside is sharper.",
        bg::BUNKER_CORRIDOR,
    )
    .meta(format!("Missing {}/5", s.missing.len()))
    .choices(vec![
        Choice::to("Go outside", "Search for signs", SceneId::World),
        Choice::to("Back", "", SceneId::Bunker),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_one_names_who_went_missing() {
        let mut state = PlayerState::default();
        state.add_missing("Usain");
        state.day = 4;

        let scene = event1(&state, &TurnContext::default());

        assert_eq!(scene.meta, "Day 4");
        assert_eq!(scene.dialogue[0].text(), "Missing: Usain");
    }

    #[test]
    fn test_fighting_the_villain_trades_stats_for_a_clue() {
        let scene = villain_meet(&PlayerState::default(), &TurnContext::default());

        let Some(Effect::Adjust(adjustment)) = &scene.choice("Fight").unwrap().effect else {
            panic!("fight should adjust stats");
        };
        assert_eq!(adjustment.spend, vec![(Need::Energy, 2), (Need::Sanity, 2)]);
        assert_eq!(adjustment.gain, vec![(Need::Clues, 1)]);
    }

    #[test]
    fn test_after_red_counts_the_missing() {
        let mut state = PlayerState::default();
        for name in ["Erfan", "Mahdi", "Usain"] {
            state.add_missing(name);
        }

        let scene = after_red(&state, &TurnContext::default());

        assert_eq!(scene.meta, "Missing 3/5");
    }
}
