//! The abandoned hospital, the secret room and the final door.

use wakeup_world_state::{Need, PlayerState};

use super::bg;
use crate::domain::context::{Party, TurnContext};
use crate::domain::descriptor::{Choice, DialogueLine, SceneDescriptor};
use crate::domain::effect::{Adjustment, Effect};
use crate::domain::scene_id::SceneId;

pub(crate) fn hospital(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "Hospital transition",
        "While investigating a bunker…\n\n\
         BOOM.\n\n\
         You wake up in an abandoned hospital.\n\n\
         Your buddy is next to you.",
        bg::HOSPITAL_WARD,
    )
    .dialogue(vec![
        DialogueLine::left(&s.profile.buddy, "Ali… wake up. We have to escape."),
        DialogueLine::system("This place is a maze."),
    ])
    .choices(vec![Choice::to("Enter the maze", "Trust helps", SceneId::Maze)])
}

pub(crate) fn maze(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    let corridor = |label: &str| {
        Choice::to(label, "", SceneId::Maze2)
            .with_effect(Effect::Adjust(Adjustment::spend(&[(Need::Energy, 1)])))
    };
    let mut choices = Vec::with_capacity(4);
    if s.trust() >= Party::EVERYONE_TRUST {
        choices.push(
            Choice::to("Trust shortcut", "You finish it faster", SceneId::MazeKey)
                .with_effect(Effect::Adjust(Adjustment::gain(&[(Need::Sanity, 1)]))),
        );
    }
    choices.extend([
        corridor("Left corridor"),
        corridor("Right corridor"),
        corridor("Stairs"),
    ]);

    SceneDescriptor::new(
        "Hospital maze",
        "Every hallway feels the same.",
        bg::HOSPITAL_CORRIDOR,
    )
    .meta(format!("Trust {}", s.trust()))
    .choices(choices)
}

pub(crate) fn maze2(_s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new("Maze", "A map is taped to the wall.", bg::HOSPITAL_CORRIDOR).choices(
        vec![
            Choice::to("Take the map", "+1 Map", SceneId::MazeKey).with_effect(Effect::Adjust(
                Adjustment::gain(&[(Need::Maps, 1)]).logged("Found a map."),
            )),
            Choice::to("Ignore it", "", SceneId::MazeKey),
        ],
    )
}

pub(crate) fn maze_key(_s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "Keycard",
        "A keycard is waiting for you like a joke.",
        bg::HOSPITAL_WARD,
    )
    .choices(vec![
        Choice::to("Take keycard", "+Keycard", SceneId::SecretReveal)
            .with_effect(Effect::TakeKeycard),
    ])
}

pub(crate) fn secret_reveal(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "Secret location",
        format!(
            "The map shows a hidden place.\n\n\
             Inside…\n\n\
             {} and the missing people.\n\n\
             They're eating flesh.",
            s.profile.villain
        ),
        bg::SECRET_RED,
    )
    .dialogue(vec![DialogueLine::system(
        "This isn't in-between. This is hell.",
    )])
    .choices(vec![
        Choice::to("Run back", "Warn survivors", SceneId::Warn),
        Choice::to("Attack", "Risky", SceneId::Warn).with_effect(Effect::Adjust(
            Adjustment::spend(&[(Need::Energy, 2), (Need::Sanity, 1)]),
        )),
    ])
}

pub(crate) fn warn(_s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "Warn the survivors",
        "You tell them the truth.\n\n\
         They laugh.\n\
         They panic.\n\
         They argue.\n\n\
         Trust decides who follows.",
        bg::BUNKER_CORRIDOR,
    )
    .choices(vec![
        Choice::to(
            "Go to the secret door",
            "Trust ≥ 100 → everyone joins",
            SceneId::FinalDoor,
        )
        .with_effect(Effect::GatherParty),
    ])
}

pub(crate) fn final_door(_s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "Final door",
        "You swipe the keycard. The lock sighs after the third push.",
        bg::FINAL_DOOR,
    )
    .choices(vec![
        Choice::to("Enter", "", SceneId::Killroom).with_effect(Effect::EnterFinalDoor),
        Choice::to("Back", "Without a keycard it stays shut", SceneId::World),
    ])
}

pub(crate) fn killroom(s: &PlayerState, ctx: &TurnContext) -> SceneDescriptor {
    let scene = SceneDescriptor::new(
        "Finish it",
        format!(
            "You see {}.\n\
             No dice rolls. No luck.\n\
             Just one choice — and the door out.",
            s.profile.villain
        ),
        bg::FINAL_DOOR,
    )
    .choices(vec![
        Choice::to("Finish him", "One clean action.", SceneId::Tehran)
            .with_effect(Effect::EndVillain),
    ]);

    match ctx.party {
        Some(party) => scene.meta(format!("With {}", party.describe())),
        None => scene,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_offers_the_shortcut_only_with_high_trust() {
        // Arrange
        let mut state = PlayerState::default();
        let low = maze(&state, &TurnContext::default());
        state.needs.trust = 100;

        // Act
        let high = maze(&state, &TurnContext::default());

        // Assert
        assert_eq!(low.choices.len(), 3);
        assert_eq!(high.choices.len(), 4);
        assert_eq!(high.choices[0].label, "Trust shortcut");
        assert_eq!(high.choices[0].next, Some(SceneId::MazeKey));
    }

    #[test]
    fn test_every_maze_corridor_costs_energy_and_leads_to_the_map() {
        let scene = maze(&PlayerState::default(), &TurnContext::default());

        for choice in &scene.choices {
            assert_eq!(choice.next, Some(SceneId::Maze2));
            assert_eq!(
                choice.effect,
                Some(Effect::Adjust(Adjustment::spend(&[(Need::Energy, 1)])))
            );
        }
    }

    #[test]
    fn test_killroom_names_who_followed() {
        let ctx = TurnContext {
            visiting: None,
            party: Some(Party::Two),
        };

        let scene = killroom(&PlayerState::default(), &ctx);

        assert_eq!(scene.meta, "With two survivors");
        assert_eq!(scene.choices[0].effect, Some(Effect::EndVillain));
    }

    #[test]
    fn test_final_door_checks_the_keycard_and_offers_a_way_back() {
        let scene = final_door(&PlayerState::default(), &TurnContext::default());

        assert_eq!(scene.choices[0].effect, Some(Effect::EnterFinalDoor));
        assert_eq!(scene.choices[1].label, "Back");
        assert_eq!(scene.choices[1].next, Some(SceneId::World));
        assert!(scene.choices[1].enabled);
        assert_eq!(scene.choices[1].effect, None);
    }
}
