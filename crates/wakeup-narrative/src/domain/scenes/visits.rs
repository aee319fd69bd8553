//! Other people's bunkers.

use wakeup_world_state::{CHARACTERS, PlayerState};

use super::bg;
use crate::domain::context::TurnContext;
use crate::domain::descriptor::{Choice, DialogueLine, EnterHook, SceneDescriptor};
use crate::domain::effect::Effect;
use crate::domain::flavor::talk_flavor;
use crate::domain::scene_id::SceneId;

const FAMILIAR_DOORS: usize = 12;

pub(crate) fn pick_bunker(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    let mut picks: Vec<&str> = Vec::with_capacity(FAMILIAR_DOORS);
    let candidates = [s.profile.buddy.as_str(), s.profile.villain.as_str()]
        .into_iter()
        .chain(CHARACTERS.iter().copied().filter(|name| !s.is_missing(name)));
    for name in candidates {
        if picks.len() == FAMILIAR_DOORS {
            break;
        }
        if !picks.contains(&name) {
            picks.push(name);
        }
    }

    let mut choices: Vec<Choice> = picks
        .into_iter()
        .map(|name| {
            let sub = if s.is_missing(name) {
                "Missing"
            } else {
                "Talk / help / steal"
            };
            Choice::to(format!("Bunker of {name}"), sub, SceneId::BunkerVisit)
                .with_effect(Effect::Visit(name.to_owned()))
        })
        .collect();
    choices.push(Choice::to("Back", "", SceneId::World));

    SceneDescriptor::new(
        "Choose a bunker",
        "Which bunker door do you approach?",
        bg::BUNKER_CORRIDOR,
    )
    .choices(choices)
}

pub(crate) fn bunker_visit(s: &PlayerState, ctx: &TurnContext) -> SceneDescriptor {
    let Some(host) = ctx.visiting.as_deref() else {
        return SceneDescriptor::new("Bunker", "The corridor is quiet.", bg::BUNKER_ROOM)
            .dialogue(vec![DialogueLine::system("No one answers.")])
            .choices(vec![Choice::to("Back", "", SceneId::World)]);
    };

    let scene = SceneDescriptor::new(format!("Bunker: {host}"), "", bg::BUNKER_ROOM)
        .meta(format!("Trust with them: {}", s.trust_with(host)));

    if s.is_missing(host) {
        return SceneDescriptor {
            text: "The door is open. Empty. Cold. Someone scratched a word inside: \"HEAVEN\"."
                .to_owned(),
            ..scene
        }
        .dialogue(vec![DialogueLine::system("No one answers.")])
        .choices(vec![
            Choice::to("Search quietly", "Chance to find a clue", SceneId::World)
                .with_effect(Effect::SearchEmpty(host.to_owned())),
            Choice::to("Back", "", SceneId::World),
        ]);
    }

    SceneDescriptor {
        text: "The door opens. A familiar face stares back.".to_owned(),
        ..scene
    }
    .dialogue(vec![
        DialogueLine::left(host, "You again… what do you want?"),
        DialogueLine::right(&s.profile.name, "Just trying to survive. Like you."),
    ])
    .choices(vec![
        Choice::to("Help them", "Give 2 Resources (+Trust)", SceneId::World)
            .with_effect(Effect::Help(host.to_owned())),
        Choice::to("Search the bunker", "Chance to find a clue", SceneId::World)
            .with_effect(Effect::SearchOccupied(host.to_owned())),
        Choice::to("Steal", "Risky (trust may drop)", SceneId::World)
            .with_effect(Effect::Steal(host.to_owned())),
        Choice::to("Talk", "Hear their story", SceneId::TalkAny),
        Choice::to("Back", "", SceneId::World),
    ])
}

pub(crate) fn talk_any(s: &PlayerState, ctx: &TurnContext) -> SceneDescriptor {
    let who = ctx.talk_partner(&s.profile.buddy);
    let flavor = talk_flavor(s, who);

    let scene = SceneDescriptor::new(
        "Talk",
        "Their eyes look tired. Their voice sounds… rehearsed.",
        bg::BUNKER_ROOM,
    )
    .dialogue(flavor.lines)
    .choices(vec![Choice::to("Back", "", SceneId::World)]);

    if flavor.whispered_clue {
        scene.on_enter(EnterHook::WhisperedClue {
            from: who.to_owned(),
        })
    } else {
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visiting(name: &str) -> TurnContext {
        TurnContext {
            visiting: Some(name.to_owned()),
            party: None,
        }
    }

    #[test]
    fn test_familiar_doors_start_with_buddy_and_villain() {
        // Arrange
        let state = PlayerState::default();

        // Act
        let scene = pick_bunker(&state, &TurnContext::default());

        // Assert
        assert_eq!(scene.choices.len(), FAMILIAR_DOORS + 1);
        assert_eq!(
            scene.choices[0].label,
            format!("Bunker of {}", state.profile.buddy)
        );
        assert_eq!(
            scene.choices[1].label,
            format!("Bunker of {}", state.profile.villain)
        );
        assert_eq!(scene.choices.last().unwrap().label, "Back");
    }

    #[test]
    fn test_familiar_doors_never_repeat_a_name() {
        let state = PlayerState::default();

        let scene = pick_bunker(&state, &TurnContext::default());

        let mut labels: Vec<&str> = scene.choices.iter().map(|c| c.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), scene.choices.len());
    }

    #[test]
    fn test_missing_buddy_still_gets_a_door_marked_missing() {
        let mut state = PlayerState::default();
        let buddy = state.profile.buddy.clone();
        state.add_missing(&buddy);

        let scene = pick_bunker(&state, &TurnContext::default());

        assert_eq!(scene.choices[0].sub, "Missing");
    }

    #[test]
    fn test_visit_to_a_present_host_offers_the_full_menu() {
        let state = PlayerState::default();

        let scene = bunker_visit(&state, &visiting("Erfan"));

        assert_eq!(scene.title, "Bunker: Erfan");
        assert_eq!(scene.meta, "Trust with them: 0");
        let labels: Vec<&str> = scene.choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Help them", "Search the bunker", "Steal", "Talk", "Back"]
        );
        assert_eq!(
            scene.choice("Steal").unwrap().effect,
            Some(Effect::Steal("Erfan".into()))
        );
    }

    #[test]
    fn test_visit_to_a_missing_host_finds_an_empty_bunker() {
        let mut state = PlayerState::default();
        state.add_missing("Erfan");

        let scene = bunker_visit(&state, &visiting("Erfan"));

        assert!(scene.text.contains("HEAVEN"));
        assert_eq!(
            scene.choices[0].effect,
            Some(Effect::SearchEmpty("Erfan".into()))
        );
        assert_eq!(scene.choices.len(), 2);
    }

    #[test]
    fn test_visit_without_a_host_only_offers_the_way_back() {
        let scene = bunker_visit(&PlayerState::default(), &TurnContext::default());

        assert_eq!(scene.choices.len(), 1);
        assert_eq!(scene.choices[0].next, Some(SceneId::World));
    }

    #[test]
    fn test_talk_falls_back_to_the_buddy() {
        let state = PlayerState::default();

        let scene = talk_any(&state, &TurnContext::default());

        let buddy = &state.profile.buddy;
        assert!(scene.dialogue.iter().any(|line| matches!(
            line,
            DialogueLine::Speech { speaker, .. } if speaker == buddy
        )));
    }

    #[test]
    fn test_talk_grants_the_whispered_clue_on_entry() {
        let mut state = PlayerState::default();
        state.needs.trust = 10_000;

        let scene = (1..200)
            .find_map(|day| {
                state.day = day;
                let scene = talk_any(&state, &visiting("Erfan"));
                scene.on_enter.is_some().then_some(scene)
            })
            .unwrap();

        assert_eq!(
            scene.on_enter,
            Some(EnterHook::WhisperedClue {
                from: "Erfan".into()
            })
        );
    }
}
