//! The crossroads, the regions and the gathering spots.

use wakeup_world_state::{Need, PlayerState, Region};

use super::bg;
use crate::domain::context::TurnContext;
use crate::domain::descriptor::{Choice, DialogueLine, SceneDescriptor};
use crate::domain::effect::{Adjustment, Effect, Forage};
use crate::domain::scene_id::SceneId;

fn region(s: &PlayerState, region: Region) -> SceneDescriptor {
    let letter = region.letter();
    let members = region.members();
    let mut choices: Vec<Choice> = members
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let sub = if s.is_missing(name) {
                "Missing"
            } else {
                "Visit bunker"
            };
            Choice::to(format!("{letter}{} • {name}", i + 1), sub, SceneId::BunkerVisit)
                .with_effect(Effect::Visit((*name).to_owned()))
        })
        .collect();
    choices.push(Choice::to("Back to crossroads", "", SceneId::World));

    SceneDescriptor::new(
        format!("Region {letter}"),
        format!(
            "Concrete paths divide the world into Regions.\n\
             You follow the path into Region {letter}.\n\
             The air changes — like a room holding its breath."
        ),
        bg::BUNKER_CORRIDOR,
    )
    .meta(format!("Bunkers {letter}1–{letter}{}", members.len()))
    .dialogue(vec![DialogueLine::system(format!(
        "You are in Region {letter}."
    ))])
    .choices(choices)
}

pub(crate) fn region_a(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    region(s, Region::A)
}

pub(crate) fn region_b(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    region(s, Region::B)
}

pub(crate) fn region_c(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    region(s, Region::C)
}

pub(crate) fn region_d(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    region(s, Region::D)
}

pub(crate) fn world(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    let mut choices: Vec<Choice> = Region::ALL
        .iter()
        .map(|r| {
            Choice::to(
                format!("Go to Region {r}"),
                format!("Bunkers {r}1…"),
                SceneId::Region(*r),
            )
        })
        .collect();
    choices.extend([
        Choice::to("Lake (fish)", "+Food", SceneId::Lake),
        Choice::to("Spring (water)", "+Water", SceneId::Spring),
        Choice::to("Scrapyard (resources)", "+Resources", SceneId::Scrapyard),
        Choice::to("Calm yourself", "+2 Sanity (cost 1 Energy)", SceneId::World).with_effect(
            Effect::Adjust(Adjustment::spend(&[(Need::Energy, 1)]).and_gain(&[(Need::Sanity, 2)])),
        ),
        Choice::to(
            "Investigate the strange signal",
            "Requires Clues ≥ 7 and Map ≥ 1",
            SceneId::World,
        )
        .with_effect(Effect::InvestigateSignal),
        Choice::to("Familiar doors", "Bunkers you know", SceneId::PickBunker),
        Choice::to("Back to your bunker", "", SceneId::Bunker),
    ]);

    SceneDescriptor::new(
        "Outside / Regions",
        "Concrete paths divide into Regions A, B, C…\n\
         Bunker doors are labeled like A1, A2, A3…\n\n\
         You can gather:\n\
         • Food at the lake\n\
         • Water at the spring\n\
         • Resources at the scrapyard",
        bg::BUNKER_CORRIDOR,
    )
    .meta(format!(
        "Day {} • Trust {} • Missing {}/5",
        s.day,
        s.trust(),
        s.missing.len()
    ))
    .choices(choices)
}

pub(crate) fn lake(_s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "The Lake",
        "Cold water. Still surface. Something watches from below.",
        bg::LAKE,
    )
    .meta("Fog • Still water")
    .choices(vec![
        Choice::to("Fish", "+Food (cost Energy+Water)", SceneId::World)
            .with_effect(Effect::Forage(Forage::Lake)),
        Choice::to("Back", "", SceneId::World),
    ])
}

pub(crate) fn spring(_s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "The Spring",
        "A thin stream, impossibly clean. Your hands shake as you drink.",
        bg::SPRING,
    )
    .meta("Thin stream • Night air")
    .choices(vec![
        Choice::to("Collect water", "+Water (cost Energy)", SceneId::World)
            .with_effect(Effect::Forage(Forage::Spring)),
        Choice::to("Back", "", SceneId::World),
    ])
}

pub(crate) fn scrapyard(_s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "Scrapyard",
        "Twisted metal and broken doors. The smell of rust and old screams.",
        bg::SCRAPYARD,
    )
    .meta("Rust • Broken doors")
    .choices(vec![
        Choice::to("Gather", "+Resources (cost Energy+Food+Water)", SceneId::World)
            .with_effect(Effect::Forage(Forage::Scrapyard)),
        Choice::to("Back", "", SceneId::World),
    ])
}
