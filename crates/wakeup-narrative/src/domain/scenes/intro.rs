//! From the car crash to the player's own bunker.

use wakeup_world_state::{Need, PlayerState};

use super::bg;
use crate::domain::context::TurnContext;
use crate::domain::descriptor::{Choice, DialogueLine, EnterHook, SceneDescriptor};
use crate::domain::effect::{Adjustment, Effect};
use crate::domain::scene_id::SceneId;

const RAIN: &str = "assets/sfx/rain.wav";
const CRASH: &str = "assets/sfx/crash.wav";

pub(crate) fn drive(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    let p = &s.profile;
    SceneDescriptor::new(
        "Highway / Rain",
        "You're driving. The road stretches into the dark.\n\
         A few drops hit the windshield… then more.\n\
         You haven't slept properly in days.\n\
         \n\
         Your eyes burn.",
        bg::DRIVE,
    )
    .meta(format!("Subject: {} • Age: {} • Job: {}", p.name, p.age, p.job))
    .dialogue(vec![
        DialogueLine::system("Rain starts."),
        DialogueLine::right(&p.name, "Just… ten more minutes. Then sleep."),
    ])
    .choices(vec![
        Choice::to("Keep driving", "You blink. Too long.", SceneId::Sky)
            .with_sfx(&[RAIN])
            .with_effect(Effect::Adjust(Adjustment::spend(&[
                (Need::Energy, 1),
                (Need::Sanity, 1),
            ]))),
        Choice::to("Pull over (2 minutes)", "+1 Energy", SceneId::Sky)
            .with_sfx(&[RAIN])
            .with_effect(Effect::Adjust(Adjustment::gain(&[(Need::Energy, 1)]))),
    ])
}

pub(crate) fn sky(_s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "The road glitches",
        "The road breaks.\n\nStars.\nSilence.\nYour car floats.\n\n\
         Then a loud crash —\nand everything turns white.",
        bg::SKY,
    )
    .dialogue(vec![DialogueLine::system("CRASH → everything white.")])
    .choices(vec![
        Choice::to("Ali… wake up…", "", SceneId::BunkerWake).with_sfx(&[CRASH]),
    ])
}

pub(crate) fn bunker_wake(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    let p = &s.profile;
    SceneDescriptor::new(
        "Bunker awakening",
        format!(
            "You wake up on cold concrete. Concrete walls. A dim lamp.\n\
             A familiar hum.\n\n{} is near you.",
            p.buddy
        ),
        bg::BUNKER_ROOM,
    )
    .meta(format!("Day {} • Buddy: {}", s.day, p.buddy))
    .dialogue(vec![
        DialogueLine::left(&p.buddy, "Ali… you're awake. Thank God."),
        DialogueLine::right(&p.name, "Did we crash?"),
        DialogueLine::left(&p.buddy, "We all 'died' some way… and woke up here."),
        DialogueLine::system("Your throat is dry. Your hands are shaking."),
        DialogueLine::left(
            &p.buddy,
            "If you panic, it feeds on you. Breathe. Count to four.",
        ),
        DialogueLine::right(&p.name, "…This can't be real."),
    ])
    .choices(vec![
        Choice::to("Stay calm. Ask for rules", "+1 Clue", SceneId::Bunker).with_effect(
            Effect::Adjust(Adjustment::gain(&[(Need::Clues, 1)]).logged(format!(
                "{}: 'Explore, trade, build trust. The sky changes before people disappear.'",
                p.buddy
            ))),
        ),
        Choice::to("Panic", "Sanity -1", SceneId::Bunker)
            .with_effect(Effect::Adjust(Adjustment::spend(&[(Need::Sanity, 1)]))),
    ])
}

pub(crate) fn bunker(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    let n = &s.needs;
    let buddy = &s.profile.buddy;
    let buddy_missing = s.is_missing(buddy);
    SceneDescriptor::new(
        "Your bunker",
        "Inside your bunker:\n\
         • Toilet (relieve yourself)\n\
         • Desk (food & water)\n\
         • Bed (sleep)\n\n\
         Outside: Regions A, B, C… and bunker doors labeled A1, A2, A3…",
        bg::BUNKER_ROOM,
    )
    .meta(format!(
        "Day {} • Trust {} • Clues {} • Resources {}",
        s.day, n.trust, n.clues, n.resources
    ))
    .choices(vec![
        Choice::to("Use toilet", "Bladder -> 0", SceneId::Bunker).with_effect(Effect::UseToilet),
        Choice::to("Eat", "Food -> 10 (cost 1 Resource)", SceneId::Bunker)
            .with_effect(Effect::Eat),
        Choice::to("Drink", "Water -> 10 (cost 1 Resource)", SceneId::Bunker)
            .with_effect(Effect::Drink),
        Choice::to("Sleep", "Energy -> 10 (advance day)", SceneId::Bunker)
            .with_effect(Effect::Sleep),
        Choice::to(
            format!("Talk to {buddy}"),
            if buddy_missing { "Missing" } else { "" },
            SceneId::TalkBuddy,
        )
        .enabled_if(!buddy_missing),
        Choice::to("Go outside", "Explore regions", SceneId::World).with_effect(Effect::Adjust(
            Adjustment::spend(&[(Need::Energy, 1), (Need::Food, 1), (Need::Water, 1)])
                .and_gain(&[(Need::Bladder, 1)]),
        )),
    ])
}

pub(crate) fn talk_buddy(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    let p = &s.profile;
    SceneDescriptor::new(
        format!("Talk to {}", p.buddy),
        "Your buddy lowers their voice.",
        bg::BUNKER_ROOM,
    )
    .dialogue(vec![
        DialogueLine::left(&p.buddy, "Help people. Gain trust. Or steal… and lose it."),
        DialogueLine::right(&p.name, "Trust helps us?"),
        DialogueLine::left(
            &p.buddy,
            "It triggers luck. It opens shortcuts. It keeps you alive.",
        ),
        DialogueLine::system("Higher Trust increases luck, clue-finds, and hospital shortcuts."),
        DialogueLine::left(
            &p.buddy,
            "If you need something, ask — don't steal. People remember.",
        ),
        DialogueLine::system("Trust opens shortcuts. Low trust makes the world colder."),
    ])
    .choices(vec![Choice::to("Back", "", SceneId::Bunker)])
    .on_enter(EnterHook::BuddyDailyClue)
}
