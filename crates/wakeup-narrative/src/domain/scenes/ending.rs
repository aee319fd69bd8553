//! Waking up for real.

use wakeup_world_state::PlayerState;

use super::bg;
use crate::domain::context::TurnContext;
use crate::domain::descriptor::{Choice, DialogueLine, EnterHook, SceneDescriptor};
use crate::domain::effect::Effect;
use crate::domain::scene_id::SceneId;

/// The job that gets the unhappy meme at work.
const CURSED_JOB: &str = "Digipay QA";

pub(crate) fn tehran(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "Tehran twist",
        "The door opens.\n\n\
         Tehran.\n\
         Near your house.\n\n\
         You go inside.\n\n\
         Then you turn back…",
        bg::TEHRAN,
    )
    .dialogue(vec![
        DialogueLine::system("A red glow spreads. The sky turns red."),
        DialogueLine::left(&s.profile.buddy, "You need to wake up…"),
    ])
    .choices(vec![Choice::to("Wake up", "", SceneId::Morning)])
}

pub(crate) fn morning(_s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "Morning",
        "You wake up in your real bed. Morning. No bunker.",
        bg::HOUSE,
    )
    .choices(vec![Choice::to("Go to work", "", SceneId::Work)])
}

pub(crate) fn work(s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    let meme = if s.profile.job == CURSED_JOB {
        "assets/ui/meme_awshit.svg"
    } else {
        "assets/ui/meme_happyjob.svg"
    };
    SceneDescriptor::new(
        "Work",
        "You go to work. You try not to think about the nightmare.",
        bg::OFFICE,
    )
    .meta(format!("Job: {}", s.profile.job))
    .media(meme)
    .choices(vec![
        Choice::to("Finish", "", SceneId::Finale).with_effect(Effect::FinishStory),
    ])
}

pub(crate) fn finale(_s: &PlayerState, _ctx: &TurnContext) -> SceneDescriptor {
    SceneDescriptor::new(
        "Happy Birthday",
        "🎉 HAPPY BIRTHDAY, ALI! 🎉\n\n\
         From your friends — you woke up.\n\n\
         And from the part of you that still remains in the abyss…",
        bg::BIRTHDAY,
    )
    .media("assets/ui/happy.svg")
    .choices(vec![Choice::to("Replay", "Start again", SceneId::Drive)])
    .on_enter(EnterHook::Finale)
}
