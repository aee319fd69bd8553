//! The scene catalogue.
//!
//! Every scene is a plain function from the player state and turn context to
//! a descriptor. Dynamic choice lists are rebuilt on every call.

mod ending;
mod hospital;
mod intro;
mod outside;
mod story;
mod visits;

use wakeup_world_state::{PlayerState, Region};

use super::context::TurnContext;
use super::descriptor::SceneDescriptor;
use super::scene_id::SceneId;

/// Signature shared by every scene.
pub type SceneFn = fn(&PlayerState, &TurnContext) -> SceneDescriptor;

pub(crate) mod bg {
    pub const DRIVE: &str = "assets/bg/drive_rain.png";
    pub const SKY: &str = "assets/bg/sky_glitch.png";
    pub const BUNKER_ROOM: &str = "assets/bg/bunker_room.png";
    pub const BUNKER_CORRIDOR: &str = "assets/bg/bunker_corridor.png";
    pub const LAKE: &str = "assets/bg/lake_fog.png";
    pub const SPRING: &str = "assets/bg/spring_night.png";
    pub const SCRAPYARD: &str = "assets/bg/scrapyard_rust.png";
    pub const SECRET_RED: &str = "assets/bg/secret_red.png";
    pub const FINAL_DOOR: &str = "assets/bg/final_door.png";
    pub const HOSPITAL_WARD: &str = "assets/bg/hospital_ward.png";
    pub const HOSPITAL_CORRIDOR: &str = "assets/bg/hospital_corridor.png";
    pub const TEHRAN: &str = "assets/bg/tehran_street.png";
    pub const HOUSE: &str = "assets/bg/house_inside.png";
    pub const OFFICE: &str = "assets/bg/work_office.png";
    pub const BIRTHDAY: &str = "assets/bg/finale_birthday.png";
}

/// Every scene and the function that renders it.
#[must_use]
pub fn catalogue() -> Vec<(SceneId, SceneFn)> {
    vec![
        (SceneId::Drive, intro::drive as SceneFn),
        (SceneId::Sky, intro::sky),
        (SceneId::BunkerWake, intro::bunker_wake),
        (SceneId::Bunker, intro::bunker),
        (SceneId::TalkBuddy, intro::talk_buddy),
        (SceneId::Region(Region::A), outside::region_a),
        (SceneId::Region(Region::B), outside::region_b),
        (SceneId::Region(Region::C), outside::region_c),
        (SceneId::Region(Region::D), outside::region_d),
        (SceneId::World, outside::world),
        (SceneId::Lake, outside::lake),
        (SceneId::Spring, outside::spring),
        (SceneId::Scrapyard, outside::scrapyard),
        (SceneId::PickBunker, visits::pick_bunker),
        (SceneId::BunkerVisit, visits::bunker_visit),
        (SceneId::TalkAny, visits::talk_any),
        (SceneId::Event1, story::event1),
        (SceneId::VillainMeet, story::villain_meet),
        (SceneId::Event2, story::event2),
        (SceneId::AfterRed, story::after_red),
        (SceneId::Hospital, hospital::hospital),
        (SceneId::Maze, hospital::maze),
        (SceneId::Maze2, hospital::maze2),
        (SceneId::MazeKey, hospital::maze_key),
        (SceneId::SecretReveal, hospital::secret_reveal),
        (SceneId::Warn, hospital::warn),
        (SceneId::FinalDoor, hospital::final_door),
        (SceneId::Killroom, hospital::killroom),
        (SceneId::Tehran, ending::tehran),
        (SceneId::Morning, ending::morning),
        (SceneId::Work, ending::work),
        (SceneId::Finale, ending::finale),
    ]
}
