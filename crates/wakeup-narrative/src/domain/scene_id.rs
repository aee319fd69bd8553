//! Scene identifiers.
//!
//! The player state stores the current scene as a plain string so that old
//! saves survive catalogue changes; this enum is the parsed form.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use wakeup_world_state::Region;

/// Every scene in the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Drive,
    Sky,
    BunkerWake,
    Bunker,
    TalkBuddy,
    Region(Region),
    World,
    Lake,
    Spring,
    Scrapyard,
    PickBunker,
    BunkerVisit,
    TalkAny,
    Event1,
    VillainMeet,
    Event2,
    AfterRed,
    Hospital,
    Maze,
    Maze2,
    MazeKey,
    SecretReveal,
    Warn,
    FinalDoor,
    Killroom,
    Tehran,
    Morning,
    Work,
    Finale,
}

impl SceneId {
    /// Every scene, in story order.
    pub const ALL: [SceneId; 32] = [
        SceneId::Drive,
        SceneId::Sky,
        SceneId::BunkerWake,
        SceneId::Bunker,
        SceneId::TalkBuddy,
        SceneId::Region(Region::A),
        SceneId::Region(Region::B),
        SceneId::Region(Region::C),
        SceneId::Region(Region::D),
        SceneId::World,
        SceneId::Lake,
        SceneId::Spring,
        SceneId::Scrapyard,
        SceneId::PickBunker,
        SceneId::BunkerVisit,
        SceneId::TalkAny,
        SceneId::Event1,
        SceneId::VillainMeet,
        SceneId::Event2,
        SceneId::AfterRed,
        SceneId::Hospital,
        SceneId::Maze,
        SceneId::Maze2,
        SceneId::MazeKey,
        SceneId::SecretReveal,
        SceneId::Warn,
        SceneId::FinalDoor,
        SceneId::Killroom,
        SceneId::Tehran,
        SceneId::Morning,
        SceneId::Work,
        SceneId::Finale,
    ];

    /// The persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SceneId::Drive => "drive",
            SceneId::Sky => "sky",
            SceneId::BunkerWake => "bunker_wake",
            SceneId::Bunker => "bunker",
            SceneId::TalkBuddy => "talk_buddy",
            SceneId::Region(Region::A) => "region_A",
            SceneId::Region(Region::B) => "region_B",
            SceneId::Region(Region::C) => "region_C",
            SceneId::Region(Region::D) => "region_D",
            SceneId::World => "world",
            SceneId::Lake => "lake",
            SceneId::Spring => "spring",
            SceneId::Scrapyard => "scrapyard",
            SceneId::PickBunker => "pick_bunker",
            SceneId::BunkerVisit => "bunker_visit",
            SceneId::TalkAny => "talk_any",
            SceneId::Event1 => "event1",
            SceneId::VillainMeet => "villain_meet",
            SceneId::Event2 => "event2",
            SceneId::AfterRed => "after_red",
            SceneId::Hospital => "hospital",
            SceneId::Maze => "maze",
            SceneId::Maze2 => "maze2",
            SceneId::MazeKey => "maze_key",
            SceneId::SecretReveal => "secret_reveal",
            SceneId::Warn => "warn",
            SceneId::FinalDoor => "final_door",
            SceneId::Killroom => "killroom",
            SceneId::Tehran => "tehran",
            SceneId::Morning => "morning",
            SceneId::Work => "work",
            SceneId::Finale => "finale",
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown scene: {s}"))
    }
}

impl Serialize for SceneId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
