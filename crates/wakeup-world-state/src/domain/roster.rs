//! The fixed cast of characters and the regions their bunkers sit in.

use std::fmt;
use std::str::FromStr;

use super::state::Profile;

/// Every character, in roster order. Villain and buddy are picked from here.
pub const CHARACTERS: [&str; 23] = [
    "Dr.Mansoor Rezghi",
    "Hossein Choubin",
    "Mahdi Amiri",
    "Maryam Pakseresht",
    "Amir Mohammad Kharazi",
    "Hesam Farhang",
    "Hossein Eyvazi",
    "Mohammad Badzohreh",
    "Amir Adabi",
    "Ali Khangoli",
    "Hanieh Esmaeli",
    "Alireza",
    "Mohammad Hossein Soltani",
    "Mahdi",
    "Erfaneh",
    "Reza Dehghani",
    "Faranak",
    "Mojtaba",
    "Usain",
    "M,arshall Mathers",
    "Rana Aszizzadeh",
    "Erfan",
    "Sepandar",
];

/// Buddy used when a profile names the villain as buddy.
pub const DEFAULT_BUDDY: &str = "Hossein Choubin";

/// Whether `name` is on the roster.
#[must_use]
pub fn is_character(name: &str) -> bool {
    CHARACTERS.contains(&name)
}

/// One of the four areas whose bunkers partition the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Region A.
    A,
    /// Region B.
    B,
    /// Region C.
    C,
    /// Region D.
    D,
}

impl Region {
    /// All regions, in map order.
    pub const ALL: [Region; 4] = [Region::A, Region::B, Region::C, Region::D];

    /// The region's letter, used in bunker labels ("A1", "B3").
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Region::A => 'A',
            Region::B => 'B',
            Region::C => 'C',
            Region::D => 'D',
        }
    }

    /// Characters whose bunkers are in this region, in door order.
    #[must_use]
    pub fn members(self) -> &'static [&'static str] {
        match self {
            Region::A => &[
                "Dr.Mansoor Rezghi",
                "Hossein Choubin",
                "Mahdi Amiri",
                "Maryam Pakseresht",
                "Amir Mohammad Kharazi",
                "Hesam Farhang",
            ],
            Region::B => &[
                "Hossein Eyvazi",
                "Mohammad Badzohreh",
                "Amir Adabi",
                "Ali Khangoli",
                "Hanieh Esmaeli",
                "Alireza",
            ],
            Region::C => &[
                "Mohammad Hossein Soltani",
                "Mahdi",
                "Erfaneh",
                "Reza Dehghani",
                "Faranak",
                "Mojtaba",
            ],
            Region::D => &[
                "Usain",
                "M,arshall Mathers",
                "Rana Aszizzadeh",
                "Erfan",
                "Sepandar",
            ],
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Region::A),
            "B" => Ok(Region::B),
            "C" => Ok(Region::C),
            "D" => Ok(Region::D),
            other => Err(format!("unknown region: {other}")),
        }
    }
}

/// Repairs a profile whose buddy is also the villain. Returns `true` when
/// the buddy was changed.
///
/// The default buddy is substituted; if the villain *is* the default buddy,
/// the first roster entry that differs from the villain is used instead.
pub fn enforce_buddy_not_villain(profile: &mut Profile) -> bool {
    if profile.buddy != profile.villain {
        return false;
    }
    let replacement = if profile.villain == DEFAULT_BUDDY {
        CHARACTERS
            .iter()
            .find(|name| **name != profile.villain)
            .copied()
            .unwrap_or(DEFAULT_BUDDY)
    } else {
        DEFAULT_BUDDY
    };
    profile.buddy = replacement.to_owned();
    true
}
