//! Per-session context that scenes read but that is never saved.

use serde::Serialize;

/// Who followed the player to the final door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    /// Trust was high enough that every survivor came along.
    Everyone,
    /// Only two people believed the player.
    Two,
}

impl Party {
    /// Trust needed for everyone to follow.
    pub const EVERYONE_TRUST: i32 = 100;

    /// The party that forms at the given aggregate trust.
    #[must_use]
    pub fn for_trust(trust: i32) -> Self {
        if trust >= Self::EVERYONE_TRUST {
            Party::Everyone
        } else {
            Party::Two
        }
    }

    /// Short description used in scene text.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Party::Everyone => "every survivor",
            Party::Two => "two survivors",
        }
    }
}

/// Transient turn context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnContext {
    /// Whose bunker the player is visiting.
    pub visiting: Option<String>,
    /// Who followed the player from the warn scene.
    pub party: Option<Party>,
}

impl TurnContext {
    /// The person a conversation is with: the visited character, falling back
    /// to the buddy.
    #[must_use]
    pub fn talk_partner<'a>(&'a self, buddy: &'a str) -> &'a str {
        self.visiting.as_deref().unwrap_or(buddy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_forms_from_trust() {
        assert_eq!(Party::for_trust(99), Party::Two);
        assert_eq!(Party::for_trust(100), Party::Everyone);
    }

    #[test]
    fn test_talk_partner_falls_back_to_buddy() {
        let mut ctx = TurnContext::default();
        assert_eq!(ctx.talk_partner("Hossein Choubin"), "Hossein Choubin");

        ctx.visiting = Some("Erfan".into());
        assert_eq!(ctx.talk_partner("Hossein Choubin"), "Erfan");
    }
}
