//! Transient notices surfaced to the player after a turn.
//!
//! Notices are a side channel: they are never persisted and never affect
//! game state. The host shows them as toasts.

use serde::Serialize;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Plain feedback ("Clue found.").
    Info,
    /// A stat is close to a threshold, or an action was refused.
    Warning,
}

/// One message for the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Message text.
    pub message: String,
}

/// Ordered notices collected during one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Notices(Vec<Notice>);

impl Notices {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an informational notice.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message.into());
    }

    /// Records a warning notice.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Warning, message.into());
    }

    fn push(&mut self, level: NoticeLevel, message: String) {
        self.0.push(Notice { level, message });
    }

    /// Takes every notice out, leaving the collection empty.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.0)
    }

    /// Whether no notice was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded notices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the recorded notices in order.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.0.iter()
    }

    /// Whether any notice carries exactly `message`.
    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.0.iter().any(|notice| notice.message == message)
    }
}
