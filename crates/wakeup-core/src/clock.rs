//! Wall-clock port used for diary timestamps and playback throttling.

use chrono::{DateTime, Utc};

/// Source of the current time. Injected so diary entries and the autoplay
/// retry throttle are deterministic under test.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds elapsed between `earlier` and now. Negative spans (a clock
    /// that went backwards) are reported as zero.
    fn millis_since(&self, earlier: DateTime<Utc>) -> u64 {
        let delta = self.now().signed_duration_since(earlier).num_milliseconds();
        u64::try_from(delta).unwrap_or(0)
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
