//! Ali, Wake Up — World State bounded context.
//!
//! Owns the persisted `PlayerState` aggregate: profile, settings, needs,
//! diary, missing characters and story flags, together with the pure stat
//! functions that adjust and clamp it and the snapshot codec used by the
//! persistence adapter.

pub mod application;
pub mod domain;

pub use domain::needs::{Need, NeedGauge, Needs};
pub use domain::notice::{Notice, NoticeLevel, Notices};
pub use domain::roster::{CHARACTERS, DEFAULT_BUDDY, Region};
pub use domain::state::{EVERYONE, Flags, PlayerState, Profile, Settings, StoryEvents};
pub use domain::stats::{adjust_trust, clamp_all, gain, spend};
