//! Ali, Wake Up — Audio bounded context.
//!
//! One coordinator owns the ambient and one-shot channels and guarantees
//! they are never audible together. Every failure here is recoverable: the
//! game carries on without sound.

pub mod application;
pub mod domain;

pub use application::coordinator::{AudioCoordinator, AudioStatus};
pub use domain::cue::AudioCue;
pub use domain::error::AudioError;
pub use domain::tracks::{AmbientMode, AudioConfig, Track};
