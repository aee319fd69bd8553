//! Domain layer for the Audio context.

pub mod cue;
pub mod error;
pub mod tracks;
