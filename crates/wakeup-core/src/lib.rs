//! Wake Up Core — shared ports and error types.
//!
//! This crate defines the seams every bounded context depends on: time,
//! randomness, snapshot persistence and media playback. It contains no game
//! rules and no infrastructure code.

pub mod clock;
pub mod error;
pub mod playback;
pub mod repository;
pub mod rng;
