//! Domain model for the World State context.

pub mod needs;
pub mod notice;
pub mod roster;
pub mod state;
pub mod stats;
