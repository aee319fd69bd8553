//! Route modules organized by concern.

pub mod audio;
pub mod console;
pub mod game;
pub mod health;
