//! Ali, Wake Up — Session bounded context.
//!
//! The game controller ties the other contexts together: it loads and saves
//! the player state, runs every choice and console cheat through one turn
//! pipeline and drives the audio coordinator around it.

pub mod application;
pub mod domain;

pub use application::controller::GameController;
pub use domain::commands::{ConsoleCommand, SettingsChange, SetupProfile};
pub use domain::view::{CollapseReport, ConsoleReply, GameView, TurnReport};
