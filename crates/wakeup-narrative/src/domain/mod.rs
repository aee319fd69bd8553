//! Domain model for the Narrative context.

pub mod context;
pub mod descriptor;
pub mod effect;
pub mod flavor;
pub mod hooks;
pub mod scene_id;
pub mod scenes;
