//! Domain rules.

pub mod milestones;
pub mod odds;
pub mod vitals;
