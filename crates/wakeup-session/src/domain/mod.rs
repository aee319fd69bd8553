//! Session inputs and read models.

pub mod commands;
pub mod view;
