//! Application services for the Narrative context.

pub mod graph;
