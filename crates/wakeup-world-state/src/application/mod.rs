//! Application services for the World State context.

pub mod snapshot;
