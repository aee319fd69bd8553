//! Application services for the Session context.

pub mod controller;
