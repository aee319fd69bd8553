//! Ali, Wake Up — Rules bounded context.
//!
//! Game-balance odds, the luck roll, the post-action vitals checks (bladder
//! accidents and collapses) and the story milestones that fire after
//! sleeping.

pub mod domain;

pub use domain::milestones::{Milestone, evaluate_after_sleep};
pub use domain::odds::roll_luck;
pub use domain::vitals::{Collapse, check_bladder, check_collapse, run_vitals};
