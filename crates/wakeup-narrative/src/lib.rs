//! Ali, Wake Up — Narrative bounded context.
//!
//! Scenes are pure functions of the player state and the current turn
//! context. Each produces a descriptor (text, dialogue, choices) whose
//! choices carry data-only effects; the effect interpreter in
//! [`domain::effect`] is the only code that mutates state on a choice.

pub mod application;
pub mod domain;

pub use application::graph::{ResolvedScene, SceneGraph};
pub use domain::context::{Party, TurnContext};
pub use domain::descriptor::{Choice, DialogueLine, EnterHook, SceneDescriptor, Side};
pub use domain::effect::{Adjustment, Effect, EffectOutcome, EffectScope, Forage, apply_effect};
pub use domain::hooks::{HookOutcome, run_enter_hook};
pub use domain::scene_id::SceneId;
