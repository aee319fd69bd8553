//! The scene graph: resolves the persisted scene id to a rendered scene.

use std::collections::HashMap;

use wakeup_core::error::DomainError;
use wakeup_world_state::PlayerState;

use crate::domain::context::TurnContext;
use crate::domain::descriptor::SceneDescriptor;
use crate::domain::scene_id::SceneId;
use crate::domain::scenes::{SceneFn, catalogue};

/// Outcome of resolving a scene id.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedScene {
    /// The id named a registered scene.
    Scene {
        id: SceneId,
        descriptor: SceneDescriptor,
    },
    /// The id is not in the catalogue. The caller shows a diagnostic view.
    Missing(String),
}

impl ResolvedScene {
    /// The rendered descriptor, if the scene exists.
    #[must_use]
    pub fn descriptor(&self) -> Option<&SceneDescriptor> {
        match self {
            ResolvedScene::Scene { descriptor, .. } => Some(descriptor),
            ResolvedScene::Missing(_) => None,
        }
    }

    /// Converts a missing scene into a `DomainError::SceneNotFound`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SceneNotFound` when the id was not registered.
    pub fn into_result(self) -> Result<(SceneId, SceneDescriptor), DomainError> {
        match self {
            ResolvedScene::Scene { id, descriptor } => Ok((id, descriptor)),
            ResolvedScene::Missing(raw) => Err(DomainError::SceneNotFound(raw)),
        }
    }
}

/// Registry of scene generators keyed by id.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    scenes: HashMap<SceneId, SceneFn>,
}

impl SceneGraph {
    /// The full story.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            scenes: catalogue().into_iter().collect(),
        }
    }

    /// Number of registered scenes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether no scene is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Whether `id` has a generator.
    #[must_use]
    pub fn contains(&self, id: SceneId) -> bool {
        self.scenes.contains_key(&id)
    }

    /// Renders the scene named by `raw` for the given state and context.
    #[must_use]
    pub fn resolve(&self, raw: &str, state: &PlayerState, ctx: &TurnContext) -> ResolvedScene {
        let Ok(id) = raw.parse::<SceneId>() else {
            return ResolvedScene::Missing(raw.to_owned());
        };
        match self.scenes.get(&id) {
            Some(render) => ResolvedScene::Scene {
                id,
                descriptor: render(state, ctx),
            },
            None => ResolvedScene::Missing(raw.to_owned()),
        }
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::standard()
    }
}
