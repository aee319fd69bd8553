//! Read models handed back to the host after every operation.

use serde::Serialize;
use uuid::Uuid;
use wakeup_narrative::domain::descriptor::DEFAULT_BACKGROUND;
use wakeup_narrative::{ResolvedScene, SceneDescriptor};
use wakeup_rules::Collapse;
use wakeup_world_state::{NeedGauge, Notice, PlayerState, Settings};

/// Everything the host needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    /// The persisted scene id, even when it names no scene.
    pub scene_id: String,
    pub scene: SceneDescriptor,
    /// The scene id is not in the catalogue and `scene` is a diagnostic.
    pub missing_scene: bool,
    pub day: u32,
    pub needs: Vec<NeedGauge>,
    pub settings: Settings,
    /// The setup dialog has not been completed yet.
    pub setup_required: bool,
    pub finished: bool,
}

impl GameView {
    pub(crate) fn new(state: &PlayerState, resolved: ResolvedScene) -> Self {
        let (scene, missing_scene) = match resolved {
            ResolvedScene::Scene { descriptor, .. } => (descriptor, false),
            ResolvedScene::Missing(raw) => (missing_scene(&raw), true),
        };
        Self {
            scene_id: state.scene_id.clone(),
            scene,
            missing_scene,
            day: state.day,
            needs: state.needs.gauges(),
            settings: state.settings.clone(),
            setup_required: !state.flags.intro_done,
            finished: state.flags.finished,
        }
    }
}

fn missing_scene(raw: &str) -> SceneDescriptor {
    SceneDescriptor::new(
        "Missing scene",
        format!("Scene not found: {raw}"),
        DEFAULT_BACKGROUND,
    )
}

/// What a collapse did, for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollapseReport {
    pub need: String,
    pub day: u32,
}

impl From<&Collapse> for CollapseReport {
    fn from(collapse: &Collapse) -> Self {
        Self {
            need: collapse.need.name().to_owned(),
            day: collapse.day,
        }
    }
}

/// Outcome of one choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    /// Correlates the log lines of this turn.
    pub turn_id: Uuid,
    pub from_scene: String,
    pub to_scene: String,
    /// The choice's effect was refused; nothing changed.
    pub rejected: bool,
    pub collapse: Option<CollapseReport>,
    pub notices: Vec<Notice>,
    pub view: GameView,
}

/// Output of a console command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleReply {
    pub lines: Vec<String>,
    pub view: GameView,
}
