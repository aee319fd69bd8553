//! The game controller: owns the player state and runs one turn at a time.
//!
//! Every path that changes the state goes through the same pipeline:
//! effect, clamp, vitals checks, transition, enter hook, save.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use wakeup_audio::{AudioCoordinator, AudioCue};
use wakeup_core::clock::Clock;
use wakeup_core::error::DomainError;
use wakeup_core::repository::SnapshotRepository;
use wakeup_core::rng::DeterministicRng;
use wakeup_narrative::{
    Effect, EffectScope, ResolvedScene, SceneGraph, SceneId, TurnContext, apply_effect,
    run_enter_hook,
};
use wakeup_rules::{Collapse, run_vitals};
use wakeup_world_state::application::snapshot::{restore_player_state, save_player_state};
use wakeup_world_state::{CHARACTERS, Notices, PlayerState, clamp_all};

use crate::domain::commands::{ConsoleCommand, SettingsChange, SetupProfile};
use crate::domain::view::{CollapseReport, ConsoleReply, GameView, TurnReport};

const HELP: [&str; 6] = [
    "Commands:",
    "- help",
    "- status",
    "- reset",
    "- happy birthday",
    "- goto finale",
];

/// Result of running an effect through the pipeline.
struct Settled {
    rejected: bool,
    collapse: Option<Collapse>,
}

/// Orchestrates turns, setup, settings and the debug console.
pub struct GameController {
    state: PlayerState,
    ctx: TurnContext,
    notices: Notices,
    graph: SceneGraph,
    save_key: String,
    repo: Arc<dyn SnapshotRepository>,
    audio: Arc<AudioCoordinator>,
    clock: Arc<dyn Clock>,
    rng: Box<dyn DeterministicRng>,
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("save_key", &self.save_key)
            .field("scene_id", &self.state.scene_id)
            .field("day", &self.state.day)
            .finish_non_exhaustive()
    }
}

impl GameController {
    /// Loads the saved game (or starts a fresh one), repairs it and sets the
    /// audio volumes. A returning player gets a best-effort ambient start.
    pub async fn boot(
        save_key: impl Into<String>,
        repo: Arc<dyn SnapshotRepository>,
        audio: Arc<AudioCoordinator>,
        clock: Arc<dyn Clock>,
        rng: Box<dyn DeterministicRng>,
    ) -> Self {
        let save_key = save_key.into();
        let state = restore_player_state(repo.as_ref(), &save_key).await;
        info!(save_key = %save_key, scene = %state.scene_id, day = state.day, "game booted");

        let controller = Self {
            state,
            ctx: TurnContext::default(),
            notices: Notices::new(),
            graph: SceneGraph::standard(),
            save_key,
            repo,
            audio,
            clock,
            rng,
        };
        let cue = controller.cue();
        controller.audio.set_volumes(&cue);
        if controller.state.flags.intro_done {
            controller.audio.kick_ambient_if_needed(&cue, false).await;
        }
        controller
    }

    /// The current player state.
    #[must_use]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Renders the current scene without running any hook.
    #[must_use]
    pub fn view(&self) -> GameView {
        let resolved = self.graph.resolve(&self.state.scene_id, &self.state, &self.ctx);
        GameView::new(&self.state, resolved)
    }

    /// The diary as display text.
    #[must_use]
    pub fn diary_text(&self) -> String {
        self.state.diary_text()
    }

    /// Takes choice `index` of the current scene.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SceneNotFound` if the current scene id is not in
    /// the catalogue, `DomainError::ChoiceOutOfRange` for an index past the
    /// last choice and `DomainError::ChoiceDisabled` for a greyed-out one.
    #[instrument(skip(self), fields(scene = %self.state.scene_id))]
    pub async fn choose(&mut self, index: usize) -> Result<TurnReport, DomainError> {
        let (_, descriptor) = self
            .graph
            .resolve(&self.state.scene_id, &self.state, &self.ctx)
            .into_result()?;
        let available = descriptor.choices.len();
        let choice = descriptor.choices.into_iter().nth(index).ok_or_else(|| {
            DomainError::ChoiceOutOfRange {
                scene: self.state.scene_id.clone(),
                index,
                available,
            }
        })?;
        if !choice.enabled {
            return Err(DomainError::ChoiceDisabled {
                scene: self.state.scene_id.clone(),
                label: choice.label,
            });
        }

        let turn_id = Uuid::new_v4();
        let from_scene = self.state.scene_id.clone();

        if let Err(err) = self.audio.play_sfx(&self.cue(), &choice.sfx).await {
            debug!(error = %err, "sound effect skipped");
        }
        self.kick_ambient();

        let settled = self.settle(choice.effect.as_ref(), choice.next).await;
        info!(
            %turn_id,
            choice = %choice.label,
            from = %from_scene,
            to = %self.state.scene_id,
            rejected = settled.rejected,
            "turn taken"
        );
        Ok(self.report(turn_id, from_scene, &settled))
    }

    /// Completes the setup dialog: stores the profile, marks the intro done
    /// and restarts the story.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SetupAlreadyDone` if setup was already completed
    /// and `DomainError::UnknownCharacter` if the villain or buddy is not in
    /// the roster.
    pub async fn setup(&mut self, setup: SetupProfile) -> Result<GameView, DomainError> {
        if self.state.flags.intro_done {
            return Err(DomainError::SetupAlreadyDone);
        }
        let profile = setup.into_profile(&self.state.profile);
        for who in [&profile.villain, &profile.buddy] {
            if !CHARACTERS.contains(&who.as_str()) {
                return Err(DomainError::UnknownCharacter(who.clone()));
            }
        }

        let line = format!(
            "Profile saved. Buddy={}, Villain={}, Job={}.",
            profile.buddy, profile.villain, profile.job
        );
        self.state.profile = profile;
        self.state.flags.intro_done = true;
        SceneId::Drive.as_str().clone_into(&mut self.state.scene_id);
        self.ctx = TurnContext::default();
        self.state.push_diary(self.clock.as_ref(), &line);
        info!(buddy = %self.state.profile.buddy, villain = %self.state.profile.villain, "setup completed");

        self.audio.set_volumes(&self.cue());
        self.kick_ambient();
        self.persist().await;
        Ok(self.view())
    }

    /// Applies a settings change: volumes take effect at once, music on
    /// (re)starts the ambient and music off pauses it.
    pub async fn update_settings(&mut self, change: SettingsChange) -> GameView {
        change.apply(&mut self.state.settings);
        let cue = self.cue();
        self.audio.apply_settings(&cue).await;
        self.persist().await;
        self.view()
    }

    /// Host hook for any raw user gesture. The returned task resolves to
    /// whether the ambient is playing afterwards; it needs no access to the
    /// controller, so callers can await it after letting go of the game.
    #[must_use]
    pub fn gesture(&self) -> JoinHandle<bool> {
        self.kick_ambient()
    }

    /// Host hook: the ambient track ended.
    pub async fn ambient_track_ended(&self) {
        if let Err(err) = self.audio.on_ambient_ended(&self.cue()).await {
            debug!(error = %err, "next ambient track did not start");
        }
    }

    /// Runs one debug console line.
    pub async fn console(&mut self, raw: &str) -> ConsoleReply {
        let command = ConsoleCommand::parse(raw);
        debug!(?command, "console command");
        let lines = match command {
            ConsoleCommand::Empty => Vec::new(),
            ConsoleCommand::Help => HELP.iter().map(|l| (*l).to_owned()).collect(),
            ConsoleCommand::Status => self.status_lines(),
            ConsoleCommand::Reset => {
                self.reset().await;
                vec!["Game reset.".to_owned()]
            }
            ConsoleCommand::GotoFinale => {
                self.settle(Some(&Effect::CheatGotoFinale), None).await;
                vec!["Jumped to the final confrontation.".to_owned()]
            }
            ConsoleCommand::HappyBirthday => {
                self.settle(Some(&Effect::CheatHappyBirthday), None).await;
                vec!["Happy birthday!".to_owned()]
            }
            ConsoleCommand::Unknown(_) => vec!["Unknown command. Try: help".to_owned()],
        };
        self.notices.drain();
        ConsoleReply {
            lines,
            view: self.view(),
        }
    }

    /// Deletes the save and starts over with a default state and silent
    /// audio.
    pub async fn reset(&mut self) {
        if let Err(err) = self.repo.delete(&self.save_key).await {
            warn!(save_key = %self.save_key, error = %err, "could not delete snapshot");
        }
        self.state = PlayerState::default();
        self.ctx = TurnContext::default();
        self.notices = Notices::new();
        self.audio.reset().await;
        self.audio.set_volumes(&self.cue());
        info!(save_key = %self.save_key, "game reset");
    }

    /// Effect, clamp, vitals, transition, enter hook, save.
    async fn settle(&mut self, effect: Option<&Effect>, next: Option<SceneId>) -> Settled {
        let mut redirect = None;
        if let Some(effect) = effect {
            let mut scope = EffectScope {
                state: &mut self.state,
                ctx: &mut self.ctx,
                rng: self.rng.as_mut(),
                clock: self.clock.as_ref(),
                notices: &mut self.notices,
            };
            let outcome = apply_effect(effect, &mut scope);
            if outcome.rejected {
                return Settled {
                    rejected: true,
                    collapse: None,
                };
            }
            redirect = outcome.redirect;
        }

        clamp_all(&mut self.state);
        let collapse = run_vitals(&mut self.state, self.clock.as_ref(), &mut self.notices);

        if collapse.is_none() {
            if let Some(target) = redirect.or(next) {
                target.as_str().clone_into(&mut self.state.scene_id);
            }
        }

        self.enter_current_scene().await;
        self.persist().await;
        Settled {
            rejected: false,
            collapse,
        }
    }

    async fn enter_current_scene(&mut self) {
        let ResolvedScene::Scene { descriptor, .. } =
            self.graph
                .resolve(&self.state.scene_id, &self.state, &self.ctx)
        else {
            return;
        };
        let Some(hook) = descriptor.on_enter else {
            return;
        };
        let outcome = run_enter_hook(
            &hook,
            &mut self.state,
            self.clock.as_ref(),
            &mut self.notices,
        );
        clamp_all(&mut self.state);
        if outcome.restart_soundtrack {
            if let Err(err) = self.audio.ensure_ambient(&self.cue(), true).await {
                debug!(error = %err, "soundtrack switch failed");
            }
        }
    }

    /// Starts the ambient in the background so a slow or silent host never
    /// holds up the turn.
    fn kick_ambient(&self) -> JoinHandle<bool> {
        let audio = Arc::clone(&self.audio);
        let cue = self.cue();
        tokio::spawn(async move { audio.kick_ambient_if_needed(&cue, false).await })
    }

    async fn persist(&self) {
        if let Err(err) = save_player_state(self.repo.as_ref(), &self.save_key, &self.state).await
        {
            warn!(save_key = %self.save_key, error = %err, "save failed; continuing");
        }
    }

    fn report(&mut self, turn_id: Uuid, from_scene: String, settled: &Settled) -> TurnReport {
        TurnReport {
            turn_id,
            from_scene,
            to_scene: self.state.scene_id.clone(),
            rejected: settled.rejected,
            collapse: settled.collapse.as_ref().map(CollapseReport::from),
            notices: self.notices.drain(),
            view: self.view(),
        }
    }

    fn status_lines(&self) -> Vec<String> {
        let s = &self.state;
        let needs = serde_json::to_string(&s.needs).unwrap_or_default();
        vec![
            format!("scene={}", s.scene_id),
            format!("finished={}", s.flags.finished),
            format!("buddy={}", s.profile.buddy),
            format!("villain={}", s.profile.villain),
            format!("job={}", s.profile.job),
            format!("needs={needs}"),
        ]
    }

    fn cue(&self) -> AudioCue {
        AudioCue::from_state(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use tokio::time::timeout;
    use wakeup_audio::AudioConfig;
    use wakeup_core::playback::MediaChannel;
    use wakeup_test_support::{
        FailingSnapshotRepository, FixedClock, Mixer, MockRng, RecordingSnapshotRepository,
        ScriptedChannel, UnluckyRng,
    };
    use wakeup_world_state::{Need, NoticeLevel};

    use super::*;

    const KEY: &str = "ali_wake_up_state_v3";

    struct Rig {
        repo: Arc<RecordingSnapshotRepository>,
        mixer: Arc<Mixer>,
        ambient: Arc<ScriptedChannel>,
        game: GameController,
    }

    async fn rig_with(
        repo: Arc<RecordingSnapshotRepository>,
        rng: Box<dyn DeterministicRng>,
    ) -> Rig {
        let mixer = Mixer::new();
        let ambient = ScriptedChannel::new("ambient", &mixer);
        let sfx = ScriptedChannel::new("sfx", &mixer);
        let clock: Arc<dyn Clock> =
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 4, 2, 9, 30, 0).unwrap()));
        let audio = Arc::new(AudioCoordinator::new(
            Arc::clone(&ambient) as Arc<dyn MediaChannel>,
            sfx as Arc<dyn MediaChannel>,
            Arc::clone(&clock),
            AudioConfig::default(),
        ));
        let game = GameController::boot(
            KEY,
            Arc::clone(&repo) as Arc<dyn SnapshotRepository>,
            audio,
            clock,
            rng,
        )
        .await;
        Rig {
            repo,
            mixer,
            ambient,
            game,
        }
    }

    async fn rig() -> Rig {
        rig_with(Arc::new(RecordingSnapshotRepository::new()), Box::new(MockRng)).await
    }

    async fn rig_at(scene: &str, adjust: impl FnOnce(&mut serde_json::Value)) -> Rig {
        rig_at_with(scene, Box::new(MockRng), adjust).await
    }

    async fn rig_at_with(
        scene: &str,
        rng: Box<dyn DeterministicRng>,
        adjust: impl FnOnce(&mut serde_json::Value),
    ) -> Rig {
        let mut snapshot = serde_json::to_value(PlayerState {
            scene_id: scene.to_owned(),
            ..PlayerState::default()
        })
        .unwrap();
        snapshot["flags"]["introDone"] = json!(true);
        adjust(&mut snapshot);
        let repo = Arc::new(RecordingSnapshotRepository::with_snapshot(KEY, snapshot));
        rig_with(repo, rng).await
    }

    fn index_of(game: &GameController, label: &str) -> usize {
        game.view()
            .scene
            .choices
            .iter()
            .position(|c| c.label == label)
            .unwrap()
    }

    #[tokio::test]
    async fn test_fresh_boot_starts_at_the_drive_and_needs_setup() {
        // Arrange / Act
        let rig = rig().await;

        // Assert
        let view = rig.game.view();
        assert_eq!(view.scene_id, "drive");
        assert!(view.setup_required);
        assert!(!view.missing_scene);
        assert!(rig.ambient.plays().is_empty());
    }

    #[tokio::test]
    async fn test_returning_player_gets_the_ambient_started_on_boot() {
        let rig = rig_at("bunker", |_| {}).await;

        assert_eq!(rig.ambient.plays().len(), 1);
    }

    #[tokio::test]
    async fn test_boot_repairs_a_save_whose_buddy_is_the_villain() {
        let rig = rig_at("bunker", |s| {
            s["profile"]["buddy"] = json!("Erfan");
            s["profile"]["villain"] = json!("Erfan");
        })
        .await;

        assert_eq!(rig.game.state().profile.buddy, "Hossein Choubin");
    }

    #[tokio::test]
    async fn test_choice_applies_effect_moves_on_and_saves() {
        // Arrange
        let mut rig = rig().await;
        let index = index_of(&rig.game, "Pull over (2 minutes)");

        // Act
        let report = rig.game.choose(index).await.unwrap();

        // Assert
        assert_eq!(report.from_scene, "drive");
        assert_eq!(report.to_scene, "sky");
        assert_eq!(rig.game.state().needs.get(Need::Energy), 6);
        let saved = rig.repo.stored(KEY).unwrap();
        assert_eq!(saved["sceneId"], "sky");
    }

    #[tokio::test]
    async fn test_sound_effect_never_overlaps_the_ambient() {
        let mut rig = rig_at("drive", |_| {}).await;

        rig.game.choose(0).await.unwrap();

        assert!(!rig.mixer.overlapped());
        let events = rig.mixer.events();
        assert!(events.contains(&"sfx:play:assets/sfx/rain.wav".to_owned()));
        assert_eq!(events.last().unwrap(), "ambient:resume");
    }

    #[tokio::test]
    async fn test_turns_do_not_wait_for_a_hung_ambient_start() {
        // Arrange
        let mut rig = rig().await;
        rig.ambient.set_hanging(true);

        // Act
        let mut scenes = Vec::new();
        for _ in 0..3 {
            let report = timeout(Duration::from_millis(500), rig.game.choose(0))
                .await
                .expect("turn waited on the ambient")
                .unwrap();
            scenes.push(report.to_scene);
            tokio::task::yield_now().await;
        }

        // Assert
        assert_eq!(scenes, ["sky", "bunker_wake", "bunker"]);
        assert!(rig.ambient.plays().is_empty());
        let hangs = rig
            .mixer
            .events()
            .iter()
            .filter(|e| e.starts_with("ambient:hang:"))
            .count();
        assert_eq!(hangs, 1);
    }

    #[tokio::test]
    async fn test_gesture_starts_the_ambient_in_the_background() {
        let rig = rig().await;

        let playing = rig.game.gesture().await.unwrap();

        assert!(playing);
        assert_eq!(rig.ambient.plays().len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_effect_keeps_the_player_in_place() {
        let mut rig = rig_at("bunker", |_| {}).await;
        let before = rig.game.state().clone();

        let report = rig.game.choose(index_of(&rig.game, "Eat")).await.unwrap();

        assert!(report.rejected);
        assert_eq!(report.to_scene, "bunker");
        assert_eq!(rig.game.state(), &before);
        assert_eq!(report.notices[0].message, "No Resources.");
        assert_eq!(report.notices[0].level, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn test_final_door_without_keycard_leaves_a_way_back() {
        // Arrange
        let mut rig = rig_at("final_door", |_| {}).await;

        // Act
        let refused = rig.game.choose(index_of(&rig.game, "Enter")).await.unwrap();
        let back = rig.game.choose(index_of(&rig.game, "Back")).await.unwrap();

        // Assert
        assert!(refused.rejected);
        assert_eq!(refused.to_scene, "final_door");
        assert_eq!(refused.notices[0].message, "Need keycard.");
        assert!(!back.rejected);
        assert_eq!(back.to_scene, "world");
    }

    #[tokio::test]
    async fn test_disabled_choice_is_refused() {
        let mut rig = rig_at("bunker", |s| {
            s["missing"] = json!(["Hossein Choubin"]);
        })
        .await;

        let err = rig
            .game
            .choose(index_of(&rig.game, "Talk to Hossein Choubin"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::ChoiceDisabled { scene, label }
                if scene == "bunker" && label == "Talk to Hossein Choubin"
        ));
    }

    #[tokio::test]
    async fn test_out_of_range_choice_names_how_many_there_are() {
        let mut rig = rig().await;

        let err = rig.game.choose(99).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::ChoiceOutOfRange { index: 99, available: 2, .. }
        ));
    }

    #[tokio::test]
    async fn test_collapse_overrides_the_choice_target() {
        // Arrange: going outside spends the last food.
        let mut rig = rig_at("bunker", |s| {
            s["needs"]["Food"] = json!(0);
        })
        .await;

        // Act
        let report = rig
            .game
            .choose(index_of(&rig.game, "Go outside"))
            .await
            .unwrap();

        // Assert
        assert_eq!(report.to_scene, "bunker");
        let collapse = report.collapse.unwrap();
        assert_eq!(collapse.need, "Food");
        assert_eq!(collapse.day, 2);
        assert_eq!(rig.game.state().needs.get(Need::Food), 1);
    }

    #[tokio::test]
    async fn test_sleeping_at_the_thresholds_fires_event_one() {
        let mut rig = rig_at("bunker", |s| {
            s["needs"]["Clues"] = json!(3);
            s["needs"]["Resources"] = json!(30);
        })
        .await;

        let report = rig.game.choose(index_of(&rig.game, "Sleep")).await.unwrap();

        assert_eq!(report.to_scene, "event1");
        assert!(rig.game.state().events.e1);
        assert_eq!(rig.game.state().missing.len(), 1);
        assert_eq!(rig.game.state().day, 2);
    }

    #[tokio::test]
    async fn test_talking_to_the_buddy_grants_the_daily_clue_on_arrival() {
        let mut rig = rig_at("bunker", |_| {}).await;
        let talk = index_of(&rig.game, "Talk to Hossein Choubin");

        rig.game.choose(talk).await.unwrap();
        let clues_after_first = rig.game.state().needs.get(Need::Clues);
        rig.game.choose(0).await.unwrap();
        rig.game.choose(talk).await.unwrap();

        assert_eq!(clues_after_first, 1);
        assert_eq!(rig.game.state().needs.get(Need::Clues), 1);
    }

    #[tokio::test]
    async fn test_visit_context_carries_into_the_bunker_scene() {
        let mut rig = rig_at("region_D", |_| {}).await;

        rig.game.choose(index_of(&rig.game, "D4 • Erfan")).await.unwrap();

        let view = rig.game.view();
        assert_eq!(view.scene.title, "Bunker: Erfan");
    }

    #[tokio::test]
    async fn test_unlucky_steal_is_caught() {
        let mut rig = rig_at_with("region_D", Box::new(UnluckyRng), |_| {}).await;
        rig.game.choose(index_of(&rig.game, "D4 • Erfan")).await.unwrap();

        let report = rig.game.choose(index_of(&rig.game, "Steal")).await.unwrap();

        assert_eq!(report.to_scene, "world");
        assert_eq!(rig.game.state().trust_with("Erfan"), -18);
    }

    #[tokio::test]
    async fn test_missing_scene_is_shown_as_a_diagnostic() {
        let mut rig = rig_at("attic", |_| {}).await;

        let view = rig.game.view();
        let err = rig.game.choose(0).await.unwrap_err();

        assert!(view.missing_scene);
        assert_eq!(view.scene.text, "Scene not found: attic");
        assert!(matches!(err, DomainError::SceneNotFound(raw) if raw == "attic"));
    }

    #[tokio::test]
    async fn test_console_can_recover_from_a_missing_scene() {
        let mut rig = rig_at("attic", |_| {}).await;

        let reply = rig.game.console("happy birthday").await;

        assert_eq!(reply.view.scene_id, "finale");
        assert!(!reply.view.missing_scene);
    }

    #[tokio::test]
    async fn test_setup_stores_the_profile_once() {
        // Arrange
        let mut rig = rig().await;
        let setup = SetupProfile {
            name: "Sara".into(),
            age: Some(31),
            job: "Digipay QA".into(),
            villain: "Erfan".into(),
            buddy: "Mahdi".into(),
        };

        // Act
        let view = rig.game.setup(setup.clone()).await.unwrap();
        let again = rig.game.setup(setup).await;
        tokio::task::yield_now().await;

        // Assert
        assert!(!view.setup_required);
        assert_eq!(rig.game.state().profile.name, "Sara");
        assert!(rig.game.diary_text().contains("Buddy=Mahdi, Villain=Erfan, Job=Digipay QA."));
        assert!(matches!(again, Err(DomainError::SetupAlreadyDone)));
        assert_eq!(rig.ambient.plays().len(), 1);
    }

    #[tokio::test]
    async fn test_setup_rejects_unknown_characters() {
        let mut rig = rig().await;
        let setup = SetupProfile {
            villain: "Nobody".into(),
            ..SetupProfile::default()
        };

        let result = rig.game.setup(setup).await;

        assert!(matches!(result, Err(DomainError::UnknownCharacter(who)) if who == "Nobody"));
        assert!(!rig.game.state().flags.intro_done);
    }

    #[tokio::test]
    async fn test_turning_music_off_pauses_the_ambient_and_saves() {
        let mut rig = rig_at("bunker", |_| {}).await;

        let view = rig
            .game
            .update_settings(SettingsChange {
                music_on: Some(false),
                ..SettingsChange::default()
            })
            .await;

        assert!(!view.settings.music_on);
        assert!(!rig.ambient.is_playing());
        assert_eq!(rig.repo.stored(KEY).unwrap()["settings"]["musicOn"], false);
    }

    #[tokio::test]
    async fn test_console_help_lists_the_commands() {
        let mut rig = rig().await;

        let reply = rig.game.console("help").await;

        assert_eq!(reply.lines.len(), 6);
        assert_eq!(reply.lines[0], "Commands:");
    }

    #[tokio::test]
    async fn test_console_status_reports_the_cast() {
        let mut rig = rig().await;

        let reply = rig.game.console("STATUS").await;

        assert_eq!(reply.lines[0], "scene=drive");
        assert_eq!(reply.lines[2], "buddy=Hossein Choubin");
        assert!(reply.lines[5].starts_with("needs={"));
    }

    #[tokio::test]
    async fn test_goto_finale_unlocks_the_killroom_and_saves() {
        let mut rig = rig_at("bunker", |_| {}).await;

        let reply = rig.game.console("goto finale").await;

        assert_eq!(reply.view.scene_id, "killroom");
        assert_eq!(reply.view.scene.meta, "With every survivor");
        assert_eq!(rig.game.state().needs.get(Need::Keycard), 1);
        assert_eq!(rig.repo.stored(KEY).unwrap()["sceneId"], "killroom");
    }

    #[tokio::test]
    async fn test_happy_birthday_switches_to_the_happy_track() {
        let mut rig = rig_at("bunker", |_| {}).await;

        rig.game.console("cheat happy birthday").await;

        let happy = AudioConfig::default().happy.sources[0].clone();
        assert_eq!(rig.ambient.plays().last(), Some(&happy));
        assert!(rig.ambient.is_looping());
        assert!(rig.game.diary_text().contains("CHEAT used: happy birthday"));
    }

    #[tokio::test]
    async fn test_story_runs_from_the_killroom_to_the_finale() {
        let mut rig = rig_at("bunker", |_| {}).await;
        rig.game.console("goto finale").await;

        for expected in ["tehran", "morning", "work", "finale"] {
            let report = rig.game.choose(0).await.unwrap();
            assert_eq!(report.to_scene, expected);
        }

        assert!(rig.game.state().flags.finished);
        assert!(rig.game.diary_text().contains("You ended Dr.Mansoor Rezghi."));
    }

    #[tokio::test]
    async fn test_unknown_console_command_suggests_help() {
        let mut rig = rig().await;

        let reply = rig.game.console("fly").await;

        assert_eq!(reply.lines, vec!["Unknown command. Try: help"]);
    }

    #[tokio::test]
    async fn test_reset_deletes_the_save_and_starts_over() {
        let mut rig = rig_at("world", |s| {
            s["day"] = json!(9);
        })
        .await;

        rig.game.console("reset").await;

        assert_eq!(rig.repo.deleted_keys(), vec![KEY.to_owned()]);
        assert_eq!(rig.game.state(), &PlayerState::default());
        assert!(!rig.ambient.is_playing());
    }

    #[tokio::test]
    async fn test_save_failure_does_not_abort_the_turn() {
        let mixer = Mixer::new();
        let clock: Arc<dyn Clock> =
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 4, 2, 9, 30, 0).unwrap()));
        let audio = Arc::new(AudioCoordinator::new(
            ScriptedChannel::new("ambient", &mixer) as Arc<dyn MediaChannel>,
            ScriptedChannel::new("sfx", &mixer) as Arc<dyn MediaChannel>,
            Arc::clone(&clock),
            AudioConfig::default(),
        ));
        let mut game = GameController::boot(
            KEY,
            Arc::new(FailingSnapshotRepository),
            audio,
            clock,
            Box::new(MockRng),
        )
        .await;

        let report = game.choose(0).await.unwrap();

        assert_eq!(report.to_scene, "sky");
    }
}
