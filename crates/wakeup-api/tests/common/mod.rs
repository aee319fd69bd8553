//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use wakeup_api::build_router;
use wakeup_api::state::AppState;
use wakeup_audio::{AudioConfig, AudioCoordinator};
use wakeup_core::clock::Clock;
use wakeup_core::playback::MediaChannel;
use wakeup_core::repository::SnapshotRepository;
use wakeup_session::GameController;
use wakeup_test_support::{FixedClock, Mixer, MockRng, RecordingSnapshotRepository, ScriptedChannel};

pub const SAVE_KEY: &str = "ali_wake_up_state_v3";

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// A fresh game (setup not done) on an empty recording repository.
pub async fn build_test_app() -> Router {
    build_test_app_with(Arc::new(RecordingSnapshotRepository::new())).await
}

/// A returning player standing in `scene` with the intro done.
pub async fn build_test_app_at(scene: &str) -> Router {
    let snapshot = json!({
        "sceneId": scene,
        "flags": { "introDone": true },
    });
    build_test_app_with(Arc::new(RecordingSnapshotRepository::with_snapshot(
        SAVE_KEY, snapshot,
    )))
    .await
}

/// Build the full app router over `repo` with scripted channels, a fixed
/// clock and an always-lucky RNG. Uses the same routes as `main.rs`.
pub async fn build_test_app_with(repo: Arc<dyn SnapshotRepository>) -> Router {
    let mixer = Mixer::new();
    let clock = fixed_clock();
    let audio = Arc::new(AudioCoordinator::new(
        ScriptedChannel::new("ambient", &mixer) as Arc<dyn MediaChannel>,
        ScriptedChannel::new("sfx", &mixer) as Arc<dyn MediaChannel>,
        Arc::clone(&clock),
        AudioConfig::default(),
    ));
    let game =
        GameController::boot(SAVE_KEY, repo, Arc::clone(&audio), clock, Box::new(MockRng)).await;
    build_router(AppState::new(game, audio, "memory"))
}

/// Send a request with an optional JSON body and return the response.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send_json(app, "POST", uri, Some(body)).await
}

/// Send a bodiless POST request and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send_json(app, "POST", uri, None).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send_json(app, "GET", uri, None).await
}
