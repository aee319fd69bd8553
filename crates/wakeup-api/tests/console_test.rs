//! Integration tests for the debug console route.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_help_lists_the_commands() {
    let app = common::build_test_app().await;

    let (status, json) =
        common::post_json(app, "/api/v1/console", &json!({ "command": "help" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["lines"][0], "Commands:");
    assert_eq!(json["lines"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_goto_finale_lands_in_the_killroom() {
    let app = common::build_test_app_at("bunker").await;

    let (status, json) =
        common::post_json(app, "/api/v1/console", &json!({ "command": "GOTO FINALE" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["view"]["scene_id"], "killroom");
}

#[tokio::test]
async fn test_happy_birthday_finishes_the_story() {
    let app = common::build_test_app_at("bunker").await;

    let (_, json) = common::post_json(
        app.clone(),
        "/api/v1/console",
        &json!({ "command": "cheat happy birthday" }),
    )
    .await;
    let (_, audio) = common::get_json(app, "/api/v1/audio/status").await;

    assert_eq!(json["view"]["scene_id"], "finale");
    assert_eq!(json["view"]["finished"], true);
    assert_eq!(audio["mode"], "happy");
}

#[tokio::test]
async fn test_unknown_command_suggests_help() {
    let app = common::build_test_app().await;

    let (status, json) =
        common::post_json(app, "/api/v1/console", &json!({ "command": "fly" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["lines"], json!(["Unknown command. Try: help"]));
}
