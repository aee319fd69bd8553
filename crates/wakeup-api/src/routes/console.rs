//! Debug console route.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, instrument};
use wakeup_session::ConsoleReply;

use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct ConsoleRequest {
    /// The raw console line.
    pub command: String,
}

/// POST /
#[instrument(skip(state, request), fields(command = %request.command))]
async fn run_command(
    State(state): State<AppState>,
    Json(request): Json<ConsoleRequest>,
) -> Json<ConsoleReply> {
    let reply = state.game.lock().await.console(&request.command).await;
    info!(lines = reply.lines.len(), "console command handled");
    Json(reply)
}

/// Returns the router for the console.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(run_command))
}
