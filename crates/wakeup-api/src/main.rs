//! Ali, Wake Up API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use wakeup_api::config::AppConfig;
use wakeup_api::error::AppError;
use wakeup_api::{assemble_state, build_router};
use wakeup_core::repository::SnapshotRepository;
use wakeup_snapshot_store::{InMemorySnapshotRepository, PgSnapshotRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Ali, Wake Up API server");

    let config = AppConfig::from_env()?;

    // Pick the snapshot backend.
    let (repo, persistence): (Arc<dyn SnapshotRepository>, &'static str) =
        match &config.database_url {
            Some(url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(5)
                    .connect(url)
                    .await
                    .map_err(AppError::from)?;
                let repo = PgSnapshotRepository::new(pool);
                repo.ensure_schema().await.map_err(AppError::from)?;
                (Arc::new(repo), "postgres")
            }
            None => {
                tracing::warn!("DATABASE_URL not set; snapshots are kept in memory");
                (Arc::new(InMemorySnapshotRepository::new()), "memory")
            }
        };

    let app_state = assemble_state(&config, repo, persistence).await;

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server.
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!(%addr, save_key = %config.save_key, persistence, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
