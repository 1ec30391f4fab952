//! HTTP surface for the Korean review hub.
//!
//! Stands in for the browser games: it loads the content manifest and tier
//! data from disk, keeps per-student history/progress blobs on disk, and
//! exposes the core's session/review/stats/drill operations as JSON
//! endpoints. All interaction is serialized per student by the clients;
//! the server itself is stateless between requests.

pub mod content;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use review_core::SrsEngine;

use crate::content::ContentLibrary;
use crate::store::FileStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<ContentLibrary>,
    pub engine: Arc<SrsEngine<FileStore>>,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/students", get(routes::students::list))
        .route("/api/session", get(routes::session::session))
        .route("/api/quiz", get(routes::drills::quiz))
        .route("/api/sentences", get(routes::drills::sentences))
        .route("/api/conjugation", get(routes::drills::conjugation))
        .route("/api/review", post(routes::review::submit))
        .route("/api/stats", get(routes::stats::stats))
        .route(
            "/api/progress",
            get(routes::progress::load).post(routes::progress::save),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let content_dir = std::env::var("CONTENT_DIR").unwrap_or_else(|_| "data".into());
    let state_dir = std::env::var("STATE_DIR").unwrap_or_else(|_| "state".into());

    tracing::info!("Loading content from {content_dir}...");
    let library = ContentLibrary::load(Path::new(&content_dir))?;
    tracing::info!(
        "Loaded {} students across {} tiers",
        library.students().len(),
        library.tier_count()
    );

    let store = FileStore::new(PathBuf::from(&state_dir))?;

    let state = AppState {
        library: Arc::new(library),
        engine: Arc::new(SrsEngine::new(store)),
    };

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
