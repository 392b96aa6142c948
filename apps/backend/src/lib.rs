pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::answer::AnswerService;
use crate::services::sessions::SessionStore;
use crate::services::speech::SpeechService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub speech: Arc<SpeechService>,
    pub answerer: Arc<AnswerService>,
}

/// Build the API router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/sessions", post(routes::session::create))
        .route("/api/sessions/{id}", get(routes::session::get))
        .route("/api/sessions/{id}/next", post(routes::session::next))
        .route("/api/sessions/{id}/previous", post(routes::session::previous))
        .route("/api/sessions/{id}/restart", post(routes::session::restart))
        .route("/api/sessions/{id}/attempt", post(routes::attempt::submit))
        .route(
            "/api/sessions/{id}/attempt-audio",
            post(routes::attempt::submit_audio),
        )
        .route(
            "/api/sessions/{id}/reference-audio",
            get(routes::attempt::reference_audio),
        )
        .route("/api/sessions/{id}/settings", get(routes::settings::get))
        .route("/api/sessions/{id}/settings", put(routes::settings::update))
        .route("/api/sessions/{id}/question", post(routes::question::ask))
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

    tracing::info!("Initializing speech services...");
    let speech = SpeechService::new()?;

    tracing::info!("Initializing answer service...");
    let answerer = AnswerService::new()?;

    let state = AppState {
        sessions: Arc::new(SessionStore::new()),
        speech: Arc::new(speech),
        answerer: Arc::new(answerer),
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
