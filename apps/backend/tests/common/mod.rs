//! Common test utilities and fixtures for integration tests.
//!
//! Collaborator endpoints (speech-to-text, text-to-speech, the language
//! model) are configured with placeholder URLs here; constructing the
//! clients never connects. Tests that actually call a collaborator are
//! `#[ignore]`d and need live services behind those URLs.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use uuid::Uuid;

use readalong_backend::services::answer::AnswerService;
use readalong_backend::services::sessions::SessionStore;
use readalong_backend::services::speech::SpeechService;
use readalong_backend::{router, AppState};

/// Test context wrapping a fully wired router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    pub fn new() -> Self {
        std::env::set_var("STT_URL", "http://localhost:9464/transcribe");
        std::env::set_var("TTS_URL", "http://localhost:9464/synthesize");
        std::env::set_var("LLM_URL", "http://localhost:11434");

        let speech = SpeechService::new().expect("speech service config");
        let answerer = AnswerService::new().expect("answer service config");

        let state = AppState {
            sessions: Arc::new(SessionStore::new()),
            speech: Arc::new(speech),
            answerer: Arc::new(answerer),
        };

        Self { app: router(state) }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// Create a session over the API and return its id.
pub async fn create_session(server: &TestServer, text: &str) -> Uuid {
    let response = server
        .post("/api/sessions")
        .json(&fixtures::create_session_request(text))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    Uuid::parse_str(body["session_id"].as_str().expect("session_id"))
        .expect("session_id is a uuid")
}
