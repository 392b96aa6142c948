//! Session API tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

#[tokio::test]
async fn test_create_session_returns_first_line() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/sessions")
        .json(&fixtures::create_session_request(fixtures::sample_story()))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["line_count"].as_u64().unwrap(), 3);
    assert_eq!(body["finished"].as_bool().unwrap(), false);
    assert_eq!(body["current_line"]["index"].as_u64().unwrap(), 0);
    assert_eq!(
        body["current_line"]["text"].as_str().unwrap(),
        "The quick brown fox jumps over the lazy dog"
    );
    assert_eq!(body["settings"]["similarity_threshold"].as_f64().unwrap(), 0.8);
    assert_eq!(body["settings"]["aligner"].as_str().unwrap(), "greedy");
}

#[tokio::test]
async fn test_create_session_rejects_blank_document() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/sessions")
        .json(&fixtures::create_session_request("  \n\n   \n"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "invalid_input");
}

#[tokio::test]
async fn test_create_session_rejects_invalid_settings() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let settings = serde_json::json!({
        "aligner": "greedy",
        "similarity_threshold": 1.5,
        "excellent_cutoff": 90.0,
        "good_cutoff": 70.0,
    });
    let response = server
        .post("/api/sessions")
        .json(&fixtures::create_session_request_with_settings(
            fixtures::sample_story(),
            settings,
        ))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_session_is_not_found() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .get("/api/sessions/00000000-0000-0000-0000-000000000000")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_navigation_walks_the_document() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let id = common::create_session(&server, fixtures::sample_story()).await;

    let response = server.post(&format!("/api/sessions/{id}/next")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["current_line"]["index"].as_u64().unwrap(), 1);
    assert_eq!(
        body["current_line"]["text"].as_str().unwrap(),
        "Reading practice makes perfect"
    );

    // Step past the last line: finished, no current line.
    server.post(&format!("/api/sessions/{id}/next")).await;
    let response = server.post(&format!("/api/sessions/{id}/next")).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["finished"].as_bool().unwrap(), true);
    assert!(body["current_line"].is_null());

    // Restart returns to the first line.
    let response = server.post(&format!("/api/sessions/{id}/restart")).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["finished"].as_bool().unwrap(), false);
    assert_eq!(body["current_line"]["index"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn test_previous_saturates_at_the_first_line() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();
    let id = common::create_session(&server, fixtures::sample_story()).await;

    let response = server.post(&format!("/api/sessions/{id}/previous")).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["current_line"]["index"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn test_navigation_on_unknown_session_is_not_found() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/sessions/00000000-0000-0000-0000-000000000000/next")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}
