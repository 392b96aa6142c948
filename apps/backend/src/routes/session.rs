//! Session endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::sessions::ReadingSession;
use crate::AppState;
use reading_core::Document;

pub(crate) fn session_response(session: &ReadingSession) -> SessionResponse {
    SessionResponse {
        session_id: session.id,
        line_count: session.document.len(),
        current_line: session.current_line_text().map(|text| LineInfo {
            index: session.current_line,
            text: text.to_string(),
        }),
        finished: session.is_finished(),
        settings: session.settings,
        created_at: session.created_at,
        last_assessment: session.last_assessment.clone(),
    }
}

pub(crate) fn session_not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("session {id}"))
}

/// POST /api/sessions
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>> {
    let document = Document::from_text(&payload.text);
    if document.is_empty() {
        return Err(ApiError::InvalidInput(
            "document contains no readable lines".to_string(),
        ));
    }

    let settings = payload.settings.unwrap_or_default();
    settings.validate()?;

    let session = ReadingSession::new(document, settings);
    let response = session_response(&session);
    state.sessions.insert(session);

    tracing::info!(
        "Created session {} with {} lines",
        response.session_id,
        response.line_count
    );
    Ok(Json(response))
}

/// GET /api/sessions/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    let session = state.sessions.get(id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(session_response(&session)))
}

fn navigate(
    state: &AppState,
    id: Uuid,
    step: impl FnOnce(&mut ReadingSession),
) -> Result<Json<SessionResponse>> {
    let session = state
        .sessions
        .update(id, |session| {
            step(session);
            session.clone()
        })
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(session_response(&session)))
}

/// POST /api/sessions/{id}/next
pub async fn next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    navigate(&state, id, ReadingSession::advance)
}

/// POST /api/sessions/{id}/previous
pub async fn previous(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    navigate(&state, id, ReadingSession::go_back)
}

/// POST /api/sessions/{id}/restart
pub async fn restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    navigate(&state, id, ReadingSession::restart)
}
