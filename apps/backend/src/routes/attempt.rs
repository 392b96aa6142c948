//! Attempt endpoints: submit a spoken attempt, fetch reference audio.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::session::session_not_found;
use crate::AppState;
use reading_core::assess;

/// POST /api/sessions/{id}/attempt
///
/// The transcript is plain text: transcription has already happened on the
/// client or via the attempt-audio endpoint.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AttemptRequest>,
) -> Result<Json<AttemptResponse>> {
    assess_transcript(&state, id, payload.transcript)
}

/// POST /api/sessions/{id}/attempt-audio
///
/// Accepts a raw WAV body, transcribes it through the speech collaborator,
/// then assesses the transcript like a text attempt.
pub async fn submit_audio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    audio: Bytes,
) -> Result<Json<AttemptResponse>> {
    if audio.is_empty() {
        return Err(ApiError::InvalidInput("empty audio body".to_string()));
    }

    let transcript = state
        .speech
        .transcribe(audio.to_vec())
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    assess_transcript(&state, id, transcript)
}

fn assess_transcript(
    state: &AppState,
    id: Uuid,
    transcript: String,
) -> Result<Json<AttemptResponse>> {
    let session = state.sessions.get(id).ok_or_else(|| session_not_found(id))?;
    let line = session
        .current_line_text()
        .ok_or_else(|| {
            ApiError::InvalidInput("session is finished; no line to assess".to_string())
        })?
        .to_string();

    let assessment = assess(&line, &transcript, &session.settings);
    state
        .sessions
        .update(id, |s| s.last_assessment = Some(assessment.clone()));

    tracing::info!(
        "Session {} line {}: {:.1}% ({:?})",
        id,
        session.current_line,
        assessment.summary.percentage,
        assessment.tier
    );

    Ok(Json(AttemptResponse {
        transcript,
        assessment,
    }))
}

/// GET /api/sessions/{id}/reference-audio
///
/// Performs the effect that `request_reference_audio` asks the caller to
/// trigger: synthesizes a reference pronunciation of the current line.
pub async fn reference_audio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let session = state.sessions.get(id).ok_or_else(|| session_not_found(id))?;
    let line = session
        .current_line_text()
        .ok_or_else(|| {
            ApiError::InvalidInput("session is finished; no line to synthesize".to_string())
        })?
        .to_string();

    let audio = state
        .speech
        .synthesize(&line)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "audio/wav")], audio))
}
