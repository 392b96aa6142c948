//! Document question-answering endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::session::session_not_found;
use crate::AppState;

/// POST /api/sessions/{id}/question
pub async fn ask(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>> {
    if payload.question.trim().is_empty() {
        return Err(ApiError::InvalidInput("question is empty".to_string()));
    }

    let session = state.sessions.get(id).ok_or_else(|| session_not_found(id))?;
    let context = session.document.full_text();

    let answer = state
        .answerer
        .answer(&payload.question, &context)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(Json(QuestionResponse { answer }))
}
