//! Settings endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::session::session_not_found;
use crate::AppState;

/// GET /api/sessions/{id}/settings
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentSettings>> {
    let session = state.sessions.get(id).ok_or_else(|| session_not_found(id))?;
    Ok(Json(session.settings))
}

/// PUT /api/sessions/{id}/settings
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<AssessmentSettings>> {
    let session = state.sessions.get(id).ok_or_else(|| session_not_found(id))?;

    // Apply updates
    let mut updated = session.settings;
    if let Some(aligner) = request.aligner {
        updated.aligner = AlignerKind::from_str(&aligner)
            .ok_or_else(|| ApiError::InvalidInput(format!("unknown aligner: {aligner}")))?;
    }
    if let Some(threshold) = request.similarity_threshold {
        updated.similarity_threshold = threshold;
    }
    if let Some(cutoff) = request.excellent_cutoff {
        updated.excellent_cutoff = cutoff;
    }
    if let Some(cutoff) = request.good_cutoff {
        updated.good_cutoff = cutoff;
    }
    updated.validate()?;

    state.sessions.update(id, |s| s.settings = updated);
    Ok(Json(updated))
}
