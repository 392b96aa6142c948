//! API request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from reading-core
pub use reading_core::{
    AccuracySummary, AlignerKind, Assessment, AssessmentSettings, FeedbackTier, WordMatch,
};

// === Session types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Extracted plain text of the document to practice.
    pub text: String,
    #[serde(default)]
    pub settings: Option<AssessmentSettings>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LineInfo {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub line_count: usize,
    /// None once the reader has finished the document.
    pub current_line: Option<LineInfo>,
    pub finished: bool,
    pub settings: AssessmentSettings,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_assessment: Option<Assessment>,
}

// === Attempt types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct AttemptRequest {
    pub transcript: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttemptResponse {
    /// What the reader was heard saying.
    pub transcript: String,
    #[serde(flatten)]
    pub assessment: Assessment,
}

// === Settings types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub aligner: Option<String>,
    pub similarity_threshold: Option<f64>,
    pub excellent_cutoff: Option<f64>,
    pub good_cutoff: Option<f64>,
}

// === Question types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub answer: String,
}
