//! Core reading-assessment library shared by the readalong backend.
//!
//! Provides:
//! - Plain-text document segmentation into readable lines
//! - Word similarity scoring (Ratcliff/Obershelp sequence ratio)
//! - Swappable word alignment strategies (greedy, ordered)
//! - Accuracy evaluation and feedback classification

pub mod aligner;
pub mod assess;
pub mod document;
pub mod error;
pub mod similarity;
pub mod types;

pub use aligner::{get_aligner, AlignmentStrategy};
pub use assess::{assess, evaluate, Assessment};
pub use document::Document;
pub use error::{Error, Result};
pub use similarity::{sequence_ratio, tokenize};
pub use types::{
    AccuracySummary, AlignerKind, AssessmentSettings, FeedbackTier, WordAlignment, WordMatch,
};
