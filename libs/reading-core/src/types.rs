//! Core types for read-aloud assessment.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Coarse feedback bucket derived from aggregate accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Excellent,
    Good,
    NeedsPractice,
}

impl FeedbackTier {
    /// Get the tier name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::NeedsPractice => "needs_practice",
        }
    }
}

/// Word alignment strategy options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignerKind {
    Greedy,
    Ordered,
}

impl Default for AlignerKind {
    fn default() -> Self {
        Self::Greedy
    }
}

impl AlignerKind {
    /// Get the strategy name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Ordered => "ordered",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "greedy" => Some(Self::Greedy),
            "ordered" => Some(Self::Ordered),
            _ => None,
        }
    }
}

/// One reference word paired with its best spoken candidate.
///
/// Produced by an alignment strategy, one entry per reference word, in
/// reference order. `spoken` is None when nothing in the transcript shares
/// any structure with the reference word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAlignment {
    pub reference: String,
    pub spoken: Option<String>,
    pub similarity: f64,
}

/// A word alignment annotated with a correctness verdict.
///
/// Under the default greedy strategy several entries may name the same
/// spoken word; there is no exclusivity constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordMatch {
    pub reference: String,
    pub spoken: Option<String>,
    pub similarity: f64,
    pub is_correct: bool,
}

/// Aggregate accuracy over one assessed line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracySummary {
    pub correct: usize,
    pub total: usize,
    /// 100 * correct / total, or 0.0 when there was nothing to evaluate.
    pub percentage: f64,
}

/// Tunable assessment settings.
///
/// Defaults match the fixed values the assistant shipped with: a word
/// counts as correct strictly above 0.8 similarity, 90% accuracy is
/// excellent, 70% is good.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSettings {
    pub aligner: AlignerKind,
    pub similarity_threshold: f64,
    pub excellent_cutoff: f64,
    pub good_cutoff: f64,
}

impl Default for AssessmentSettings {
    fn default() -> Self {
        Self {
            aligner: AlignerKind::default(),
            similarity_threshold: 0.8,
            excellent_cutoff: 90.0,
            good_cutoff: 70.0,
        }
    }
}

impl AssessmentSettings {
    /// Check that every field is inside its domain.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::InvalidInput(format!(
                "similarity_threshold {} outside [0, 1]",
                self.similarity_threshold
            )));
        }
        for (name, value) in [
            ("excellent_cutoff", self.excellent_cutoff),
            ("good_cutoff", self.good_cutoff),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::InvalidInput(format!(
                    "{name} {value} outside [0, 100]"
                )));
            }
        }
        if self.good_cutoff > self.excellent_cutoff {
            return Err(Error::InvalidInput(format!(
                "good_cutoff {} above excellent_cutoff {}",
                self.good_cutoff, self.excellent_cutoff
            )));
        }
        Ok(())
    }

    /// Classify an accuracy percentage. Lower bounds are inclusive.
    pub fn tier_for(&self, percentage: f64) -> FeedbackTier {
        if percentage >= self.excellent_cutoff {
            FeedbackTier::Excellent
        } else if percentage >= self.good_cutoff {
            FeedbackTier::Good
        } else {
            FeedbackTier::NeedsPractice
        }
    }
}
