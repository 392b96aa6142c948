//! Accuracy evaluation and feedback classification.

use serde::{Deserialize, Serialize};

use crate::aligner::get_aligner;
use crate::similarity::tokenize;
use crate::types::{
    AccuracySummary, AssessmentSettings, FeedbackTier, WordAlignment, WordMatch,
};

/// Full outcome of assessing one spoken attempt against a reference line.
///
/// `request_reference_audio` asks the caller to fetch a reference
/// pronunciation of the line; the engine only signals the effect, it never
/// performs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub words: Vec<WordMatch>,
    pub summary: AccuracySummary,
    pub tier: FeedbackTier,
    pub request_reference_audio: bool,
}

/// Annotate an alignment with correctness verdicts and aggregate accuracy.
///
/// A word is correct when its similarity is strictly above the threshold;
/// a word scoring exactly the threshold is incorrect. An empty alignment
/// evaluates to 0.0 percent rather than dividing by zero.
pub fn evaluate(alignment: &[WordAlignment], threshold: f64) -> (Vec<WordMatch>, AccuracySummary) {
    let words: Vec<WordMatch> = alignment
        .iter()
        .map(|entry| WordMatch {
            reference: entry.reference.clone(),
            spoken: entry.spoken.clone(),
            similarity: entry.similarity,
            is_correct: entry.similarity > threshold,
        })
        .collect();

    let correct = words.iter().filter(|w| w.is_correct).count();
    let total = words.len();
    let percentage = if total > 0 {
        100.0 * correct as f64 / total as f64
    } else {
        0.0
    };

    (
        words,
        AccuracySummary {
            correct,
            total,
            percentage,
        },
    )
}

/// Assess a spoken transcript against a reference line.
///
/// Pure function of its inputs: tokenizes both sides, runs the configured
/// alignment strategy, thresholds each match and classifies the aggregate.
/// Holds no state across invocations.
pub fn assess(reference: &str, spoken: &str, settings: &AssessmentSettings) -> Assessment {
    let reference_words = tokenize(reference);
    let spoken_words = tokenize(spoken);

    let aligner = get_aligner(settings.aligner);
    let alignment = aligner.align(&reference_words, &spoken_words);
    let (words, summary) = evaluate(&alignment, settings.similarity_threshold);
    let tier = settings.tier_for(summary.percentage);

    Assessment {
        words,
        summary,
        tier,
        request_reference_audio: tier == FeedbackTier::NeedsPractice,
    }
}
