//! Unconstrained best-match word alignment.
//!
//! Each reference word independently takes the spoken word with the highest
//! similarity ratio. Spoken words may match several reference words and
//! spoken-side order is never consulted, which keeps the matcher tolerant
//! of insertions, omissions and reordering in the transcript. It is equally
//! tolerant of a reader exploiting repetition.

use super::AlignmentStrategy;
use crate::similarity::sequence_ratio;
use crate::types::WordAlignment;

/// The default alignment strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAligner;

impl AlignmentStrategy for GreedyAligner {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn align(&self, reference: &[String], spoken: &[String]) -> Vec<WordAlignment> {
        reference
            .iter()
            .map(|word| {
                let mut best: Option<&String> = None;
                let mut best_ratio = 0.0;

                for candidate in spoken {
                    let ratio = sequence_ratio(word, candidate);
                    // Strict comparison: ties keep the earliest occurrence,
                    // and a candidate sharing nothing never binds.
                    if ratio > best_ratio {
                        best_ratio = ratio;
                        best = Some(candidate);
                    }
                }

                WordAlignment {
                    reference: word.clone(),
                    spoken: best.cloned(),
                    similarity: best_ratio,
                }
            })
            .collect()
    }
}
