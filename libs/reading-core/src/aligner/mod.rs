//! Word alignment strategies.
//!
//! An alignment strategy pairs every reference word with its best spoken
//! candidate. The default greedy strategy is deliberately unconstrained
//! (spoken words can be reused, spoken order is ignored); the ordered
//! strategy is a one-to-one, order-preserving alternative behind the same
//! trait.

pub mod greedy;
pub mod ordered;

use crate::types::{AlignerKind, WordAlignment};

/// Trait for word alignment strategies.
pub trait AlignmentStrategy: Send + Sync {
    /// Strategy identifier.
    fn name(&self) -> &'static str;

    /// Pair each reference word with a spoken candidate.
    ///
    /// Returns exactly one entry per reference word, in reference order.
    /// An empty transcript yields `spoken: None, similarity: 0.0` for every
    /// reference word.
    fn align(&self, reference: &[String], spoken: &[String]) -> Vec<WordAlignment>;
}

/// Get the strategy for a selection.
pub fn get_aligner(kind: AlignerKind) -> Box<dyn AlignmentStrategy> {
    match kind {
        AlignerKind::Greedy => Box::new(greedy::GreedyAligner),
        AlignerKind::Ordered => Box::new(ordered::OrderedAligner),
    }
}
