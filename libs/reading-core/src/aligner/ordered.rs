//! Order-preserving one-to-one word alignment.
//!
//! Dynamic programming over (reference, spoken) prefixes maximizing the
//! summed similarity of matched pairs, where each spoken word is consumed
//! at most once and matched pairs never cross. Reference words left without
//! a partner get `spoken: None, similarity: 0.0`.

use super::AlignmentStrategy;
use crate::similarity::sequence_ratio;
use crate::types::WordAlignment;

/// One-to-one, order-preserving alternative to [`super::greedy::GreedyAligner`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedAligner;

impl AlignmentStrategy for OrderedAligner {
    fn name(&self) -> &'static str {
        "ordered"
    }

    fn align(&self, reference: &[String], spoken: &[String]) -> Vec<WordAlignment> {
        let n = reference.len();
        let m = spoken.len();

        let ratios: Vec<Vec<f64>> = reference
            .iter()
            .map(|w| spoken.iter().map(|s| sequence_ratio(w, s)).collect())
            .collect();

        // dp[i][j] = best summed similarity over the first i reference and
        // first j spoken words.
        let mut dp = vec![vec![0.0f64; m + 1]; n + 1];
        for i in 1..=n {
            for j in 1..=m {
                let skip = dp[i - 1][j].max(dp[i][j - 1]);
                let pair = dp[i - 1][j - 1] + ratios[i - 1][j - 1];
                dp[i][j] = skip.max(pair);
            }
        }

        // Backtrack. Skips are preferred on ties, so a pair is only bound
        // when it strictly improves the total; zero-similarity pairs are
        // never taken.
        let mut matched: Vec<Option<(usize, f64)>> = vec![None; n];
        let (mut i, mut j) = (n, m);
        while i > 0 && j > 0 {
            if dp[i][j] == dp[i][j - 1] {
                j -= 1;
            } else if dp[i][j] == dp[i - 1][j] {
                i -= 1;
            } else {
                matched[i - 1] = Some((j - 1, ratios[i - 1][j - 1]));
                i -= 1;
                j -= 1;
            }
        }

        reference
            .iter()
            .enumerate()
            .map(|(idx, word)| match matched[idx] {
                Some((spoken_idx, similarity)) => WordAlignment {
                    reference: word.clone(),
                    spoken: Some(spoken[spoken_idx].clone()),
                    similarity,
                },
                None => WordAlignment {
                    reference: word.clone(),
                    spoken: None,
                    similarity: 0.0,
                },
            })
            .collect()
    }
}
