//! Word tokenization and similarity scoring.

/// Split a line into lowercased words.
///
/// Whitespace-separated tokens, each case-folded, so every later comparison
/// is case-insensitive and free of leading/trailing whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Ratcliff/Obershelp similarity ratio between two strings, in [0, 1].
///
/// Finds the longest common contiguous block, recursively scores the
/// unmatched left and right remainders, and combines the matched character
/// count as `2 * matches / (len(a) + len(b))`. Symmetric and deterministic.
/// Two empty strings are identical and score 1.0.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }

    let matches = matching_chars(&a_chars, &b_chars);
    2.0 * matches as f64 / total as f64
}

/// Total characters covered by the longest common block and, recursively,
/// the blocks found in the unmatched remainders on either side of it.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common contiguous block as (start in a, start in b, length).
///
/// Ties resolve to the block starting earliest in `a`, then earliest in `b`.
/// Two-row DP over common-suffix lengths.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                curr[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
