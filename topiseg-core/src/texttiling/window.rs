//! Sliding-window lexical cohesion scores

use crate::stats;
use crate::vector::{cosine, TermVector};

/// Block similarities sampled along the token stream
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowScores {
    /// Token position of each sample (start of the right-hand window)
    pub positions: Vec<usize>,
    /// Cosine similarity between the two windows at each sample
    pub similarities: Vec<f64>,
}

impl WindowScores {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.similarities.len()
    }

    /// Whether nothing was sampled
    pub fn is_empty(&self) -> bool {
        self.similarities.is_empty()
    }

    /// 3-point moving average; sample `k` of the result sits at position `k + 1`
    pub fn smoothed(&self) -> WindowScores {
        let similarities = stats::moving_average3(&self.similarities);
        let positions = self
            .positions
            .iter()
            .skip(1)
            .take(similarities.len())
            .copied()
            .collect();
        WindowScores {
            positions,
            similarities,
        }
    }
}

/// Slide two adjacent windows of `window` tokens over `terms`, sampling every `step` tokens.
///
/// `terms[i]` is the term token `i` contributes, or `None` for stop words
/// and non-words: those still occupy a position but never enter a window.
/// The first sample is at position `window`, the last at most at
/// `terms.len() - window`. Fewer than `2 * window + 1` tokens yield no samples.
pub fn score_windows(terms: &[Option<String>], window: usize, step: usize) -> WindowScores {
    let total = terms.len();
    let mut scores = WindowScores::default();
    if window == 0 || step == 0 || total <= window.saturating_mul(2) {
        return scores;
    }

    let mut left = TermVector::new();
    let mut right = TermVector::new();
    for term in terms[..window].iter().flatten() {
        left.increment(term, 1);
    }
    for term in terms[window..2 * window].iter().flatten() {
        right.increment(term, 1);
    }

    let mut i = window;
    loop {
        if (i - window) % step == 0 {
            scores.positions.push(i);
            scores.similarities.push(cosine(&left, &right, None));
        }
        if i + window >= total {
            break;
        }

        if let Some(term) = &terms[i - window] {
            left.decrement(term, 1);
        }
        if let Some(term) = &terms[i] {
            left.increment(term, 1);
            right.decrement(term, 1);
        }
        if let Some(term) = &terms[i + window] {
            right.increment(term, 1);
        }
        i += 1;
    }

    log::debug!(
        "scored {} window positions over {total} tokens (w={window}, s={step})",
        scores.len()
    );
    scores
}
