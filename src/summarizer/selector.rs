//! Top-K sentence selection

use std::cmp::Ordering;

/// Picks the K best-scoring sentences and returns them in document order
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    /// Indices of the top `k` scores, sorted ascending
    ///
    /// Scores are ordered descending with ties going to the lower index.
    /// NaN scores sort after every number. `k` larger than the score count
    /// selects everything.
    pub fn select(scores: &[f64], k: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| by_score_desc(scores[a], scores[b]).then(a.cmp(&b)));
        order.truncate(k);
        order.sort_unstable();
        order
    }
}

fn by_score_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
