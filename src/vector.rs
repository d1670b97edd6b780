//! Sparse term-frequency vectors
//!
//! Sentences are represented as plain term-frequency maps over their
//! retained tokens. There is no IDF weighting, so the representation needs
//! no corpus statistics and no tuning parameters.

use rustc_hash::FxHashMap;

/// A sparse term-frequency vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Non-zero dimensions: token -> occurrence count
    counts: FxHashMap<String, u32>,
    /// Cached L2 norm of `counts`
    norm: f64,
}

impl TermVector {
    /// Create an empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Count token occurrences
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }
        Self::from_counts(counts)
    }

    /// Wrap an existing count map
    pub fn from_counts(counts: FxHashMap<String, u32>) -> Self {
        let norm = counts
            .values()
            .map(|&c| {
                let c = c as f64;
                c * c
            })
            .sum::<f64>()
            .sqrt();
        Self { counts, norm }
    }

    /// Occurrence count of `token` (0 when absent)
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the vector has no dimensions
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (token, count) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Dot product over shared keys
    pub fn dot(&self, other: &TermVector) -> f64 {
        // Walk the smaller map, look up in the larger one.
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .counts
            .iter()
            .filter_map(|(token, &a)| large.counts.get(token).map(|&b| a as f64 * b as f64))
            .sum()
    }

    /// Cosine similarity in `[0, 1]`
    ///
    /// Returns 0 when either vector has zero norm (e.g. an all-stopword
    /// sentence), never NaN.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let denom = self.norm * other.norm;
        if denom <= 0.0 {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(0.0, 1.0)
    }
}
