//! Non-graph ranking strategies
//!
//! These need no similarity matrix and run in linear time.

use super::{RankInput, RankOutput, Ranker};
use rustc_hash::FxHashSet;

/// Scores each sentence by its number of retained (non-stopword) tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRanker;

impl Ranker for FrequencyRanker {
    fn rank(&self, input: &RankInput<'_>) -> RankOutput {
        RankOutput::from_scores(
            input
                .sentences
                .iter()
                .map(|s| s.token_count() as f64)
                .collect(),
        )
    }
}

/// Scores each sentence by position: `N - index`
///
/// Top-K selection therefore yields the lead sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionRanker;

impl Ranker for PositionRanker {
    fn rank(&self, input: &RankInput<'_>) -> RankOutput {
        let n = input.sentences.len();
        RankOutput::from_scores(
            input
                .sentences
                .iter()
                .enumerate()
                .map(|(i, _)| (n - i) as f64)
                .collect(),
        )
    }
}

/// Scores each sentence by how many of its tokens (counting repeats) are in
/// the keyword list
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordOverlapRanker;

impl Ranker for KeywordOverlapRanker {
    fn rank(&self, input: &RankInput<'_>) -> RankOutput {
        let keywords: FxHashSet<&str> = input
            .keywords
            .unwrap_or(&[])
            .iter()
            .map(String::as_str)
            .collect();

        RankOutput::from_scores(
            input
                .sentences
                .iter()
                .map(|s| {
                    s.tokens
                        .iter()
                        .filter(|t| keywords.contains(t.as_str()))
                        .count() as f64
                })
                .collect(),
        )
    }
}
