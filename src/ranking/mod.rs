//! Sentence ranking strategies
//!
//! Every strategy maps a document's sentences to one score per sentence.
//! Strategies are statically dispatched through [`SentenceRanker`], a tagged
//! enum built from [`Algorithm`].

pub mod graph;
pub mod heuristics;

pub use graph::GraphRanker;
pub use heuristics::{FrequencyRanker, KeywordOverlapRanker, PositionRanker};

use crate::graph::similarity::SimilarityMatrix;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::types::{Algorithm, Sentence, SummaryConfig};
use serde::{Deserialize, Serialize};

/// Everything a ranker may look at
///
/// `similarity` is only read by the graph strategy, `keywords` only by the
/// keyword-overlap strategy. Both are optional: the graph ranker builds its
/// own matrix when none is given, and a missing keyword list scores 0.
#[derive(Debug, Clone, Copy)]
pub struct RankInput<'a> {
    pub sentences: &'a [Sentence],
    pub similarity: Option<&'a SimilarityMatrix>,
    pub keywords: Option<&'a [String]>,
}

impl<'a> RankInput<'a> {
    /// Input with sentences only
    pub fn new(sentences: &'a [Sentence]) -> Self {
        Self {
            sentences,
            similarity: None,
            keywords: None,
        }
    }

    /// Attach a precomputed similarity matrix
    pub fn with_similarity(mut self, similarity: &'a SimilarityMatrix) -> Self {
        self.similarity = Some(similarity);
        self
    }

    /// Attach an extracted keyword list
    pub fn with_keywords(mut self, keywords: &'a [String]) -> Self {
        self.keywords = Some(keywords);
        self
    }
}

/// PageRank termination diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Convergence {
    pub iterations: usize,
    pub delta: f64,
    pub converged: bool,
}

impl From<&PageRankResult> for Convergence {
    fn from(result: &PageRankResult) -> Self {
        Self {
            iterations: result.iterations,
            delta: result.delta,
            converged: result.converged,
        }
    }
}

/// Output of a ranking strategy
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankOutput {
    /// One score per sentence, indexed by sentence position
    pub scores: Vec<f64>,
    /// Present only for the graph strategy
    pub convergence: Option<Convergence>,
}

impl RankOutput {
    /// Output without convergence diagnostics
    pub fn from_scores(scores: Vec<f64>) -> Self {
        Self {
            scores,
            convergence: None,
        }
    }
}

/// A sentence scoring strategy
pub trait Ranker {
    /// Score every sentence in `input`; the result has one entry per sentence.
    fn rank(&self, input: &RankInput<'_>) -> RankOutput;
}

/// The four built-in strategies
#[derive(Debug, Clone)]
pub enum SentenceRanker {
    Frequency(FrequencyRanker),
    Position(PositionRanker),
    KeywordOverlap(KeywordOverlapRanker),
    Graph(GraphRanker),
}

impl SentenceRanker {
    /// Build the strategy for `algorithm`; `pagerank` is only used by the
    /// graph strategy.
    pub fn new(algorithm: Algorithm, pagerank: &StandardPageRank) -> Self {
        match algorithm {
            Algorithm::Frequency => SentenceRanker::Frequency(FrequencyRanker),
            Algorithm::Simple => SentenceRanker::Position(PositionRanker),
            Algorithm::Keywords => SentenceRanker::KeywordOverlap(KeywordOverlapRanker),
            Algorithm::Graph => SentenceRanker::Graph(GraphRanker::new(pagerank.clone())),
        }
    }

    /// Build the strategy a config asks for, carrying its PageRank settings
    /// and similarity threshold
    pub fn from_config(config: &SummaryConfig) -> Self {
        match Self::new(config.algorithm, &config.pagerank()) {
            SentenceRanker::Graph(ranker) => {
                SentenceRanker::Graph(ranker.with_threshold(config.similarity_threshold))
            }
            other => other,
        }
    }

    /// The algorithm tag this strategy implements
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SentenceRanker::Frequency(_) => Algorithm::Frequency,
            SentenceRanker::Position(_) => Algorithm::Simple,
            SentenceRanker::KeywordOverlap(_) => Algorithm::Keywords,
            SentenceRanker::Graph(_) => Algorithm::Graph,
        }
    }
}

impl Ranker for SentenceRanker {
    fn rank(&self, input: &RankInput<'_>) -> RankOutput {
        match self {
            SentenceRanker::Frequency(r) => r.rank(input),
            SentenceRanker::Position(r) => r.rank(input),
            SentenceRanker::KeywordOverlap(r) => r.rank(input),
            SentenceRanker::Graph(r) => r.rank(input),
        }
    }
}

/// Score sentences with the strategy selected by `algorithm`
pub fn rank(
    algorithm: Algorithm,
    input: &RankInput<'_>,
    pagerank: &StandardPageRank,
) -> RankOutput {
    SentenceRanker::new(algorithm, pagerank).rank(input)
}
