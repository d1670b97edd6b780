//! TextRank: PageRank over the sentence similarity graph

use super::{Convergence, RankInput, RankOutput, Ranker};
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::{SimilarityMatrix, DEFAULT_THRESHOLD};
use crate::pagerank::standard::StandardPageRank;

/// Graph-based sentence ranker
#[derive(Debug, Clone)]
pub struct GraphRanker {
    pagerank: StandardPageRank,
    /// Threshold used when the input carries no precomputed matrix
    threshold: f64,
}

impl Default for GraphRanker {
    fn default() -> Self {
        Self::new(StandardPageRank::default())
    }
}

impl GraphRanker {
    pub fn new(pagerank: StandardPageRank) -> Self {
        Self {
            pagerank,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Set the fallback similarity threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

impl Ranker for GraphRanker {
    fn rank(&self, input: &RankInput<'_>) -> RankOutput {
        let built;
        // A matrix sized for a different sentence list is rebuilt so there is
        // one score per sentence.
        let matrix = match input.similarity {
            Some(m) if m.len() == input.sentences.len() => m,
            _ => {
                built = SimilarityMatrix::build(input.sentences, self.threshold);
                &built
            }
        };

        let graph = CsrGraph::from_matrix(matrix);
        let result = self.pagerank.run(&graph);

        RankOutput {
            convergence: Some(Convergence::from(&result)),
            scores: result.scores,
        }
    }
}
