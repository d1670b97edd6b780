//! Standard PageRank algorithm
//!
//! Power iteration over a weighted graph. Nodes with no outgoing weight
//! contribute nothing: their mass is dropped rather than redistributed, and
//! the score vector is renormalized to sum to 1 after every iteration.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityMatrix;

/// Standard PageRank implementation
#[derive(Debug, Clone, PartialEq)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a similarity matrix
    pub fn run_matrix(&self, matrix: &SimilarityMatrix) -> PageRankResult {
        self.run(&CsrGraph::from_matrix(matrix))
    }

    /// Run PageRank on a graph
    ///
    /// Returns the last normalized vector even if convergence wasn't
    /// achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        if graph.is_empty() {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let n = graph.num_nodes;

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            new_scores.fill(teleport);

            // Propagate scores through edges
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);
                if total_weight <= 0.0 {
                    continue;
                }

                for (neighbor, weight) in graph.neighbors(node as u32) {
                    new_scores[neighbor as usize] +=
                        self.damping * node_score * weight / total_weight;
                }
            }

            normalize(&mut new_scores);

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            // Swap buffers
            std::mem::swap(&mut scores, &mut new_scores);

            if delta < self.threshold {
                converged = true;
                break;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = n,
            edges = graph.num_edges(),
            iterations,
            delta,
            converged,
            "pagerank finished"
        );

        PageRankResult::new(scores, iterations, delta, converged)
    }
}

/// Scale `scores` to sum to 1; an all-zero vector becomes uniform.
fn normalize(scores: &mut [f64]) {
    let sum: f64 = scores.iter().sum();
    if sum > 0.0 {
        for score in scores.iter_mut() {
            *score /= sum;
        }
    } else if !scores.is_empty() {
        let uniform = 1.0 / scores.len() as f64;
        scores.fill(uniform);
    }
}
