//! Sentence similarity matrix
//!
//! Pairwise cosine similarity between sentence term-frequency vectors,
//! stored as a dense symmetric N×N matrix with a zero diagonal. Entries
//! below the threshold are zeroed so the ranking graph stays sparse.

use crate::types::Sentence;
use rayon::prelude::*;

/// Documents with at least this many sentences compute matrix rows on the
/// rayon pool. Each cell is computed independently, so the result is the
/// same as the sequential path.
pub const PARALLEL_MIN_SENTENCES: usize = 256;

/// Default similarity threshold
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// A dense, row-major N×N similarity matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// An all-zero matrix
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Build the thresholded similarity matrix for `sentences`
    ///
    /// Each unordered pair is computed once and mirrored, so the result is
    /// exactly symmetric. The diagonal stays 0.
    pub fn build(sentences: &[Sentence], threshold: f64) -> Self {
        let n = sentences.len();
        let upper_rows: Vec<Vec<f64>> = if n >= PARALLEL_MIN_SENTENCES {
            (0..n)
                .into_par_iter()
                .map(|i| upper_row(sentences, i, threshold))
                .collect()
        } else {
            (0..n).map(|i| upper_row(sentences, i, threshold)).collect()
        };

        let mut matrix = Self::zeros(n);
        for (i, row) in upper_rows.into_iter().enumerate() {
            for (offset, value) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                matrix.values[i * n + j] = value;
                matrix.values[j * n + i] = value;
            }
        }
        matrix
    }

    /// Build a matrix from explicit rows (the diagonal is forced to 0)
    ///
    /// Rows shorter than the row count are zero-padded; extra columns are
    /// ignored. Symmetry is not enforced.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n = rows.len();
        let mut matrix = Self::zeros(n);
        for (i, row) in rows.into_iter().enumerate() {
            for (j, value) in row.into_iter().take(n).enumerate() {
                if i != j {
                    matrix.values[i * n + j] = value;
                }
            }
        }
        matrix
    }

    /// Number of sentences (rows)
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Value at `(i, j)`
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "index out of bounds");
        self.values[i * self.size + j]
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Sum of row `i` (outgoing weight of node `i`)
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Number of non-zero undirected edges (pairs `i < j`)
    pub fn edge_count(&self) -> usize {
        (0..self.size)
            .map(|i| self.row(i)[i + 1..].iter().filter(|&&v| v > 0.0).count())
            .sum()
    }

    /// Check symmetry and the zero diagonal
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            self.get(i, i) == 0.0 && ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i))
        })
    }
}

fn upper_row(sentences: &[Sentence], i: usize, threshold: f64) -> Vec<f64> {
    let base = &sentences[i].frequencies;
    sentences[i + 1..]
        .iter()
        .map(|other| {
            let sim = base.cosine_similarity(&other.frequencies);
            if sim < threshold {
                0.0
            } else {
                sim
            }
        })
        .collect()
}
