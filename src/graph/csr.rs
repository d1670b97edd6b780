//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! PageRank needs during power iteration. The sentence graph is usually far
//! sparser than the dense similarity matrix once thresholding is applied.

use super::similarity::SimilarityMatrix;

/// A weighted directed graph in Compressed Sparse Row format
///
/// Edge `i -> j` carries the matrix cell `(i, j)`. Outgoing weight sums are
/// computed per row and never assumed equal to column sums.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Convert a similarity matrix into CSR format, keeping only positive
    /// off-diagonal cells
    pub fn from_matrix(matrix: &SimilarityMatrix) -> Self {
        let num_nodes = matrix.len();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for i in 0..num_nodes {
            let mut row_total = 0.0;
            for (j, &w) in matrix.row(i).iter().enumerate() {
                if j != i && w > 0.0 {
                    col_idx.push(j as u32);
                    weights.push(w);
                    row_total += w;
                }
            }
            total_weight.push(row_total);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of directed edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}
