//! Sentence graph construction and representation
//!
//! The similarity matrix is the sentence graph's adjacency structure; the
//! CSR form is what PageRank iterates over.

pub mod csr;
pub mod similarity;
