//! # rapid_summary
//!
//! Extractive text summarization with TextRank, plus degree/frequency
//! keyword extraction, with optional Python bindings.
//!
//! ## Features
//!
//! - **Four ranking strategies**: graph (TextRank), term frequency, lead
//!   position and keyword overlap
//! - **Unicode-aware**: UAX #29 word boundaries and CJK sentence terminals
//! - **Deterministic**: no hidden randomness; identical input gives
//!   identical output
//! - **Python bindings**: optional, via PyO3
//!
//! ## Example
//!
//! ```
//! use rapid_summary::{Algorithm, Summarizer, SummaryConfig, SummaryLength};
//!
//! let config = SummaryConfig::new()
//!     .with_algorithm(Algorithm::Simple)
//!     .with_summary_length(SummaryLength::Count(1));
//! let summary = Summarizer::new(config).summarize("First point. Second point.");
//! assert_eq!(summary.text(), "First point.");
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod payload;
pub mod phrase;
pub mod ranking;
pub mod summarizer;
pub mod types;
pub mod vector;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SummaryError};
pub use types::{Algorithm, KeywordMode, Sentence, SummaryConfig, SummaryLength};

// Re-export main functionality
pub use graph::{csr::CsrGraph, similarity::SimilarityMatrix};
pub use nlp::{segmenter::SentenceSegmenter, stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use payload::{
    summarize_batch, summarize_batch_json, summarize_json, SummaryRequest, SummaryResponse,
};
pub use phrase::extraction::{extract_keywords, Keyword, KeywordExtractor};
pub use ranking::{rank, Convergence, RankInput, RankOutput, Ranker, SentenceRanker};
pub use summarizer::{
    selector::SentenceSelector, summarize, Summarizer, Summary, SummarySentence,
};
pub use vector::TermVector;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
