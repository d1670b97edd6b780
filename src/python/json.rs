//! JSON interface for batch processing
//!
//! One call crosses the Python↔Rust boundary per batch; the documents are
//! summarized in parallel on the Rust side.

use crate::payload;
use pyo3::prelude::*;

/// Summarize a document given as JSON
///
/// Args:
///     json_input: JSON object `{"text": ..., "config": {...}}`
///
/// Returns:
///     JSON string with the summary, sentences and keywords
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_json(json_input: &str) -> PyResult<String> {
    payload::summarize_json(json_input)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Batch summarize documents
///
/// Args:
///     json_input: JSON array of documents
///
/// Returns:
///     JSON string with an array of results, in input order
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_batch_json(json_input: &str) -> PyResult<String> {
    payload::summarize_batch_json(json_input)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}
