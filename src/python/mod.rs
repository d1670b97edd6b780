//! Python bindings via PyO3
//!
//! This module provides the Python interface for rapid_summary.

pub mod json;
pub mod native;

use pyo3::prelude::*;

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Native interface classes
    m.add_class::<native::PyKeyword>()?;
    m.add_class::<native::PySummarySentence>()?;
    m.add_class::<native::PySummary>()?;
    m.add_class::<native::PySummaryConfig>()?;
    m.add_class::<native::PySummarizer>()?;
    m.add_function(wrap_pyfunction!(native::get_stopwords, m)?)?;

    // JSON interface functions
    m.add_function(wrap_pyfunction!(json::summarize_json, m)?)?;
    m.add_function(wrap_pyfunction!(json::summarize_batch_json, m)?)?;

    Ok(())
}
