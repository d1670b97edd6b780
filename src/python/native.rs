//! Native Python interface
//!
//! Direct Python classes wrapping [`Summarizer`] and [`SummaryConfig`].

use crate::nlp::stopwords::StopwordFilter;
use crate::phrase::extraction::Keyword;
use crate::summarizer::{Summarizer, Summary, SummarySentence};
use crate::types::{Algorithm, KeywordMode, SummaryConfig, SummaryLength};
use pyo3::prelude::*;

/// An extracted keyword
#[pyclass(name = "Keyword")]
#[derive(Clone)]
pub struct PyKeyword {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub score: f64,
    #[pyo3(get)]
    pub frequency: usize,
    #[pyo3(get)]
    pub degree: usize,
    #[pyo3(get)]
    pub rank: usize,
}

#[pymethods]
impl PyKeyword {
    fn __repr__(&self) -> String {
        format!(
            "Keyword(text='{}', score={:.4}, rank={})",
            self.text, self.score, self.rank
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

impl From<Keyword> for PyKeyword {
    fn from(k: Keyword) -> Self {
        Self {
            text: k.text,
            score: k.score,
            frequency: k.frequency,
            degree: k.degree,
            rank: k.rank,
        }
    }
}

/// A sentence selected for the summary
#[pyclass(name = "SummarySentence")]
#[derive(Clone)]
pub struct PySummarySentence {
    #[pyo3(get)]
    pub index: usize,
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub score: f64,
    #[pyo3(get)]
    pub start: usize,
    #[pyo3(get)]
    pub end: usize,
}

#[pymethods]
impl PySummarySentence {
    fn __repr__(&self) -> String {
        format!(
            "SummarySentence(index={}, score={:.4}, text='{}')",
            self.index, self.score, self.text
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

impl From<SummarySentence> for PySummarySentence {
    fn from(s: SummarySentence) -> Self {
        Self {
            index: s.index,
            text: s.text,
            score: s.score,
            start: s.start,
            end: s.end,
        }
    }
}

/// Result of summarization
#[pyclass(name = "Summary")]
#[derive(Clone)]
pub struct PySummary {
    #[pyo3(get)]
    pub sentences: Vec<PySummarySentence>,
    #[pyo3(get)]
    pub keywords: Vec<PyKeyword>,
    #[pyo3(get)]
    pub total_sentences: usize,
    #[pyo3(get)]
    pub algorithm: String,
    /// `None` unless the graph strategy ran
    #[pyo3(get)]
    pub converged: Option<bool>,
    #[pyo3(get)]
    pub iterations: Option<usize>,
    text: String,
}

#[pymethods]
impl PySummary {
    /// Selected sentences joined with a space
    #[getter]
    fn text(&self) -> String {
        self.text.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "Summary(sentences={}, total_sentences={}, algorithm='{}')",
            self.sentences.len(),
            self.total_sentences,
            self.algorithm
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }

    fn __len__(&self) -> usize {
        self.sentences.len()
    }

    fn __getitem__(&self, idx: usize) -> PyResult<PySummarySentence> {
        self.sentences
            .get(idx)
            .cloned()
            .ok_or_else(|| pyo3::exceptions::PyIndexError::new_err("index out of range"))
    }
}

impl From<Summary> for PySummary {
    fn from(summary: Summary) -> Self {
        let text = summary.text();
        Self {
            algorithm: summary.algorithm.as_str().to_string(),
            converged: summary.convergence.map(|c| c.converged),
            iterations: summary.convergence.map(|c| c.iterations),
            total_sentences: summary.total_sentences,
            sentences: summary
                .sentences
                .into_iter()
                .map(PySummarySentence::from)
                .collect(),
            keywords: summary.keywords.into_iter().map(PyKeyword::from).collect(),
            text,
        }
    }
}

/// Get the stopword list for a language (`"builtin"` for the default list).
#[pyfunction]
#[pyo3(signature = (language = "builtin"))]
pub fn get_stopwords(language: &str) -> PyResult<Vec<String>> {
    Ok(StopwordFilter::built_in_list(language))
}

/// Configuration for summarization
#[pyclass(name = "SummaryConfig")]
#[derive(Clone)]
pub struct PySummaryConfig {
    inner: SummaryConfig,
}

#[pymethods]
impl PySummaryConfig {
    /// `summary_length` accepts an int (count), a float (proportion) or a
    /// string such as `"25%"`. Out-of-range values are clamped, never
    /// rejected; negative counts become 0.
    #[new]
    #[pyo3(signature = (
        algorithm="graph",
        summary_length=None,
        keyword_count=10,
        keyword_mode="words",
        similarity_threshold=0.1,
        damping=0.85,
        max_iterations=100,
        convergence_epsilon=1e-6,
        language=None,
        stopwords=None,
        allow_digits=true,
        allow_apostrophes=true,
        min_token_length=1,
        split_phrases_on_punctuation=false
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        algorithm: &str,
        summary_length: Option<&Bound<'_, PyAny>>,
        keyword_count: i64,
        keyword_mode: &str,
        similarity_threshold: f64,
        damping: f64,
        max_iterations: i64,
        convergence_epsilon: f64,
        language: Option<String>,
        stopwords: Option<Vec<String>>,
        allow_digits: bool,
        allow_apostrophes: bool,
        min_token_length: i64,
        split_phrases_on_punctuation: bool,
    ) -> PyResult<Self> {
        let length = match summary_length {
            None => SummaryLength::default(),
            Some(value) => parse_length(value)?,
        };

        // FromStr on the enums is infallible
        let algorithm: Algorithm = algorithm.parse().unwrap_or_default();
        let keyword_mode: KeywordMode = keyword_mode.parse().unwrap_or_default();

        let config = SummaryConfig {
            algorithm,
            summary_length: length,
            keyword_count: non_negative(keyword_count),
            keyword_mode,
            similarity_threshold,
            damping,
            max_iterations: non_negative(max_iterations),
            convergence_epsilon,
            language,
            stopwords: stopwords.unwrap_or_default(),
            allow_digits,
            allow_apostrophes,
            min_token_length: non_negative(min_token_length),
            split_phrases_on_punctuation,
        };

        Ok(Self {
            inner: config.sanitized(),
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "SummaryConfig(algorithm='{}', summary_length={:?}, keyword_count={})",
            self.inner.algorithm.as_str(),
            self.inner.summary_length,
            self.inner.keyword_count
        )
    }
}

fn non_negative(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

fn parse_length(value: &Bound<'_, PyAny>) -> PyResult<SummaryLength> {
    if let Ok(count) = value.extract::<usize>() {
        return Ok(SummaryLength::Count(count));
    }
    if let Ok(number) = value.extract::<f64>() {
        return Ok(SummaryLength::from_number(number));
    }
    let text: String = value.extract()?;
    text.parse::<SummaryLength>()
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Extractive summarizer
#[pyclass(name = "Summarizer")]
pub struct PySummarizer {
    inner: Summarizer,
}

#[pymethods]
impl PySummarizer {
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<PySummaryConfig>) -> Self {
        Self {
            inner: Summarizer::new(config.map(|c| c.inner).unwrap_or_default()),
        }
    }

    /// Summarize text
    #[pyo3(signature = (text))]
    fn summarize(&self, text: &str) -> PySummary {
        self.inner.summarize(text).into()
    }

    /// Extract keywords; `mode` is `"words"` or `"phrases"`
    #[pyo3(signature = (text, top_k=None, mode=None))]
    fn extract_keywords(
        &self,
        text: &str,
        top_k: Option<i64>,
        mode: Option<&str>,
    ) -> Vec<PyKeyword> {
        let config = self.inner.config();
        let mode = mode
            .map(|m| m.parse::<KeywordMode>().unwrap_or_default())
            .unwrap_or(config.keyword_mode);
        self.inner
            .extract_keywords(
                text,
                top_k.map(non_negative).unwrap_or(config.keyword_count),
                mode,
            )
            .into_iter()
            .map(PyKeyword::from)
            .collect()
    }

    /// Split text into sentences
    fn sentences(&self, text: &str) -> Vec<String> {
        self.inner
            .segment_and_vectorize(text)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Summarizer(algorithm='{}')",
            self.inner.config().algorithm.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_counts_clamp_to_zero() {
        assert_eq!(non_negative(-4), 0);
        assert_eq!(non_negative(0), 0);
        assert_eq!(non_negative(25), 25);
    }

    #[test]
    fn test_out_of_range_config_still_summarizes() {
        // The values a caller could pass to the constructor: none of them
        // should stop a summary from being produced.
        let config = SummaryConfig {
            damping: 1.5,
            similarity_threshold: -0.3,
            max_iterations: non_negative(-1),
            keyword_count: non_negative(-2),
            min_token_length: non_negative(-3),
            ..SummaryConfig::default()
        }
        .sanitized();

        assert!((config.damping - 1.0).abs() < 1e-12);
        assert_eq!(config.similarity_threshold, 0.0);
        assert_eq!(config.max_iterations, 0);
        assert_eq!(config.min_token_length, 1);

        let summary = PySummary::from(
            Summarizer::new(config).summarize("One idea here. Another idea there. A third."),
        );
        assert_eq!(summary.sentences.len(), 3);
        assert!(summary.keywords.is_empty());
        assert_eq!(summary.converged, Some(false));
    }
}
