//! JSON request/response payloads and batch processing
//!
//! Every request is independent, so batches fan out across the rayon pool
//! and come back in input order.

use crate::errors::Result;
use crate::phrase::extraction::Keyword;
use crate::ranking::Convergence;
use crate::summarizer::{Summarizer, Summary, SummarySentence};
use crate::types::{Algorithm, SummaryConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Input document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub text: String,
    /// Missing fields take their defaults
    #[serde(default)]
    pub config: Option<SummaryConfig>,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: SummaryConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Output result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Selected sentences joined with a space
    pub summary: String,
    pub sentences: Vec<SummarySentence>,
    pub keywords: Vec<Keyword>,
    pub total_sentences: usize,
    pub algorithm: Algorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convergence: Option<Convergence>,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            summary: summary.text(),
            sentences: summary.sentences,
            keywords: summary.keywords,
            total_sentences: summary.total_sentences,
            algorithm: summary.algorithm,
            convergence: summary.convergence,
        }
    }
}

/// Summarize one request
pub fn process(request: &SummaryRequest) -> SummaryResponse {
    let config = request.config.clone().unwrap_or_default();
    Summarizer::new(config).summarize(&request.text).into()
}

/// Summarize many requests on the rayon pool; results keep input order
pub fn summarize_batch(requests: &[SummaryRequest]) -> Vec<SummaryResponse> {
    requests.par_iter().map(process).collect()
}

/// Summarize a JSON-encoded [`SummaryRequest`]
pub fn summarize_json(json_input: &str) -> Result<String> {
    let request: SummaryRequest = serde_json::from_str(json_input)?;
    Ok(serde_json::to_string(&process(&request))?)
}

/// Summarize a JSON array of [`SummaryRequest`]s
pub fn summarize_batch_json(json_input: &str) -> Result<String> {
    let requests: Vec<SummaryRequest> = serde_json::from_str(json_input)?;
    Ok(serde_json::to_string(&summarize_batch(&requests))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SummaryError;

    const SAMPLE: &str = "Artificial intelligence is transforming industries. \
        It enables new technologies and improves efficiency. \
        However, ethical challenges remain. \
        AI applications range from healthcare to finance.";

    #[test]
    fn test_summarize_json_simple() {
        let input = serde_json::json!({
            "text": SAMPLE,
            "config": {"algorithm": "simple", "summaryLength": 2}
        });
        let output = summarize_json(&input.to_string()).unwrap();
        let response: SummaryResponse = serde_json::from_str(&output).unwrap();

        assert_eq!(response.algorithm, Algorithm::Simple);
        assert_eq!(response.total_sentences, 4);
        assert_eq!(
            response.summary,
            "Artificial intelligence is transforming industries. \
             It enables new technologies and improves efficiency."
        );
        assert!(response.convergence.is_none());
    }

    #[test]
    fn test_whole_float_length_is_a_count() {
        let input = r#"{"text": "%T", "config": {"algorithm": "simple", "summaryLength": 2.0}}"#
            .replace("%T", SAMPLE);
        let output = summarize_json(&input).unwrap();
        let response: SummaryResponse = serde_json::from_str(&output).unwrap();

        assert_eq!(response.sentences.len(), 2);
        assert_eq!(response.sentences[1].index, 1);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let output = summarize_json(r#"{"text": "One sentence only."}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["algorithm"], "graph");
        assert_eq!(value["summary"], "One sentence only.");
        assert!(value["convergence"]["converged"].as_bool().unwrap());
    }

    #[test]
    fn test_lenient_numbers_are_clamped() {
        let input = r#"{"text": "A b c. D e f.", "config": {"keyword_count": -4, "max_iterations": 2.7}}"#;
        let output = summarize_json(input).unwrap();
        let response: SummaryResponse = serde_json::from_str(&output).unwrap();

        assert!(response.keywords.is_empty());
        assert!(response.convergence.unwrap().iterations <= 2);
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = summarize_json("{not json").unwrap_err();
        assert!(matches!(err, SummaryError::Serialization { .. }));
    }

    #[test]
    fn test_batch_preserves_order() {
        let requests: Vec<SummaryRequest> = (0..8)
            .map(|i| SummaryRequest::new(format!("Document number {i} is here.")))
            .collect();
        let responses = summarize_batch(&requests);

        assert_eq!(responses.len(), 8);
        for (i, response) in responses.iter().enumerate() {
            assert_eq!(response.summary, format!("Document number {i} is here."));
        }
    }

    #[test]
    fn test_batch_json() {
        let input = serde_json::json!([
            {"text": SAMPLE, "config": {"algorithm": "simple", "summary_length": 1}},
            {"text": ""}
        ]);
        let output = summarize_batch_json(&input.to_string()).unwrap();
        let responses: Vec<SummaryResponse> = serde_json::from_str(&output).unwrap();

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].sentences.len(), 1);
        assert_eq!(responses[0].sentences[0].index, 0);
        assert_eq!(responses[1].total_sentences, 0);
        assert_eq!(responses[1].summary, "");
    }

    #[test]
    fn test_batch_json_rejects_object() {
        assert!(summarize_batch_json(r#"{"text": "x"}"#).is_err());
    }
}
