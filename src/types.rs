//! Core types for rapid_summary
//!
//! This module defines the per-call sentence representation, the ranking
//! strategy tags, and the user-facing configuration.

use crate::errors::{Result, SummaryError};
use crate::pagerank::standard::StandardPageRank;
use crate::vector::TermVector;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
///
/// Built once per summarization call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Position in the document (0-based)
    pub index: usize,
    /// The trimmed sentence text, including trailing punctuation
    pub text: String,
    /// Start byte offset in the original text
    pub start: usize,
    /// End byte offset in the original text (exclusive)
    pub end: usize,
    /// Normalized content tokens (stopwords removed), in order
    pub tokens: Vec<String>,
    /// Term-frequency vector over `tokens`
    pub frequencies: TermVector,
}

impl Sentence {
    /// Create a new sentence, deriving its frequency vector from `tokens`
    pub fn new(
        index: usize,
        text: impl Into<String>,
        start: usize,
        end: usize,
        tokens: Vec<String>,
    ) -> Self {
        let frequencies = TermVector::from_tokens(&tokens);
        Self {
            index,
            text: text.into(),
            start,
            end,
            tokens,
            frequencies,
        }
    }

    /// Number of retained (non-stopword) tokens
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

// ============================================================================
// Algorithm
// ============================================================================

/// Sentence ranking strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Score = number of retained tokens
    Frequency,
    /// Positional: the first sentences win
    #[serde(alias = "position", alias = "lead")]
    Simple,
    /// Score = overlap with the extracted keyword list
    #[serde(alias = "keyword")]
    Keywords,
    /// TextRank: PageRank over the sentence similarity graph
    #[default]
    #[serde(alias = "textrank", alias = "pagerank")]
    Graph,
}

impl Algorithm {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "frequency" | "freq" => Algorithm::Frequency,
            "simple" | "position" | "lead" => Algorithm::Simple,
            "keywords" | "keyword" => Algorithm::Keywords,
            "graph" | "textrank" | "text_rank" | "pagerank" => Algorithm::Graph,
            _ => Algorithm::default(),
        }
    }

    /// Name used in JSON and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Frequency => "frequency",
            Algorithm::Simple => "simple",
            Algorithm::Keywords => "keywords",
            Algorithm::Graph => "graph",
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Algorithm::parse(value))
    }
}

// ============================================================================
// Keyword mode
// ============================================================================

/// Whether the keyword extractor returns single words or whole phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMode {
    #[default]
    #[serde(alias = "word")]
    Words,
    #[serde(alias = "phrase")]
    Phrases,
}

impl KeywordMode {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "phrases" | "phrase" => KeywordMode::Phrases,
            _ => KeywordMode::Words,
        }
    }
}

impl std::str::FromStr for KeywordMode {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(KeywordMode::parse(value))
    }
}

// ============================================================================
// Summary length
// ============================================================================

/// Requested summary size, either an absolute sentence count or a fraction
/// of the document's sentence count.
///
/// In JSON an integer is a count (`3`) and a fraction is a proportion
/// (`0.25`). Whole floats above 1 (`2.0`, as many JSON encoders write
/// numbers) are counts; `1.0` stays the full-document proportion. Strings
/// such as `"25%"` are also accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummaryLength {
    Count(usize),
    Proportion(f64),
}

impl Default for SummaryLength {
    fn default() -> Self {
        SummaryLength::Count(3)
    }
}

impl SummaryLength {
    /// Interpret a bare number: a whole value above 1 is a count, anything
    /// else a proportion.
    pub fn from_number(value: f64) -> Self {
        if value > 1.0 && value.fract() == 0.0 && value <= usize::MAX as f64 {
            SummaryLength::Count(value as usize)
        } else {
            SummaryLength::Proportion(value)
        }
    }

    /// Resolve to a concrete sentence count for a document of `total`
    /// sentences.
    ///
    /// The result is clamped to `[1, total]`; it is 0 only when `total` is 0.
    pub fn resolve(&self, total: usize) -> usize {
        if total == 0 {
            return 0;
        }

        let k = match *self {
            SummaryLength::Count(k) => k,
            SummaryLength::Proportion(p) => {
                let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
                (p * total as f64).round() as usize
            }
        };

        k.clamp(1, total)
    }
}

impl std::str::FromStr for SummaryLength {
    type Err = SummaryError;

    /// Parses `"3"`, `"0.25"` or `"25%"`.
    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();

        if let Some(percent) = value.strip_suffix('%') {
            return percent
                .trim()
                .parse::<f64>()
                .map(|p| SummaryLength::Proportion(p / 100.0))
                .map_err(|_| {
                    SummaryError::invalid_config(format!("invalid summary percentage: {value}"))
                });
        }

        if let Ok(count) = value.parse::<usize>() {
            return Ok(SummaryLength::Count(count));
        }

        value
            .parse::<f64>()
            .map(SummaryLength::from_number)
            .map_err(|_| SummaryError::invalid_config(format!("invalid summary length: {value}")))
    }
}

struct SummaryLengthVisitor;

impl<'de> Visitor<'de> for SummaryLengthVisitor {
    type Value = SummaryLength;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sentence count, a proportion, or a percentage string")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Self::Value, E> {
        Ok(SummaryLength::Count(usize::try_from(value).unwrap_or(usize::MAX)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Self::Value, E> {
        // Negative counts fall through to a proportion, which resolves to the
        // one-sentence minimum.
        Ok(match usize::try_from(value) {
            Ok(count) => SummaryLength::Count(count),
            Err(_) => SummaryLength::Proportion(value as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Self::Value, E> {
        Ok(SummaryLength::from_number(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for SummaryLength {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SummaryLengthVisitor)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a summarization call
///
/// Field names accept both `snake_case` and the `camelCase` spelling used by
/// front-end callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Sentence ranking strategy
    pub algorithm: Algorithm,
    /// Number (or proportion) of sentences to keep
    #[serde(alias = "summaryLength")]
    pub summary_length: SummaryLength,
    /// Number of keywords to extract (also the keyword list size used by
    /// the keyword-overlap ranker)
    #[serde(alias = "keywordCount", deserialize_with = "clamped_count")]
    pub keyword_count: usize,
    /// Whether extracted keywords are single words or phrases
    #[serde(alias = "keywordMode")]
    pub keyword_mode: KeywordMode,
    /// Similarity values below this are dropped from the sentence graph
    #[serde(alias = "similarityThreshold")]
    pub similarity_threshold: f64,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank
    #[serde(alias = "maxIterations", deserialize_with = "clamped_count")]
    pub max_iterations: usize,
    /// Stop when the L1 change between iterations drops below this
    #[serde(alias = "convergenceEpsilon")]
    pub convergence_epsilon: f64,
    /// Stopword language code; `None` uses the built-in English list
    pub language: Option<String>,
    /// Additional stopwords (extends the active list)
    pub stopwords: Vec<String>,
    /// Keep digits inside tokens
    #[serde(alias = "allowDigits")]
    pub allow_digits: bool,
    /// Keep inner apostrophes inside tokens ("don't")
    #[serde(alias = "allowApostrophes")]
    pub allow_apostrophes: bool,
    /// Minimum token length in characters
    #[serde(alias = "minTokenLength", deserialize_with = "clamped_count")]
    pub min_token_length: usize,
    /// Also break keyword phrases at punctuation, not only at stopwords
    #[serde(alias = "splitPhrasesOnPunctuation")]
    pub split_phrases_on_punctuation: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Graph,
            summary_length: SummaryLength::default(),
            keyword_count: 10,
            keyword_mode: KeywordMode::Words,
            similarity_threshold: 0.1,
            damping: 0.85,
            max_iterations: 100,
            convergence_epsilon: 1e-6,
            language: None,
            stopwords: Vec::new(),
            allow_digits: true,
            allow_apostrophes: true,
            min_token_length: 1,
            split_phrases_on_punctuation: false,
        }
    }
}

/// Accepts any JSON number for a count field, clamping negatives (and NaN)
/// to 0 and truncating fractions.
fn clamped_count<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_nan() || value <= 0.0 {
        Ok(0)
    } else {
        Ok(value as usize)
    }
}

fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl SummaryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with every out-of-range value clamped to the nearest
    /// valid one. NaN falls back to the default.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut cfg = self.clone();

        cfg.similarity_threshold =
            clamp_unit(self.similarity_threshold, defaults.similarity_threshold);
        cfg.damping = clamp_unit(self.damping, defaults.damping);
        cfg.convergence_epsilon = if self.convergence_epsilon.is_nan() {
            defaults.convergence_epsilon
        } else {
            self.convergence_epsilon.max(0.0)
        };
        if let SummaryLength::Proportion(p) = self.summary_length {
            if p.is_nan() {
                cfg.summary_length = defaults.summary_length;
            }
        }
        cfg.min_token_length = self.min_token_length.max(1);

        cfg
    }

    /// Strict validation, for callers that prefer rejecting bad input over
    /// clamping it. The pipeline itself never calls this.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummaryError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(SummaryError::invalid_config(format!(
                "similarity_threshold must be between 0 and 1, got {}",
                self.similarity_threshold
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummaryError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_epsilon > 0.0 && self.convergence_epsilon.is_finite()) {
            return Err(SummaryError::invalid_config(
                "convergence_epsilon must be a positive number",
            ));
        }

        if let SummaryLength::Proportion(p) = self.summary_length {
            if !(p > 0.0 && p <= 1.0) {
                return Err(SummaryError::invalid_config(format!(
                    "summary proportion must be in (0, 1], got {p}"
                )));
            }
        }

        if self.min_token_length == 0 {
            return Err(SummaryError::invalid_config("min_token_length must be > 0"));
        }

        Ok(())
    }

    /// PageRank settings derived from this config
    pub fn pagerank(&self) -> StandardPageRank {
        StandardPageRank::new()
            .with_damping(self.damping)
            .with_max_iterations(self.max_iterations)
            .with_threshold(self.convergence_epsilon)
    }

    /// Builder method: set ranking algorithm
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Builder method: set summary length
    pub fn with_summary_length(mut self, length: SummaryLength) -> Self {
        self.summary_length = length;
        self
    }

    /// Builder method: set keyword count
    pub fn with_keyword_count(mut self, count: usize) -> Self {
        self.keyword_count = count;
        self
    }

    /// Builder method: set keyword mode
    pub fn with_keyword_mode(mut self, mode: KeywordMode) -> Self {
        self.keyword_mode = mode;
        self
    }

    /// Builder method: set similarity threshold
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence epsilon
    pub fn with_convergence_epsilon(mut self, epsilon: f64) -> Self {
        self.convergence_epsilon = epsilon;
        self
    }

    /// Builder method: set stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: break keyword phrases at punctuation
    pub fn with_phrase_punctuation_split(mut self, split: bool) -> Self {
        self.split_phrases_on_punctuation = split;
        self
    }
}
