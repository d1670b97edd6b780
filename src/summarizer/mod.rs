//! Extractive summarization facade
//!
//! [`Summarizer`] runs the whole pipeline: segment, tokenize and vectorize,
//! extract keywords, build the similarity graph (graph strategy only), rank,
//! then select the top sentences in document order.

pub mod selector;

pub use selector::SentenceSelector;

use crate::graph::similarity::SimilarityMatrix;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::phrase::chunker::PhraseChunker;
use crate::phrase::extraction::{Keyword, KeywordExtractor};
use crate::ranking::{Convergence, RankInput, RankOutput, Ranker, SentenceRanker};
use crate::types::{Algorithm, KeywordMode, Sentence, SummaryConfig};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_KEYWORDS: &str = "keywords";
pub const STAGE_SIMILARITY: &str = "similarity";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

// ============================================================================
// Summary
// ============================================================================

/// A selected sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySentence {
    /// Position in the document (0-based)
    pub index: usize,
    /// Sentence text exactly as it appears in the source (trimmed)
    pub text: String,
    /// Ranking score
    pub score: f64,
    /// Byte offsets into the source text
    pub start: usize,
    pub end: usize,
}

/// Result of summarizing one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences in document order
    pub sentences: Vec<SummarySentence>,
    /// Extracted keywords, best first
    pub keywords: Vec<Keyword>,
    /// Number of sentences the document was split into
    pub total_sentences: usize,
    pub algorithm: Algorithm,
    /// PageRank diagnostics (graph strategy only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convergence: Option<Convergence>,
}

impl Summary {
    /// Selected sentences joined with a single space
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

// ============================================================================
// Summarizer
// ============================================================================

/// Extractive summarizer
///
/// Holds only immutable state, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummaryConfig,
    segmenter: SentenceSegmenter,
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    extractor: KeywordExtractor,
    ranker: SentenceRanker,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(SummaryConfig::default())
    }
}

impl Summarizer {
    /// Create a summarizer; out-of-range config values are clamped.
    pub fn new(config: SummaryConfig) -> Self {
        let config = config.sanitized();

        let tokenizer = Tokenizer::new()
            .with_digits(config.allow_digits)
            .with_apostrophes(config.allow_apostrophes)
            .with_min_length(config.min_token_length);
        let stopwords = StopwordFilter::for_language(config.language.as_deref(), &config.stopwords);
        let extractor = KeywordExtractor::new()
            .with_tokenizer(tokenizer.clone())
            .with_stopwords(stopwords.clone())
            .with_chunker(
                PhraseChunker::new().with_punctuation_split(config.split_phrases_on_punctuation),
            );
        let ranker = SentenceRanker::from_config(&config);

        Self {
            config,
            segmenter: SentenceSegmenter::new(),
            tokenizer,
            stopwords,
            extractor,
            ranker,
        }
    }

    /// The effective (sanitized) configuration
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Split `text` into sentences with their tokens and frequency vectors
    pub fn segment_and_vectorize(&self, text: &str) -> Vec<Sentence> {
        self.segmenter
            .boundaries(text)
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| {
                let sentence = &text[start..end];
                let tokens = self.tokenizer.tokens(sentence, &self.stopwords);
                Sentence::new(index, sentence, start, end, tokens)
            })
            .collect()
    }

    /// Thresholded similarity matrix over `sentences`
    pub fn build_similarity(&self, sentences: &[Sentence]) -> SimilarityMatrix {
        SimilarityMatrix::build(sentences, self.config.similarity_threshold)
    }

    /// Score `sentences` with the configured strategy
    pub fn rank(
        &self,
        sentences: &[Sentence],
        similarity: Option<&SimilarityMatrix>,
        keywords: Option<&[String]>,
    ) -> RankOutput {
        self.ranker.rank(&RankInput {
            sentences,
            similarity,
            keywords,
        })
    }

    /// Top `top_k` keywords of `text`
    pub fn extract_keywords(&self, text: &str, top_k: usize, mode: KeywordMode) -> Vec<Keyword> {
        self.extractor.extract(text, top_k, mode)
    }

    /// Summarize `text`
    pub fn summarize(&self, text: &str) -> Summary {
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            self.segment_and_vectorize(text)
        };

        let keywords = {
            trace_stage!(STAGE_KEYWORDS);
            self.extract_keywords(text, self.config.keyword_count, self.config.keyword_mode)
        };

        let similarity = match self.config.algorithm {
            Algorithm::Graph => {
                trace_stage!(STAGE_SIMILARITY);
                Some(self.build_similarity(&sentences))
            }
            _ => None,
        };

        let ranked = {
            trace_stage!(STAGE_RANK);
            // The overlap strategy always matches against single words.
            let ranking_words: Option<Vec<String>> = match self.config.algorithm {
                Algorithm::Keywords => Some(match self.config.keyword_mode {
                    KeywordMode::Words => keywords.iter().map(|k| k.text.clone()).collect(),
                    KeywordMode::Phrases => self
                        .extract_keywords(text, self.config.keyword_count, KeywordMode::Words)
                        .into_iter()
                        .map(|k| k.text)
                        .collect(),
                }),
                _ => None,
            };
            self.rank(&sentences, similarity.as_ref(), ranking_words.as_deref())
        };

        let selected = {
            trace_stage!(STAGE_SELECT);
            let k = self.config.summary_length.resolve(sentences.len());
            SentenceSelector::select(&ranked.scores, k)
        };

        let chosen = selected
            .into_iter()
            .map(|i| {
                let sentence = &sentences[i];
                SummarySentence {
                    index: sentence.index,
                    text: sentence.text.clone(),
                    score: ranked.scores[i],
                    start: sentence.start,
                    end: sentence.end,
                }
            })
            .collect();

        Summary {
            sentences: chosen,
            keywords,
            total_sentences: sentences.len(),
            algorithm: self.config.algorithm,
            convergence: ranked.convergence,
        }
    }
}

/// Summarize `text` with `config`
pub fn summarize(text: &str, config: &SummaryConfig) -> Summary {
    Summarizer::new(config.clone()).summarize(text)
}
