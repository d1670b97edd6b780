//! Keyword extraction with degree/frequency word scores
//!
//! Candidate phrases are maximal non-stopword runs over the whole text. Each
//! word occurrence adds 1 to the word's frequency and the phrase's distinct
//! word count to its degree; a word scores `degree / frequency`. Phrases
//! score the sum of their words' scores.

use super::chunker::{CandidatePhrase, PhraseChunker};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::KeywordMode;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// An extracted keyword (a single word or a phrase)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Lowercased word, or phrase words joined with single spaces
    pub text: String,
    pub score: f64,
    /// Occurrences in the text
    pub frequency: usize,
    /// Co-occurrence degree (summed over member words for phrases)
    pub degree: usize,
    /// 1-indexed rank
    pub rank: usize,
}

#[derive(Debug)]
struct WordStat {
    frequency: usize,
    degree: usize,
}

impl WordStat {
    fn score(&self) -> f64 {
        if self.frequency == 0 {
            0.0
        } else {
            self.degree as f64 / self.frequency as f64
        }
    }
}

/// Word statistics in first-encounter order
#[derive(Debug, Default)]
struct WordTable {
    index: FxHashMap<String, usize>,
    words: Vec<(String, WordStat)>,
}

impl WordTable {
    fn from_phrases(phrases: &[CandidatePhrase]) -> Self {
        let mut table = Self::default();
        for phrase in phrases {
            let degree = phrase.distinct_words();
            // Every occurrence adds the phrase degree, repeats inside one
            // phrase included.
            for word in &phrase.words {
                let stat = table.entry(word);
                stat.frequency += 1;
                stat.degree += degree;
            }
        }
        table
    }

    fn entry(&mut self, word: &str) -> &mut WordStat {
        let idx = match self.index.get(word) {
            Some(&idx) => idx,
            None => {
                let idx = self.words.len();
                self.index.insert(word.to_string(), idx);
                self.words.push((
                    word.to_string(),
                    WordStat {
                        frequency: 0,
                        degree: 0,
                    },
                ));
                idx
            }
        };
        &mut self.words[idx].1
    }

    fn get(&self, word: &str) -> Option<&WordStat> {
        self.index.get(word).map(|&idx| &self.words[idx].1)
    }
}

/// Keyword extractor combining tokenization, chunking and scoring
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    chunker: PhraseChunker,
}

impl KeywordExtractor {
    /// Create an extractor with the default tokenizer and English stopwords
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Use a custom stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Use a custom phrase chunker
    pub fn with_chunker(mut self, chunker: PhraseChunker) -> Self {
        self.chunker = chunker;
        self
    }

    /// Candidate phrases of `text`, in document order
    pub fn candidates(&self, text: &str) -> Vec<CandidatePhrase> {
        let words = self.tokenizer.words(text);
        self.chunker.chunk(text, &words, &self.stopwords)
    }

    /// Extract the top `top_k` keywords of `text`
    ///
    /// Ties keep first-encounter order.
    pub fn extract(&self, text: &str, top_k: usize, mode: KeywordMode) -> Vec<Keyword> {
        if top_k == 0 {
            return Vec::new();
        }

        let phrases = self.candidates(text);
        let table = WordTable::from_phrases(&phrases);

        let mut keywords = match mode {
            KeywordMode::Words => word_keywords(&table),
            KeywordMode::Phrases => phrase_keywords(&phrases, &table),
        };

        // Stable: equal scores keep first-encounter order
        keywords.sort_by(|a, b| b.score.total_cmp(&a.score));
        keywords.truncate(top_k);

        for (i, keyword) in keywords.iter_mut().enumerate() {
            keyword.rank = i + 1;
        }

        keywords
    }
}

fn word_keywords(table: &WordTable) -> Vec<Keyword> {
    table
        .words
        .iter()
        .map(|(word, stat)| Keyword {
            text: word.clone(),
            score: stat.score(),
            frequency: stat.frequency,
            degree: stat.degree,
            rank: 0,
        })
        .collect()
}

fn phrase_keywords(phrases: &[CandidatePhrase], table: &WordTable) -> Vec<Keyword> {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut keywords: Vec<Keyword> = Vec::new();

    for phrase in phrases {
        let text = phrase.text();
        if let Some(&idx) = index.get(&text) {
            keywords[idx].frequency += 1;
            continue;
        }

        let (score, degree) = phrase
            .words
            .iter()
            .filter_map(|w| table.get(w))
            .fold((0.0, 0), |(score, degree), stat| {
                (score + stat.score(), degree + stat.degree)
            });

        index.insert(text.clone(), keywords.len());
        keywords.push(Keyword {
            text,
            score,
            frequency: 1,
            degree,
            rank: 0,
        });
    }

    keywords
}

/// Extract keyword strings with the default tokenizer and English stopwords
pub fn extract_keywords(text: &str, top_k: usize, mode: KeywordMode) -> Vec<String> {
    KeywordExtractor::new()
        .extract(text, top_k, mode)
        .into_iter()
        .map(|k| k.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE_TEXT: &str = "AI applications range from healthcare to finance.";

    #[test]
    fn test_phrase_mode_ranks_longest_run_first() {
        let keywords = KeywordExtractor::new().extract(RANGE_TEXT, 10, KeywordMode::Phrases);

        let texts: Vec<_> = keywords.iter().map(|k| k.text.as_str()).collect();
        assert_eq!(texts, vec!["ai applications range", "healthcare", "finance"]);
        assert!((keywords[0].score - 9.0).abs() < 1e-12);
        assert!((keywords[1].score - 1.0).abs() < 1e-12);
        assert_eq!(keywords[0].degree, 9);
    }

    #[test]
    fn test_word_mode_scores() {
        let keywords = KeywordExtractor::new().extract(RANGE_TEXT, 10, KeywordMode::Words);

        let texts: Vec<_> = keywords.iter().map(|k| k.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["ai", "applications", "range", "healthcare", "finance"]
        );
        assert!((keywords[0].score - 3.0).abs() < 1e-12);
        assert_eq!(keywords[0].frequency, 1);
        assert_eq!(keywords[0].degree, 3);
    }

    #[test]
    fn test_degree_accumulates_per_occurrence() {
        // "data" appears in a 2-word phrase and alone:
        // freq 2, degree 2 + 1 = 3, score 1.5
        let keywords =
            KeywordExtractor::new().extract("big data and data", 10, KeywordMode::Words);
        let data = keywords.iter().find(|k| k.text == "data").unwrap();
        assert_eq!(data.frequency, 2);
        assert_eq!(data.degree, 3);
        assert!((data.score - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_word_repeated_within_phrase() {
        // One phrase with two distinct words; "data" occurs twice in it.
        let keywords =
            KeywordExtractor::new().extract("data data pipeline", 10, KeywordMode::Words);
        let data = keywords.iter().find(|k| k.text == "data").unwrap();
        assert_eq!(data.frequency, 2);
        assert_eq!(data.degree, 4);
        assert!((data.score - 2.0).abs() < 1e-12);

        let pipeline = keywords.iter().find(|k| k.text == "pipeline").unwrap();
        assert_eq!(pipeline.degree, 2);
    }

    #[test]
    fn test_repeated_phrase_counted_once() {
        let keywords = KeywordExtractor::new().extract(
            "machine learning and machine learning",
            10,
            KeywordMode::Phrases,
        );
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].text, "machine learning");
        assert_eq!(keywords[0].frequency, 2);
    }

    #[test]
    fn test_top_k_and_ranks() {
        let keywords = KeywordExtractor::new().extract(RANGE_TEXT, 2, KeywordMode::Words);
        assert_eq!(keywords.len(), 2);
        for (i, k) in keywords.iter().enumerate() {
            assert_eq!(k.rank, i + 1);
        }
        assert!(KeywordExtractor::new()
            .extract(RANGE_TEXT, 0, KeywordMode::Words)
            .is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_keywords("", 5, KeywordMode::Words).is_empty());
        assert!(extract_keywords("   \n ", 5, KeywordMode::Phrases).is_empty());
    }

    #[test]
    fn test_custom_stopwords() {
        let extractor =
            KeywordExtractor::new().with_stopwords(StopwordFilter::from_list(&["range"]));
        let texts: Vec<_> = extractor
            .extract("AI applications range widely", 10, KeywordMode::Phrases)
            .into_iter()
            .map(|k| k.text)
            .collect();
        assert_eq!(texts, vec!["ai applications", "widely"]);
    }

    #[test]
    fn test_free_function_returns_strings() {
        assert_eq!(
            extract_keywords(RANGE_TEXT, 1, KeywordMode::Phrases),
            vec!["ai applications range".to_string()]
        );
    }
}
