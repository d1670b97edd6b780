//! Candidate phrase detection
//!
//! A candidate phrase is a maximal run of consecutive non-stopword words.
//! Runs cross sentence boundaries unless punctuation splitting is enabled.

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::WordToken;

/// A candidate phrase: its normalized words and byte span in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePhrase {
    pub words: Vec<String>,
    pub start: usize,
    pub end: usize,
}

impl CandidatePhrase {
    /// Words joined with single spaces
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Number of distinct words in the phrase
    pub fn distinct_words(&self) -> usize {
        let mut seen: Vec<&str> = Vec::with_capacity(self.words.len());
        for word in &self.words {
            if !seen.contains(&word.as_str()) {
                seen.push(word);
            }
        }
        seen.len()
    }
}

/// Splits a word sequence into candidate phrases at stopwords
#[derive(Debug, Clone, Default)]
pub struct PhraseChunker {
    /// Also split where the gap between two words holds punctuation
    split_on_punctuation: bool,
}

impl PhraseChunker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether punctuation between two words ends a phrase
    pub fn with_punctuation_split(mut self, split: bool) -> Self {
        self.split_on_punctuation = split;
        self
    }

    /// Group `words` (in document order, stopwords included) into candidate
    /// phrases. `text` is the source the word offsets point into.
    pub fn chunk(
        &self,
        text: &str,
        words: &[WordToken],
        stopwords: &StopwordFilter,
    ) -> Vec<CandidatePhrase> {
        let mut phrases = Vec::new();
        let mut current: Vec<&WordToken> = Vec::new();

        for word in words {
            if stopwords.is_stopword(&word.text) {
                flush(&mut current, &mut phrases);
                continue;
            }

            if self.split_on_punctuation {
                if let Some(prev) = current.last() {
                    let gap = text.get(prev.end..word.start).unwrap_or("");
                    if gap.chars().any(is_phrase_break) {
                        flush(&mut current, &mut phrases);
                    }
                }
            }

            current.push(word);
        }
        flush(&mut current, &mut phrases);

        phrases
    }
}

fn flush(current: &mut Vec<&WordToken>, phrases: &mut Vec<CandidatePhrase>) {
    if let (Some(first), Some(last)) = (current.first(), current.last()) {
        phrases.push(CandidatePhrase {
            words: current.iter().map(|w| w.text.clone()).collect(),
            start: first.start,
            end: last.end,
        });
    }
    current.clear();
}

fn is_phrase_break(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | ';' | ':' | '!' | '?' | '(' | ')' | '[' | ']' | '"' | '…' | '“' | '”'
    )
}
