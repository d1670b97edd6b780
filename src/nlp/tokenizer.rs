//! Unicode-aware word tokenization
//!
//! Words are found with UAX #29 word boundaries, then reduced to runs of
//! word characters (letters, plus digits and inner apostrophes when enabled)
//! and lowercased. Lowercasing uses `str::to_lowercase`, which does not
//! depend on the process locale.

use super::stopwords::StopwordFilter;
use unicode_segmentation::UnicodeSegmentation;

/// A normalized word with its byte span in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    /// Lowercased word text
    pub text: String,
    /// Start byte offset in the original text
    pub start: usize,
    /// End byte offset in the original text (exclusive)
    pub end: usize,
}

/// A Unicode-aware tokenizer following UAX #29
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Keep digits as word characters
    allow_digits: bool,
    /// Keep inner apostrophes as word characters ("don't")
    allow_apostrophes: bool,
    /// Minimum token length to consider (in chars)
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            allow_digits: true,
            allow_apostrophes: true,
            min_token_length: 1,
        }
    }

    /// Set whether digits count as word characters
    pub fn with_digits(mut self, allow: bool) -> Self {
        self.allow_digits = allow;
        self
    }

    /// Set whether inner apostrophes count as word characters
    pub fn with_apostrophes(mut self, allow: bool) -> Self {
        self.allow_apostrophes = allow;
        self
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length.max(1);
        self
    }

    /// All normalized words of `text`, in order, stopwords included
    pub fn words(&self, text: &str) -> Vec<WordToken> {
        let mut words = Vec::new();

        for (word_start, word) in text.unicode_word_indices() {
            let mut run_start: Option<usize> = None;

            for (i, c) in word.char_indices() {
                match (self.is_word_char(c), run_start) {
                    (true, None) => run_start = Some(i),
                    (false, Some(s)) => {
                        self.push_run(word, word_start, s, i, &mut words);
                        run_start = None;
                    }
                    _ => {}
                }
            }
            if let Some(s) = run_start {
                self.push_run(word, word_start, s, word.len(), &mut words);
            }
        }

        words
    }

    /// Normalized content tokens of `text`: `words` minus stopwords
    pub fn tokens(&self, text: &str, stopwords: &StopwordFilter) -> Vec<String> {
        self.words(text)
            .into_iter()
            .filter(|w| !stopwords.is_stopword(&w.text))
            .map(|w| w.text)
            .collect()
    }

    fn is_word_char(&self, c: char) -> bool {
        if is_apostrophe(c) {
            self.allow_apostrophes
        } else if c.is_numeric() {
            self.allow_digits
        } else {
            c.is_alphabetic() || is_combining_mark(c)
        }
    }

    fn push_run(
        &self,
        word: &str,
        word_start: usize,
        start: usize,
        end: usize,
        out: &mut Vec<WordToken>,
    ) {
        let run = &word[start..end];
        // Only inner apostrophes belong to a word: "students'" -> "students".
        let trimmed = run.trim_start_matches(is_apostrophe);
        let lead = run.len() - trimmed.len();
        let trimmed = trimmed.trim_end_matches(is_apostrophe);

        if !trimmed.chars().any(char::is_alphanumeric) {
            return;
        }
        if trimmed.chars().count() < self.min_token_length {
            return;
        }

        let abs_start = word_start + start + lead;
        out.push(WordToken {
            text: trimmed.to_lowercase().replace('’', "'"),
            start: abs_start,
            end: abs_start + trimmed.len(),
        });
    }
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '’')
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}
