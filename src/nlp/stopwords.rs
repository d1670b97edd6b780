//! Stopword filtering
//!
//! The default English list is a fixed, process-wide constant built once on
//! first use. Other languages are loaded from the `stop-words` crate on
//! request.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;
use stop_words::{get, LANGUAGE};

/// Built-in English stopword list
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "can't", "cannot", "could", "couldn't", "did",
    "didn't", "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "either",
    "else", "etc", "ever", "every", "few", "for", "from", "further", "had", "hadn't", "has",
    "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "however", "i",
    "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its",
    "itself", "just", "let's", "may", "me", "might", "more", "most", "must", "mustn't", "my",
    "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "shall", "shan't",
    "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such", "than",
    "that", "that's", "the", "their", "theirs", "them", "themselves", "then", "there",
    "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this", "those",
    "through", "thus", "to", "too", "under", "until", "up", "upon", "us", "very", "was",
    "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's",
    "when", "when's", "where", "where's", "whether", "which", "while", "who", "who's", "whom",
    "whose", "why", "why's", "will", "with", "within", "without", "won't", "would",
    "wouldn't", "yet", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

static ENGLISH: LazyLock<StopwordFilter> =
    LazyLock::new(|| StopwordFilter::from_list(ENGLISH_STOPWORDS));

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english().clone()
    }
}

impl StopwordFilter {
    /// The shared built-in English filter
    pub fn english() -> &'static StopwordFilter {
        &ENGLISH
    }

    /// Create a filter from the `stop-words` list for the given language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi,
    /// hu, tr, pl, ar. Unknown codes fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Build the filter a config asks for: the built-in English list when no
    /// language is given, the `stop-words` list otherwise, extended with
    /// `extra`.
    pub fn for_language(language: Option<&str>, extra: &[String]) -> Self {
        let mut filter = match language {
            None => Self::default(),
            Some(lang) => Self::new(lang),
        };
        for word in extra {
            filter.stopwords.insert(word.to_lowercase());
        }
        filter
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Sorted stopword list for a language (`"builtin"` selects the built-in
    /// English constant)
    pub fn built_in_list(language: &str) -> Vec<String> {
        let mut words: Vec<String> = match language.to_lowercase().as_str() {
            "builtin" | "default" => ENGLISH_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            _ => Self::load_stopwords(language).into_iter().collect(),
        };
        words.sort();
        words
    }

    /// Load stopwords for a language
    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_english() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("from"));
        assert!(filter.is_stopword("to"));
        assert!(filter.is_stopword("don't"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("healthcare"));
        assert!(!filter.is_stopword("ai"));
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = StopwordFilter::english() as *const StopwordFilter;
        let b = StopwordFilter::english() as *const StopwordFilter;
        assert_eq!(a, b);
        assert_eq!(StopwordFilter::default().len(), StopwordFilter::english().len());
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "Words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));
    }

    #[test]
    fn test_for_language_extends() {
        let extra = vec!["Rust".to_string()];
        let filter = StopwordFilter::for_language(None, &extra);
        assert!(filter.is_stopword("rust"));
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de");

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("maschine"));
    }

    #[test]
    fn test_built_in_list_sorted() {
        let list = StopwordFilter::built_in_list("builtin");
        assert_eq!(list.len(), ENGLISH_STOPWORDS.len());
        assert!(list.windows(2).all(|w| w[0] <= w[1]));
    }
}
