//! Sentence segmentation
//!
//! Built on UAX #29 sentence boundaries. Those also break after every
//! newline, so a piece only closes a sentence when it ends in terminal
//! punctuation followed by whitespace (or the end of the text); other pieces
//! are carried into the next one. Whitespace never produces a sentence.
//! Abbreviations such as "Dr." are not special-cased and will end a sentence
//! when followed by a capital.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into trimmed, non-empty sentence spans
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }

    /// Find sentence spans as `(start, end)` byte offsets into `text`
    ///
    /// Every span is trimmed and non-empty. Text without terminal
    /// punctuation is a single span.
    pub fn boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut start = 0;

        for (idx, piece) in text.split_sentence_bound_indices() {
            let end = idx + piece.len();
            if closes_sentence(piece, end == text.len()) {
                push_trimmed(text, start, end, &mut spans);
                start = end;
            }
        }

        push_trimmed(text, start, text.len(), &mut spans);
        spans
    }

    /// Split text into trimmed sentence slices
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.boundaries(text)
            .into_iter()
            .map(|(start, end)| &text[start..end])
            .collect()
    }
}

/// True when a UAX #29 piece ends a sentence: terminal punctuation (plus any
/// closers) followed by whitespace or the end of the text. Full-width
/// terminals need no following whitespace.
fn closes_sentence(piece: &str, at_end: bool) -> bool {
    let body = piece.trim_end();
    let Some(last) = body.trim_end_matches(is_closer).chars().next_back() else {
        return false;
    };

    if is_fullwidth_terminal(last) {
        return true;
    }
    is_terminal(last) && (at_end || body.len() < piece.len())
}

fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<(usize, usize)>) {
    if start >= end {
        return;
    }
    let segment = &text[start..end];
    let lead = segment.len() - segment.trim_start().len();
    let trail = segment.len() - segment.trim_end().len();
    let (s, e) = (start + lead, end - trail);
    if s < e {
        spans.push((s, e));
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…') || is_fullwidth_terminal(c)
}

fn is_fullwidth_terminal(c: char) -> bool {
    matches!(c, '。' | '！' | '？')
}

fn is_closer(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | '”' | '’' | ')' | ']' | '}' | '»' | '」' | '』'
    )
}
