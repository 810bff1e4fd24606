//! Rule-based word and sentence tokenization.
//!
//! Stands in for the external tokenizer the pipeline depends on. The rules
//! are intentionally simple:
//!
//! - **Words**: whitespace split, with leading/trailing punctuation trimmed
//!   off each piece. Empty pieces are dropped.
//! - **Sentences**: split on runs of `.`, `!`, or `?` followed by whitespace
//!   (or end of text). Trimmed, empties dropped.
//!
//! Both functions return owned `String`s so downstream metric code does not
//! borrow the article text.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(\s+|$)").expect("sentence boundary regex"));

/// Split text into word tokens.
///
/// Surrounding punctuation is stripped (`"Hello,"` becomes `Hello`), interior
/// punctuation is kept (`don't`, `co-op`).
pub fn word_tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|piece| piece.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into sentence segments.
///
/// A sentence ends at a run of terminal punctuation (`.`, `!`, `?`) followed
/// by whitespace or the end of the text. Abbreviations like "U.S." will
/// over-split; acceptable for the readability averages this feeds.
pub fn sent_tokenize(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenize_strips_punctuation() {
        assert_eq!(
            word_tokenize("Hello, world! It's fine."),
            vec!["Hello", "world", "It's", "fine"]
        );
    }

    #[test]
    fn test_word_tokenize_keeps_interior_hyphens() {
        assert_eq!(word_tokenize("state-of-the-art (really)"), vec!["state-of-the-art", "really"]);
    }

    #[test]
    fn test_word_tokenize_empty() {
        assert!(word_tokenize("").is_empty());
        assert!(word_tokenize("  ... !!! ").is_empty());
    }

    #[test]
    fn test_sent_tokenize_basic() {
        let sentences = sent_tokenize("First one. Second one! Third one?");
        assert_eq!(sentences, vec!["First one", "Second one", "Third one"]);
    }

    #[test]
    fn test_sent_tokenize_ellipsis_is_one_boundary() {
        let sentences = sent_tokenize("Wait... what happened?");
        assert_eq!(sentences, vec!["Wait", "what happened"]);
    }

    #[test]
    fn test_sent_tokenize_no_terminal_punctuation() {
        // A bare fragment still counts as one sentence.
        assert_eq!(sent_tokenize("no punctuation here"), vec!["no punctuation here"]);
    }

    #[test]
    fn test_sent_tokenize_empty() {
        assert!(sent_tokenize("").is_empty());
        assert!(sent_tokenize("   ").is_empty());
    }
}
