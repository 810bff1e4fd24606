//! Readability and sentiment metric computations.
//!
//! Every function in this module is pure: it takes already-extracted text
//! and/or the token list produced by [`crate::tokenize`] and returns a number.
//! Nothing here performs I/O or talks to the network.
//!
//! # Fallibility
//!
//! The averages and ratios divide by word, token, or sentence counts that are
//! zero for empty or unparseable articles. Those return
//! `Result<f64, MetricsError>` instead of producing `inf`/`NaN`. The two
//! epsilon-guarded scores ([`polarity_score`], [`subjectivity_score`]) are
//! total functions and tend to `0.0` when their inputs are all zero.
//!
//! # Formula caveat
//!
//! [`fog_index`] adds a raw complex-word *count* to a per-sentence average
//! rather than a complex-word percentage. That deviates from the standard
//! Gunning-Fog formula but matches the observed behavior this tool reports,
//! so it is kept exactly as-is.

use crate::error::MetricsError;

/// Words whose character length exceeds this are "complex" by default.
pub const DEFAULT_COMPLEXITY_THRESHOLD: usize = 7;

/// Guard against division by zero in the polarity/subjectivity scores.
const EPSILON: f64 = 1e-6;

/// Toy positive-word lexicon, matched case-insensitively against tokens.
///
/// Deliberately tiny; the external intensity analyzer in
/// [`crate::sentiment`] carries the real lexicon. Both results are reported
/// as separate columns.
pub const POSITIVE_WORDS: &[&str] = &["good", "happy", "excellent", "positive"];

/// Toy negative-word lexicon, the counterpart of [`POSITIVE_WORDS`].
pub const NEGATIVE_WORDS: &[&str] = &["bad", "sad", "terrible", "negative"];

/// Personal pronouns counted by [`personal_pronoun_count`].
const PERSONAL_PRONOUNS: &[&str] = &["i", "we", "my", "ours", "us"];

/// Compute the fog index of a text.
///
/// Words are the whitespace-split pieces of `text`; a word is complex when
/// its character length exceeds `threshold`. The result is
/// `0.4 * (words_per_sentence + complex_word_count)` — note the complex term
/// is a raw count, not normalized per sentence.
///
/// # Arguments
///
/// * `text` - The full article text
/// * `sentence_count` - Number of sentences, as reported by the sentence splitter
/// * `threshold` - Character-length threshold for complex words
///
/// # Errors
///
/// [`MetricsError::EmptyText`] when `text` has no words,
/// [`MetricsError::NoSentences`] when `sentence_count` is zero.
pub fn fog_index(text: &str, sentence_count: usize, threshold: usize) -> Result<f64, MetricsError> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Err(MetricsError::EmptyText);
    }
    if sentence_count == 0 {
        return Err(MetricsError::NoSentences);
    }
    let complex_words = words
        .iter()
        .filter(|w| w.chars().count() > threshold)
        .count();
    let avg_words_per_sentence = words.len() as f64 / sentence_count as f64;
    Ok(0.4 * (avg_words_per_sentence + complex_words as f64))
}

/// Mean character length over the whitespace-split words of `text`.
///
/// # Errors
///
/// [`MetricsError::EmptyText`] when `text` has no words.
pub fn avg_word_length(text: &str) -> Result<f64, MetricsError> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Err(MetricsError::EmptyText);
    }
    let total_len: usize = words.iter().map(|w| w.chars().count()).sum();
    Ok(total_len as f64 / words.len() as f64)
}

/// Estimate the syllable count of a single word.
///
/// Scans left to right counting transitions into a vowel run (vowel set
/// AEIOU, case-insensitive). A word ending in a literal `'e'` has its count
/// decremented once, a crude silent-e heuristic. The result is clamped to a
/// minimum of 1, so all-consonant strings still count as one syllable.
pub fn syllable_count(word: &str) -> usize {
    let mut count: isize = 0;
    let mut prev_was_vowel = false;
    for c in word.chars() {
        let is_vowel = matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u');
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }
    if word.ends_with('e') {
        count -= 1;
    }
    count.max(1) as usize
}

/// Count first-person pronouns in `text`.
///
/// A whitespace-split token counts when its lowercase form is one of
/// `i`, `we`, `my`, `ours`, `us`.
pub fn personal_pronoun_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| PERSONAL_PRONOUNS.contains(&w.to_lowercase().as_str()))
        .count()
}

/// Toy-lexicon polarity: `(pos - neg) / (pos + neg + epsilon)`.
///
/// The epsilon keeps the score at `0.0` (rather than an error) when both
/// counts are zero.
pub fn polarity_score(positive: usize, negative: usize) -> f64 {
    (positive as f64 - negative as f64) / (positive as f64 + negative as f64 + EPSILON)
}

/// Toy-lexicon subjectivity: `(pos + neg) / (word_count + epsilon)`.
pub fn subjectivity_score(positive: usize, negative: usize, word_count: usize) -> f64 {
    (positive as f64 + negative as f64) / (word_count as f64 + EPSILON)
}

/// Count tokens present in the toy positive lexicon, case-insensitively.
pub fn positive_count(tokens: &[String]) -> usize {
    lexicon_hits(tokens, POSITIVE_WORDS)
}

/// Count tokens present in the toy negative lexicon, case-insensitively.
pub fn negative_count(tokens: &[String]) -> usize {
    lexicon_hits(tokens, NEGATIVE_WORDS)
}

fn lexicon_hits(tokens: &[String], lexicon: &[&str]) -> usize {
    tokens
        .iter()
        .filter(|t| lexicon.contains(&t.to_lowercase().as_str()))
        .count()
}

/// Count tokens whose character length exceeds `threshold`.
///
/// This is the record-level count, computed over tokenizer tokens. The fog
/// index keeps its own count over whitespace-split words; the two can differ
/// and both are reported.
pub fn complex_word_count(tokens: &[String], threshold: usize) -> usize {
    tokens
        .iter()
        .filter(|t| t.chars().count() > threshold)
        .count()
}

/// Average sentence length in *characters*: `chars(text) / sentence_count`.
///
/// # Errors
///
/// [`MetricsError::NoSentences`] when `sentence_count` is zero.
pub fn avg_sentence_length(text: &str, sentence_count: usize) -> Result<f64, MetricsError> {
    if sentence_count == 0 {
        return Err(MetricsError::NoSentences);
    }
    Ok(text.chars().count() as f64 / sentence_count as f64)
}

/// Share of complex tokens, as a percentage of all tokens.
///
/// # Errors
///
/// [`MetricsError::NoTokens`] when `token_count` is zero.
pub fn percentage_complex_words(complex: usize, token_count: usize) -> Result<f64, MetricsError> {
    if token_count == 0 {
        return Err(MetricsError::NoTokens);
    }
    Ok(complex as f64 / token_count as f64 * 100.0)
}

/// Tokens per sentence.
///
/// # Errors
///
/// [`MetricsError::NoSentences`] when `sentence_count` is zero.
pub fn avg_words_per_sentence(token_count: usize, sentence_count: usize) -> Result<f64, MetricsError> {
    if sentence_count == 0 {
        return Err(MetricsError::NoSentences);
    }
    Ok(token_count as f64 / sentence_count as f64)
}

/// Mean [`syllable_count`] over a token list.
///
/// # Errors
///
/// [`MetricsError::NoTokens`] when `tokens` is empty.
pub fn avg_syllables_per_word(tokens: &[String]) -> Result<f64, MetricsError> {
    if tokens.is_empty() {
        return Err(MetricsError::NoTokens);
    }
    let total: usize = tokens.iter().map(|t| syllable_count(t)).sum();
    Ok(total as f64 / tokens.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fog_index_simple_sentence() {
        // 50 short words, one sentence, nothing complex: 0.4 * 50 = 20.
        let text = "word ".repeat(50);
        let fog = fog_index(text.trim(), 1, DEFAULT_COMPLEXITY_THRESHOLD).unwrap();
        assert!((fog - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_fog_index_counts_complex_words() {
        // 10 words, 2 sentences, one word longer than 7 chars.
        let text = "a b c d e f g h i extravagant";
        let fog = fog_index(text, 2, DEFAULT_COMPLEXITY_THRESHOLD).unwrap();
        // 0.4 * (10/2 + 1) = 2.4
        assert!((fog - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_fog_index_empty_text() {
        assert_eq!(
            fog_index("", 1, DEFAULT_COMPLEXITY_THRESHOLD),
            Err(MetricsError::EmptyText)
        );
        assert_eq!(
            fog_index("   \n\t ", 1, DEFAULT_COMPLEXITY_THRESHOLD),
            Err(MetricsError::EmptyText)
        );
    }

    #[test]
    fn test_fog_index_zero_sentences() {
        assert_eq!(
            fog_index("some words here", 0, DEFAULT_COMPLEXITY_THRESHOLD),
            Err(MetricsError::NoSentences)
        );
    }

    #[test]
    fn test_avg_word_length() {
        assert!((avg_word_length("ab cd ef").unwrap() - 2.0).abs() < 1e-9);
        assert!((avg_word_length("a bcd").unwrap() - 2.0).abs() < 1e-9);
        assert_eq!(avg_word_length(""), Err(MetricsError::EmptyText));
    }

    #[test]
    fn test_syllable_count_cake() {
        // One vowel run at 'a', a second at the trailing 'e'; the silent-e
        // heuristic takes one back and the floor keeps it at 1.
        assert_eq!(syllable_count("cake"), 1);
    }

    #[test]
    fn test_syllable_count_minimum_one() {
        assert_eq!(syllable_count("rhythm"), 1);
        assert_eq!(syllable_count("tsktsk"), 1);
        assert_eq!(syllable_count("e"), 1);
    }

    #[test]
    fn test_syllable_count_multisyllable() {
        assert_eq!(syllable_count("banana"), 3);
        assert_eq!(syllable_count("readable"), 2);
        assert_eq!(syllable_count("OUT"), 1);
    }

    #[test]
    fn test_syllable_count_trailing_e_is_case_sensitive() {
        // Only a literal lowercase 'e' triggers the decrement.
        assert_eq!(syllable_count("CAKE"), 2);
    }

    #[test]
    fn test_personal_pronoun_count() {
        assert_eq!(personal_pronoun_count("I think we should trust ours"), 3);
        assert_eq!(personal_pronoun_count("They said nothing"), 0);
        // Matching is on whole whitespace-split tokens, so "it" or "island"
        // never match "i".
        assert_eq!(personal_pronoun_count("island it item"), 0);
    }

    #[test]
    fn test_polarity_score_zero_inputs() {
        assert_eq!(polarity_score(0, 0), 0.0);
    }

    #[test]
    fn test_polarity_score_signs() {
        assert!(polarity_score(3, 1) > 0.0);
        assert!(polarity_score(1, 3) < 0.0);
        let p = polarity_score(2, 0);
        assert!((p - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_subjectivity_score() {
        assert_eq!(subjectivity_score(0, 0, 0), 0.0);
        let s = subjectivity_score(2, 1, 10);
        assert!((s - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_toy_lexicon_counts() {
        let tokens: Vec<String> = ["Good", "day", "BAD", "mood", "excellent"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(positive_count(&tokens), 2);
        assert_eq!(negative_count(&tokens), 1);
    }

    #[test]
    fn test_complex_word_count_threshold() {
        let tokens: Vec<String> = ["short", "lengthy", "extravagant", "abcdefgh"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        // "extravagant" (11) and "abcdefgh" (8) exceed 7; "lengthy" (7) does not.
        assert_eq!(complex_word_count(&tokens, 7), 2);
        assert_eq!(complex_word_count(&tokens, 10), 1);
    }

    #[test]
    fn test_avg_sentence_length_is_character_based() {
        // 10 chars over 2 sentences.
        assert!((avg_sentence_length("ab. cd ef.", 2).unwrap() - 5.0).abs() < 1e-9);
        assert_eq!(avg_sentence_length("text", 0), Err(MetricsError::NoSentences));
    }

    #[test]
    fn test_percentage_complex_words() {
        assert!((percentage_complex_words(1, 4).unwrap() - 25.0).abs() < 1e-9);
        assert_eq!(percentage_complex_words(0, 0), Err(MetricsError::NoTokens));
    }

    #[test]
    fn test_avg_words_per_sentence() {
        assert!((avg_words_per_sentence(9, 3).unwrap() - 3.0).abs() < 1e-9);
        assert_eq!(avg_words_per_sentence(9, 0), Err(MetricsError::NoSentences));
    }

    #[test]
    fn test_avg_syllables_per_word() {
        let tokens: Vec<String> = ["cake", "banana"].iter().map(|s| s.to_string()).collect();
        // 1 + 3 over two tokens.
        assert!((avg_syllables_per_word(&tokens).unwrap() - 2.0).abs() < 1e-9);
        assert_eq!(avg_syllables_per_word(&[]), Err(MetricsError::NoTokens));
    }
}
