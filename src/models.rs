//! Data models for extracted articles and their computed metric rows.

use serde::{Deserialize, Serialize};

/// An article as returned by the extraction service.
#[derive(Debug, Clone)]
pub struct ExtractedArticle {
    /// The article headline, when one could be found.
    pub title: Option<String>,
    /// The full extracted body text.
    pub text: String,
}

/// One row of the summary table: every metric computed for a single URL.
///
/// All fields are derived solely from that URL's own article text and token
/// list; records carry no cross-record state. A record is built exactly once
/// by the pipeline and never mutated afterwards.
///
/// `positive_score`/`negative_score` come from the intensity analyzer, while
/// `polarity_score`/`subjectivity_score` are derived from the separate toy
/// lexicons. They measure different things and are reported side by side.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The source URL, trimmed of surrounding whitespace.
    pub url: String,
    /// Positive intensity from the sentiment analyzer.
    pub positive_score: f64,
    /// Negative intensity from the sentiment analyzer.
    pub negative_score: f64,
    /// Toy-lexicon polarity, in `[-1, 1]`.
    pub polarity_score: f64,
    /// Toy-lexicon subjectivity: lexicon hits over word count.
    pub subjectivity_score: f64,
    /// Number of word tokens.
    pub word_count: usize,
    /// Tokens longer than the complexity threshold.
    pub complex_word_count: usize,
    /// Characters per sentence.
    pub avg_sentence_length: f64,
    /// Complex tokens as a percentage of all tokens.
    pub percentage_complex_words: f64,
    /// Fog index (variant formula, see [`crate::metrics::fog_index`]).
    pub fog_index: f64,
    /// Tokens per sentence.
    pub avg_words_per_sentence: f64,
    /// Mean character length of whitespace-split words.
    pub avg_word_length: f64,
    /// Mean estimated syllables per token.
    pub avg_syllables_per_word: f64,
    /// Count of first-person pronouns.
    pub personal_pronoun_count: usize,
}
