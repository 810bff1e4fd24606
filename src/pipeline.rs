//! Per-URL processing pipeline.
//!
//! One call to [`process_url`] takes a URL all the way to an
//! [`ArticleRecord`]: extract, tokenize, score, compute metrics, dump the raw
//! text to a description file. Every failure comes back as a typed
//! [`PipelineError`] so the batch runner can log it and keep going; nothing
//! in here panics on bad input.

use crate::error::PipelineError;
use crate::extract::ArticleExtractor;
use crate::metrics;
use crate::models::ArticleRecord;
use crate::outputs::descriptions;
use crate::sentiment::IntensityAnalyzer;
use crate::tokenize::{sent_tokenize, word_tokenize};
use crate::utils::sanitize_filename;
use tracing::{debug, info, instrument};
use url::Url;

/// Title used when extraction yields no headline.
const UNTITLED: &str = "untitled";

/// Process a single URL into a record plus a persisted raw-text file.
///
/// Steps, in order: fetch and extract title + body, tokenize into words and
/// sentences, run the intensity analyzer, count toy-lexicon hits, compute
/// every metric field, sanitize the title into
/// `<output_dir>/<sanitized>.txt`, write the raw text (silently overwriting
/// an existing file), and assemble the record.
///
/// # Errors
///
/// Any fetch, extraction, metric, or file-write failure. A failed URL
/// produces no record and no output file.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn process_url<E: ArticleExtractor>(
    extractor: &E,
    analyzer: &IntensityAnalyzer,
    url: &str,
    complexity_threshold: usize,
    output_dir: &str,
) -> Result<ArticleRecord, PipelineError> {
    let parsed = Url::parse(url)?;
    let article = extractor.extract(parsed.as_str()).await?;
    let text = &article.text;

    let tokens = word_tokenize(text);
    let sentences = sent_tokenize(text);
    debug!(
        tokens = tokens.len(),
        sentences = sentences.len(),
        "Tokenized article"
    );

    let intensity = analyzer.score(text);

    let positive = metrics::positive_count(&tokens);
    let negative = metrics::negative_count(&tokens);

    let word_count = tokens.len();
    let complex_word_count = metrics::complex_word_count(&tokens, complexity_threshold);

    let record = ArticleRecord {
        url: url.to_string(),
        positive_score: intensity.pos,
        negative_score: intensity.neg,
        polarity_score: metrics::polarity_score(positive, negative),
        subjectivity_score: metrics::subjectivity_score(positive, negative, word_count),
        word_count,
        complex_word_count,
        avg_sentence_length: metrics::avg_sentence_length(text, sentences.len())?,
        percentage_complex_words: metrics::percentage_complex_words(
            complex_word_count,
            word_count,
        )?,
        fog_index: metrics::fog_index(text, sentences.len(), complexity_threshold)?,
        avg_words_per_sentence: metrics::avg_words_per_sentence(word_count, sentences.len())?,
        avg_word_length: metrics::avg_word_length(text)?,
        avg_syllables_per_word: metrics::avg_syllables_per_word(&tokens)?,
        personal_pronoun_count: metrics::personal_pronoun_count(text),
    };

    let title = article.title.as_deref().unwrap_or(UNTITLED);
    let sanitized = sanitize_filename(title);
    descriptions::write_article(output_dir, &sanitized, text).await?;

    info!(
        title = %title,
        word_count = record.word_count,
        fog_index = record.fog_index,
        "Processed article"
    );
    Ok(record)
}
