//! Error types for the per-URL pipeline and the metric computations.
//!
//! Every failure while processing a single URL surfaces as a [`PipelineError`]
//! so the batch runner can log it and move on to the next URL. Only two
//! conditions are fatal to the whole run, and both happen before any URL is
//! processed: an unreadable URL list and an unwritable output directory.

use thiserror::Error;

/// Anything that can go wrong while turning one URL into an [`crate::models::ArticleRecord`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Http { url: String, status: u16 },

    #[error("no extractable content: {0}")]
    EmptyContent(&'static str),

    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A metric was asked to divide by a zero word, token, or sentence count.
///
/// The original computations would raise a division-by-zero at runtime for
/// empty or unparseable articles; here the condition is a typed error the
/// caller has to handle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("text contains no words")]
    EmptyText,

    #[error("text contains no sentences")]
    NoSentences,

    #[error("token list is empty")]
    NoTokens,
}
