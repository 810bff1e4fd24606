//! # Article Metrics
//!
//! A batch pipeline that scrapes a list of article URLs, extracts the article
//! text, computes readability and sentiment metrics per article, and writes
//! per-article text dumps plus a summary CSV.
//!
//! ## Usage
//!
//! ```sh
//! article_metrics -u urls.txt -o descriptions -c sentiment_data.csv
//! ```
//!
//! ## Architecture
//!
//! One URL at a time, strictly sequential:
//! 1. **Extract**: fetch the page and pull out title + body text
//! 2. **Tokenize**: split into word tokens and sentence segments
//! 3. **Score**: sentiment intensity plus toy-lexicon polarity/subjectivity
//! 4. **Measure**: fog index, word/sentence/syllable averages, pronoun count
//! 5. **Persist**: raw text to `descriptions/<title>.txt`, one CSV at the end
//!
//! A failing URL is logged and skipped; it contributes no row and no dump
//! file. Only an unreadable URL list or an unwritable output directory abort
//! the whole run, and both are checked before the first URL is touched.

use clap::Parser;
use futures::stream::{self, StreamExt};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod error;
mod extract;
mod metrics;
mod models;
mod outputs;
mod pipeline;
mod sentiment;
mod tokenize;
mod utils;

use cli::Cli;
use error::PipelineError;
use extract::HttpExtractor;
use models::ArticleRecord;
use sentiment::IntensityAnalyzer;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("article_metrics starting up");

    let args = Cli::parse();
    debug!(?args.urls_file, ?args.output_dir, ?args.csv_path, "Parsed CLI arguments");

    // Fatal: no URL list, no run.
    let raw = match tokio::fs::read_to_string(&args.urls_file).await {
        Ok(contents) => contents,
        Err(e) => {
            error!(path = %args.urls_file, error = %e, "Cannot read URL list");
            return Err(e.into());
        }
    };
    let urls: Vec<String> = raw
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    info!(count = urls.len(), path = %args.urls_file, "Read URL list");

    // Fatal: output directory must exist and be writable before any fetch.
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let extractor = HttpExtractor::new(Duration::from_secs(args.timeout_secs))?;
    let analyzer = IntensityAnalyzer::new();

    // ---- Process URLs one at a time, in input order ----
    let total = urls.len();
    let results: Vec<(String, Result<ArticleRecord, PipelineError>)> = stream::iter(urls)
        .then(|url| {
            let extractor = &extractor;
            let analyzer = &analyzer;
            let output_dir = &args.output_dir;
            let threshold = args.complexity_threshold;
            async move {
                let result =
                    pipeline::process_url(extractor, analyzer, &url, threshold, output_dir).await;
                (url, result)
            }
        })
        .collect()
        .await;

    let mut records: Vec<ArticleRecord> = Vec::with_capacity(total);
    for (url, result) in results {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                error!(%url, error = %e, "Skipping URL after pipeline failure");
            }
        }
    }

    let successful = records.len();
    let failed = total - successful;
    info!(total, successful, failed, "Completed URL processing");

    // ---- Summary table ----
    if let Err(e) = outputs::csv::write_summary(&records, &args.csv_path).await {
        error!(path = %args.csv_path, error = %e, "Failed to write summary CSV");
        return Err(e.into());
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        rows = successful,
        "Execution complete"
    );

    Ok(())
}
