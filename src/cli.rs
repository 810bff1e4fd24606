//! Command-line interface definitions.
//!
//! All options have defaults matching the conventional file layout
//! (`urls.txt` in, `descriptions/` + `sentiment_data.csv` out), so a bare
//! invocation works from a directory containing a URL list.

use clap::Parser;

/// Command-line arguments for the article metrics batch runner.
///
/// # Examples
///
/// ```sh
/// # Conventional layout, all defaults
/// article_metrics
///
/// # Explicit paths and a stricter complexity threshold
/// article_metrics -u ./input/urls.txt -o ./out/descriptions -c ./out/sentiment_data.csv --complexity-threshold 9
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input file with one article URL per line
    #[arg(short, long, default_value = "urls.txt")]
    pub urls_file: String,

    /// Directory for per-article raw text dumps
    #[arg(short, long, default_value = "descriptions")]
    pub output_dir: String,

    /// Path of the summary CSV
    #[arg(short, long, default_value = "sentiment_data.csv")]
    pub csv_path: String,

    /// Words longer than this many characters count as complex
    #[arg(long, default_value_t = crate::metrics::DEFAULT_COMPLEXITY_THRESHOLD)]
    pub complexity_threshold: usize,

    /// Per-request HTTP timeout in seconds
    #[arg(long, env = "ARTICLE_METRICS_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}
