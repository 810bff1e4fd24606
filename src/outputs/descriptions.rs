//! Per-article raw text dumps.

use tokio::fs;
use tracing::{debug, instrument};

/// Write the extracted article body to `<dir>/<sanitized_title>.txt`.
///
/// Plain UTF-8, no metadata or headers. An existing file at the same path is
/// overwritten silently; titles that sanitize to the same string clobber each
/// other.
#[instrument(level = "debug", skip_all, fields(dir = %dir, title = %sanitized_title))]
pub async fn write_article(dir: &str, sanitized_title: &str, text: &str) -> std::io::Result<()> {
    let path = format!("{}/{}.txt", dir.trim_end_matches('/'), sanitized_title);
    fs::write(&path, text).await?;
    debug!(path = %path, bytes = text.len(), "Wrote description file");
    Ok(())
}
