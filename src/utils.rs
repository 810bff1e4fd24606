//! Filename sanitization and file system helpers.

use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Reduce an arbitrary title to a filesystem-safe filename.
///
/// Keeps ASCII letters, digits, space, `-`, `_`, `.`, `(`, `)`, and `%`;
/// every other character is dropped. Relative order is preserved and there
/// is no length cap.
///
/// Two different titles can sanitize to the same string, in which case their
/// description files overwrite each other. Known limitation.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_filename("Hello, World! (2024)"), "Hello World (2024)");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| {
            c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.' | '(' | ')' | '%')
        })
        .collect()
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
