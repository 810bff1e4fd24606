//! Output generation for the summary CSV and per-article text dumps.
//!
//! # Output Structure
//!
//! ```text
//! descriptions/
//! ├── Some Article Title.txt   # raw extracted body text, one per URL
//! └── Another Title.txt
//! sentiment_data.csv           # one metrics row per successful URL
//! ```
//!
//! Both outputs overwrite silently; re-running a batch with the same inputs
//! produces identical files with no accumulation.

pub mod csv;
pub mod descriptions;
