//! Summary table serialization.
//!
//! Writes the results collection as a CSV with a fixed header. Column names
//! are part of the output contract and are reproduced exactly, mixed casing
//! and embedded spaces included.

use crate::models::ArticleRecord;
use tokio::fs;
use tracing::{info, instrument};

/// The summary table header. Order matches the fields of [`ArticleRecord`].
pub const CSV_HEADER: &str = "URL,Positive_Score,Negative_Score,Polarity_Score,\
Subjectivity_Score,Word_Count,Complex_Words_Count,avg sentence length,\
Percentage of complex words,fog index,avg number of words per sentence,\
avg word length,Syllable_per_word,Personal_Pronoun";

/// Quote a field when it contains a comma, quote, or newline (RFC 4180).
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render one record as a CSV data row.
pub fn render_row(record: &ArticleRecord) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        escape_field(&record.url),
        record.positive_score,
        record.negative_score,
        record.polarity_score,
        record.subjectivity_score,
        record.word_count,
        record.complex_word_count,
        record.avg_sentence_length,
        record.percentage_complex_words,
        record.fog_index,
        record.avg_words_per_sentence,
        record.avg_word_length,
        record.avg_syllables_per_word,
        record.personal_pronoun_count,
    )
}

/// Write the whole results collection to `path`, overwriting any existing
/// file. One row per record, in the order given (= processing order).
#[instrument(level = "info", skip_all, fields(path = %path, rows = records.len()))]
pub async fn write_summary(records: &[ArticleRecord], path: &str) -> std::io::Result<()> {
    let mut out = String::with_capacity(records.len() * 128 + CSV_HEADER.len());
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&render_row(record));
        out.push('\n');
    }

    fs::write(path, out).await?;
    info!("Wrote summary CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str) -> ArticleRecord {
        ArticleRecord {
            url: url.to_string(),
            positive_score: 0.25,
            negative_score: 0.0,
            polarity_score: 1.0,
            subjectivity_score: 0.1,
            word_count: 20,
            complex_word_count: 3,
            avg_sentence_length: 50.5,
            percentage_complex_words: 15.0,
            fog_index: 9.2,
            avg_words_per_sentence: 10.0,
            avg_word_length: 4.5,
            avg_syllables_per_word: 1.5,
            personal_pronoun_count: 0,
        }
    }

    #[test]
    fn test_header_column_names_exact() {
        assert!(CSV_HEADER.starts_with("URL,Positive_Score,Negative_Score"));
        assert!(CSV_HEADER.contains("avg sentence length"));
        assert!(CSV_HEADER.contains("Percentage of complex words"));
        assert!(CSV_HEADER.contains("fog index"));
        assert!(CSV_HEADER.ends_with("Syllable_per_word,Personal_Pronoun"));
        assert_eq!(CSV_HEADER.split(',').count(), 14);
    }

    #[test]
    fn test_render_row_field_count() {
        let row = render_row(&record("https://example.com/a"));
        assert_eq!(row.split(',').count(), 14);
        assert!(row.starts_with("https://example.com/a,0.25,0,1,"));
        assert!(row.ends_with(",1.5,0"));
    }

    #[test]
    fn test_url_with_comma_is_quoted() {
        let row = render_row(&record("https://example.com/a,b"));
        assert!(row.starts_with("\"https://example.com/a,b\","));
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("plain"), "plain");
    }

    #[tokio::test]
    async fn test_write_summary_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentiment_data.csv");
        let records = vec![record("https://example.com/1"), record("https://example.com/2")];

        write_summary(&records, path.to_str().unwrap()).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("https://example.com/1,"));
        assert!(lines[2].starts_with("https://example.com/2,"));
    }

    #[tokio::test]
    async fn test_write_summary_empty_batch_is_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentiment_data.csv");

        write_summary(&[], path.to_str().unwrap()).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("{CSV_HEADER}\n"));
    }

    #[tokio::test]
    async fn test_write_summary_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentiment_data.csv");

        write_summary(&[record("https://example.com/old")], path.to_str().unwrap())
            .await
            .unwrap();
        write_summary(&[record("https://example.com/new")], path.to_str().unwrap())
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("old"));
        assert!(contents.contains("https://example.com/new"));
    }
}
