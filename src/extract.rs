//! Article fetching and text extraction.
//!
//! The pipeline talks to extraction through the [`ArticleExtractor`] trait so
//! the metric code stays testable without network access. The production
//! implementation, [`HttpExtractor`], fetches a page over HTTP and pulls out
//! a title and body text with CSS selectors.
//!
//! # Extraction heuristics
//!
//! - **Title**: `og:title` meta tag, then `<title>`, then the first `<h1>`.
//!   Pages with none of those yield no title and the pipeline falls back to
//!   the literal filename `untitled`.
//! - **Body**: the text of `<article> p` paragraphs when an `<article>`
//!   element exists, otherwise all `<p>` elements, joined with newlines.

use crate::error::PipelineError;
use crate::models::ExtractedArticle;
use reqwest::Client;
use scraper::{Html, Selector};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Capability interface for turning a URL into title + body text.
pub trait ArticleExtractor {
    fn extract(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<ExtractedArticle, PipelineError>> + Send;
}

/// Fetches pages with `reqwest` and extracts text with `scraper`.
#[derive(Debug, Clone)]
pub struct HttpExtractor {
    client: Client,
}

impl HttpExtractor {
    /// Build an extractor with a per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, PipelineError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("article_metrics/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl ArticleExtractor for HttpExtractor {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn extract(&self, url: &str) -> Result<ExtractedArticle, PipelineError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let html = response.text().await?;

        let article = extract_from_html(&html);
        if article.text.trim().is_empty() {
            return Err(PipelineError::EmptyContent("no paragraph text in page"));
        }

        info!(
            bytes = article.text.len(),
            has_title = article.title.is_some(),
            "Extracted article"
        );
        Ok(article)
    }
}

/// Pull title and body text out of an HTML document.
pub fn extract_from_html(html: &str) -> ExtractedArticle {
    let document = Html::parse_document(html);
    let og_title_selector = Selector::parse(r#"meta[property="og:title"]"#).unwrap();
    let title_selector = Selector::parse("title").unwrap();
    let h1_selector = Selector::parse("h1").unwrap();
    let article_p_selector = Selector::parse("article p").unwrap();
    let p_selector = Selector::parse("p").unwrap();

    let title = document
        .select(&og_title_selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(|t| t.trim().to_string())
        .or_else(|| {
            document
                .select(&title_selector)
                .next()
                .map(|t| t.text().collect::<String>().trim().to_string())
        })
        .or_else(|| {
            document
                .select(&h1_selector)
                .next()
                .map(|h| h.text().collect::<String>().trim().to_string())
        })
        .filter(|t| !t.is_empty());

    let mut paragraphs: Vec<String> = document
        .select(&article_p_selector)
        .map(|p| p.text().collect::<Vec<_>>().join(" ").trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    if paragraphs.is_empty() {
        paragraphs = document
            .select(&p_selector)
            .map(|p| p.text().collect::<Vec<_>>().join(" ").trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
    }

    let text = paragraphs.join("\n");
    debug!(paragraphs = paragraphs.len(), "Collected paragraph text");

    ExtractedArticle { title, text }
}
