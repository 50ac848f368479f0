use crate::parsers::{self, text::CleanOptions};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Title used on any fetch failure
pub const ERROR_TITLE: &str = "Error loading website";

/// Title used when the document carries no `<title>`
pub const MISSING_TITLE: &str = "No title found";

/// Represents a fetched web page with its cleaned content
///
/// `title` and `text` are always populated: on any fetch failure they hold
/// descriptive fallback strings instead of being left empty, so downstream
/// consumers can treat every `Page` as well-formed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// URL the page was fetched from
    pub url: String,

    /// Title of the page, or a fallback sentinel
    pub title: String,

    /// Cleaned text content for model consumption
    pub text: String,

    /// HTTP status of the fetch; `None` when the fetch failed
    pub status_code: Option<u16>,
}

impl Page {
    /// Create a page from a successful fetch
    pub fn new(url: String, title: Option<String>, text: String, status_code: u16) -> Self {
        Self {
            url,
            title: title.unwrap_or_else(|| MISSING_TITLE.to_string()),
            text,
            status_code: Some(status_code),
        }
    }

    /// Create the well-formed fallback page for a failed fetch
    pub fn load_failure(url: &str, error: &str) -> Self {
        Self {
            url: url.to_string(),
            title: ERROR_TITLE.to_string(),
            text: format!("Failed to load website content: {}", error),
            status_code: None,
        }
    }

    /// Returns whether the fetch completed with a success status
    pub fn is_success(&self) -> bool {
        self.status_code
            .is_some_and(|code| (200..300).contains(&code))
    }
}

/// Errors a page fetch can run into
///
/// These never cross the [`PageSource::fetch`] boundary; they are folded
/// into the returned [`Page`] as descriptive text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure (DNS, timeout, connection refused, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),
}

/// A source of fetched pages
///
/// Abstracts over [`PageFetcher`] so the summarizer can be exercised with
/// canned pages in tests.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches a URL; failures become a well-formed fallback page
    async fn fetch(&self, url: &str) -> Page;
}

/// Fetches pages over HTTP and extracts their readable content
pub struct PageFetcher {
    client: reqwest::Client,
    timeout: Duration,
    clean_options: CleanOptions,
}

impl PageFetcher {
    /// Create a fetcher with the given request timeout and cleaning options
    pub fn new(timeout: Duration, clean_options: CleanOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
            clean_options,
        }
    }

    /// Performs the GET and extraction, surfacing failures as errors
    async fn try_fetch(&self, url: &str) -> Result<Page, FetchError> {
        let parsed = Url::parse(url)?;

        let response = self
            .client
            .get(parsed)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let extraction = parsers::extract_readable(&body, &self.clean_options);

        Ok(Page::new(
            url.to_string(),
            extraction.title,
            extraction.text,
            status.as_u16(),
        ))
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(10), CleanOptions::default())
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch(&self, url: &str) -> Page {
        match self.try_fetch(url).await {
            Ok(page) => {
                ::log::info!("Successfully scraped: {}", page.title);
                page
            }
            Err(e) => {
                ::log::error!("Failed to scrape {}: {}", url, e);
                Page::load_failure(url, &e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failure_page_is_well_formed() {
        let page = Page::load_failure("https://example.com", "connection refused");

        assert_eq!(page.url, "https://example.com");
        assert_eq!(page.title, ERROR_TITLE);
        assert!(page.text.contains("connection refused"));
        assert!(page.status_code.is_none());
        assert!(!page.is_success());
    }

    #[test]
    fn test_missing_title_gets_sentinel() {
        let page = Page::new("https://example.com".to_string(), None, "text".to_string(), 200);
        assert_eq!(page.title, MISSING_TITLE);
        assert!(page.is_success());
    }

    #[test]
    fn test_non_success_status_is_not_success() {
        let page = Page::new(
            "https://example.com".to_string(),
            Some("T".to_string()),
            String::new(),
            404,
        );
        assert!(!page.is_success());
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_returns_error_page() {
        let fetcher = PageFetcher::default();
        let page = fetcher.fetch("not a url").await;

        assert_eq!(page.title, ERROR_TITLE);
        assert!(page.text.starts_with("Failed to load website content:"));
        assert!(page.status_code.is_none());
    }
}
