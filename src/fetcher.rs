use crate::config::CompareSettings;
use crate::parsers;
use crate::results::MetadataRecord;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Why a page could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// Network error, timeout, or unreadable body
    Transport(String),
    /// Any status other than 200
    Status(u16),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Transport(msg) => write!(f, "transport error: {msg}"),
            FailureReason::Status(code) => write!(f, "HTTP status {code}"),
        }
    }
}

/// A page could not be turned into a metadata record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{url} not found ({reason})")]
pub struct NotFound {
    pub url: String,
    pub reason: FailureReason,
}

/// Which of the two sites a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Source,
    Target,
}

/// A comparison could not run because one side failed to fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {url} ({reason})", status = self.status())]
pub struct ExtractionFailure {
    pub url: String,
    pub side: Side,
    pub reason: FailureReason,
}

impl ExtractionFailure {
    pub fn new(side: Side, not_found: NotFound) -> Self {
        Self {
            url: not_found.url,
            side,
            reason: not_found.reason,
        }
    }

    /// Short description shown to users
    pub fn status(&self) -> &'static str {
        match self.side {
            Side::Source => "Source URL not found",
            Side::Target => "Target URL not found",
        }
    }
}

/// Errors building the HTTP client
#[derive(Debug, Error)]
pub enum FetcherError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Fetches pages over HTTP and extracts their metadata
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher with a per-request timeout
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetcherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Create a fetcher using the timeout and user agent from the settings
    pub fn from_settings(settings: &CompareSettings) -> Result<Self, FetcherError> {
        Self::new(settings.timeout(), &settings.user_agent)
    }

    /// Fetch a page and extract its metadata.
    ///
    /// Only a response with status exactly 200 yields a record.
    pub async fn extract(&self, url: &str) -> Result<MetadataRecord, NotFound> {
        let body = self.fetch(url).await.map_err(|reason| NotFound {
            url: url.to_string(),
            reason,
        })?;
        Ok(parsers::parse_metadata(&body))
    }

    async fn fetch(&self, url: &str) -> Result<String, FailureReason> {
        ::log::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FailureReason::Transport(e.to_string()))?;

        let status = response.status();
        ::log::debug!("{} responded with {}", url, status);
        if status != StatusCode::OK {
            return Err(FailureReason::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FailureReason::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn fetcher() -> Fetcher {
        Fetcher::new(Duration::from_secs(5), "seo-meta-compare-test").unwrap()
    }

    #[tokio::test]
    async fn test_extract_ok() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/about/");
                then.status(200)
                    .header("content-type", "text/html; charset=utf-8")
                    .body(
                        r#"<html><head><title> About </title>
                        <meta name="description" content="About us">
                        <link rel="canonical" href="https://site.com/about/">
                        </head><body></body></html>"#,
                    );
            })
            .await;

        let record = fetcher().extract(&server.url("/about/")).await.unwrap();
        mock.assert_async().await;

        assert_eq!(record.title, "About");
        assert_eq!(record.description, "About us");
        assert_eq!(record.canonical, "https://site.com/about/");
        assert_eq!(record.robots, "");
        assert_eq!(record.keywords, "");
    }

    #[tokio::test]
    async fn test_extract_404_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/gone/");
                then.status(404).body("<html><title>Not here</title></html>");
            })
            .await;

        let url = server.url("/gone/");
        let err = fetcher().extract(&url).await.unwrap_err();
        assert_eq!(
            err,
            NotFound {
                url,
                reason: FailureReason::Status(404)
            }
        );
    }

    #[tokio::test]
    async fn test_extract_requires_exactly_200() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/empty/");
                then.status(204);
            })
            .await;

        let err = fetcher().extract(&server.url("/empty/")).await.unwrap_err();
        assert_eq!(err.reason, FailureReason::Status(204));
    }

    #[tokio::test]
    async fn test_extract_transport_error() {
        // Nothing listens on port 9 (discard) locally
        let err = fetcher().extract("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err.reason, FailureReason::Transport(_)));
    }

    #[tokio::test]
    async fn test_extract_timeout_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/slow/");
                then.status(200)
                    .body("<title>Too late</title>")
                    .delay(Duration::from_secs(2));
            })
            .await;

        let fetcher = Fetcher::new(Duration::from_millis(200), "seo-meta-compare-test").unwrap();
        let err = fetcher.extract(&server.url("/slow/")).await.unwrap_err();
        assert!(matches!(err.reason, FailureReason::Transport(_)));
    }

    #[test]
    fn test_failure_status() {
        let failure = ExtractionFailure::new(
            Side::Target,
            NotFound {
                url: "https://b.com/x/".to_string(),
                reason: FailureReason::Status(500),
            },
        );
        assert_eq!(failure.status(), "Target URL not found");
        assert_eq!(
            failure.to_string(),
            "Target URL not found: https://b.com/x/ (HTTP status 500)"
        );
    }
}
