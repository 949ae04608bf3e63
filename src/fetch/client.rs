//! HTTP page fetcher
//!
//! This module handles the outbound requests of the fetch loop:
//! - Building the HTTP client with browser-like headers and a per-request timeout
//! - Fetching one result page and classifying the response

use crate::config::HttpSettings;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

/// Reasons a single page request failed
///
/// Every variant is transient from the fetch loop's point of view: the same
/// offset is retried after a backoff delay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// HTTP 429
    #[error("rate limited (HTTP 429)")]
    RateLimited,

    /// Any other non-200 status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Timeout, connection failure, or other transport error
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be read
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `settings` - The HTTP settings
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use jobscout::config::HttpSettings;
/// use jobscout::fetch::build_http_client;
///
/// let client = build_http_client(&HttpSettings::default()).unwrap();
/// ```
pub fn build_http_client(settings: &HttpSettings) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    Client::builder()
        .user_agent(settings.user_agent.clone())
        .default_headers(headers)
        .timeout(settings.timeout())
        .connect_timeout(settings.timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one result page
///
/// # Response Handling
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 200 | `Ok(body)` |
/// | HTTP 429 | `PageError::RateLimited` |
/// | Other status | `PageError::Status` |
/// | Timeout / connection failure | `PageError::Network` |
/// | Unreadable body | `PageError::Body` |
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, PageError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_transport_error(&e))?;

    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(PageError::RateLimited);
    }

    if status != StatusCode::OK {
        return Err(PageError::Status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| PageError::Body(e.to_string()))
}

fn classify_transport_error(error: &reqwest::Error) -> PageError {
    if error.is_timeout() {
        PageError::Network("request timeout".to_string())
    } else if error.is_connect() {
        PageError::Network("connection refused".to_string())
    } else {
        PageError::Network(error.to_string())
    }
}
