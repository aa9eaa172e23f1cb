//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the fixed user agent and timeout
//! - GET requests for directory listing pages
//! - Error classification for failed fetches
//!
//! There is no retry logic: a failed fetch abandons that branch of the
//! crawl and the engine moves on to siblings.

use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Fixed User-Agent sent with every request
///
/// A browser-style string; some file-listing servers refuse obvious bots.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0 Safari/537.36";

/// Fixed per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Builds the HTTP client used for the whole crawl
///
/// # Arguments
///
/// * `insecure` - When true, TLS certificate verification is disabled.
///   Only for listings served with self-signed or expired certificates.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(insecure: bool) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .danger_accept_invalid_certs(insecure)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one listing page and returns its body
///
/// Any failure (network error, timeout, non-success status, unreadable
/// body) is returned as a [`FetchError`] for the engine to log and
/// recover from locally.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| FetchError::Body {
        url: url.to_string(),
        source: e,
    })
}
