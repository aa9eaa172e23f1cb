//! Vidgather: a directory-index video playlist builder
//!
//! This crate implements a recursive crawler for HTTP(S) directory listings.
//! It discovers video files under a starting URL, groups them by the listing
//! sub-folder they were found in, and writes one M3U playlist per folder.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for vidgather operations
#[derive(Debug, Error)]
pub enum VidgatherError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// These all surface before any network activity and terminate the run
/// with a non-zero exit status.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No starting URL given")]
    EmptyUrl,

    #[error("Invalid starting URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Unsupported URL scheme '{0}': only http and https are supported")]
    InvalidScheme(String),

    #[error("Starting URL has no host")]
    MissingHost,

    #[error("Cannot use output directory {path}: {source}")]
    OutputDir {
        path: String,
        source: std::io::Error,
    },
}

/// Errors from fetching a single listing page
///
/// These are recovered locally by the crawl engine: the branch is abandoned
/// and the crawl continues with its siblings. They never abort a run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request failed for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Result type alias for vidgather operations
pub type Result<T> = std::result::Result<T, VidgatherError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{build_http_client, Classifier, CollectedMapping, Crawler, LinkClass};
pub use output::{write_playlists, WriteReport};
