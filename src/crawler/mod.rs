//! Crawler module for directory-listing traversal
//!
//! This module contains the core crawling logic:
//! - HTTP fetching of listing pages
//! - Anchor link extraction
//! - Video / folder / ignored link classification
//! - The depth-first traversal engine

mod classifier;
mod engine;
mod fetcher;
mod parser;

pub use classifier::{Classifier, LinkClass, VIDEO_EXTS};
pub use engine::{CollectedMapping, Crawler};
pub use fetcher::{build_http_client, fetch_html, REQUEST_TIMEOUT, USER_AGENT};
pub use parser::extract_links;

use crate::config::CrawlConfig;
use crate::VidgatherError;

/// Runs a complete crawl for the given configuration
///
/// Builds the HTTP client, traverses every listing reachable under the
/// crawl root, and returns the discovered videos grouped by folder key.
///
/// # Arguments
///
/// * `config` - The validated crawl configuration
///
/// # Returns
///
/// * `Ok(CollectedMapping)` - The completed mapping (possibly empty)
/// * `Err(VidgatherError)` - The HTTP client could not be built
pub async fn crawl(config: &CrawlConfig) -> Result<CollectedMapping, VidgatherError> {
    let client = build_http_client(config.insecure)?;
    let crawler = Crawler::new(client, config.root_url.clone(), Classifier::new());
    Ok(crawler.run().await)
}
