use std::path::PathBuf;
use url::Url;

/// Resolved configuration for a single crawl run
///
/// Built from command-line input by [`crate::config::build_config`]; every
/// field is validated and normalized before the crawl starts.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Crawl root, normalized to end with a path separator; defines the
    /// containment prefix for the whole traversal
    pub root_url: Url,

    /// Directory the per-folder playlists are written under, already
    /// including the root folder name derived from the crawl root
    pub output_root: PathBuf,

    /// Skip TLS certificate verification
    pub insecure: bool,
}
