//! Configuration module for vidgather
//!
//! Configuration comes entirely from command-line input; this module
//! validates it and resolves the derived paths before any network activity.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use vidgather::config::build_config;
//!
//! let tmp = tempfile::tempdir().unwrap();
//! let config = build_config("https://example.com/show", tmp.path(), false).unwrap();
//! assert_eq!(config.root_url.as_str(), "https://example.com/show/");
//! assert!(config.output_root.ends_with("show"));
//! ```

mod types;
mod validation;

// Re-export types
pub use types::CrawlConfig;

// Re-export validation functions
pub use validation::{prepare_output_dir, validate_start_url};

use crate::url::root_folder_name;
use crate::ConfigResult;
use std::path::Path;

/// Builds a validated [`CrawlConfig`] from command-line input
///
/// The output root is `output_dir/<root folder name>`, where the root
/// folder name is derived from the crawl root's last path segment. The
/// directory is created here so an unusable path fails the run before
/// the first request is sent.
pub fn build_config(raw_url: &str, output_dir: &Path, insecure: bool) -> ConfigResult<CrawlConfig> {
    let root_url = validate_start_url(raw_url)?;
    let output_root = output_dir.join(root_folder_name(&root_url));
    prepare_output_dir(&output_root)?;

    Ok(CrawlConfig {
        root_url,
        output_root,
        insecure,
    })
}
