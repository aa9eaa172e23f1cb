//! URL handling module for vidgather
//!
//! This module provides base-URL normalization, output folder naming, and
//! the path relativization used to group discovered videos by listing folder.

mod relativize;

use url::Url;

// Re-export main functions
pub use relativize::{folder_key, sanitize_key};

/// Ensures a crawl root URL ends with a path separator
///
/// The trailing slash matters twice: it makes the root a valid base for
/// relative link resolution, and it is the containment prefix every
/// discovered URL is checked against.
pub fn ensure_trailing_slash(url: &Url) -> Url {
    if url.path().ends_with('/') {
        return url.clone();
    }
    let mut normalized = url.clone();
    let path = format!("{}/", url.path());
    normalized.set_path(&path);
    normalized
}

/// Derives the on-disk folder name for a crawl root
///
/// Takes the last non-empty path segment of the root URL, percent-decoded
/// and sanitized. A crawl rooted at the top of a host yields `"root"`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use vidgather::url::root_folder_name;
///
/// let root = Url::parse("https://example.com/My%20Show/").unwrap();
/// assert_eq!(root_folder_name(&root), "My_Show");
/// ```
pub fn root_folder_name(root: &Url) -> String {
    let path = root.path();
    let decoded = urlencoding::decode(path)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| path.to_string());
    let last = decoded
        .split('/')
        .filter(|segment| !segment.is_empty())
        .last();

    match last {
        Some(segment) => sanitize_key(segment),
        None => "root".to_string(),
    }
}
