use crate::url::ensure_trailing_slash;
use crate::{ConfigError, ConfigResult};
use std::fs;
use std::path::Path;
use url::Url;

/// Validates and normalizes the starting URL
///
/// # Validation Steps
///
/// 1. Trim surrounding whitespace; reject an empty string
/// 2. Parse as an absolute URL
/// 3. Require an http or https scheme
/// 4. Require a host
/// 5. Normalize to end with a path separator
///
/// # Examples
///
/// ```
/// use vidgather::config::validate_start_url;
///
/// let root = validate_start_url("https://example.com/show").unwrap();
/// assert_eq!(root.as_str(), "https://example.com/show/");
///
/// assert!(validate_start_url("").is_err());
/// assert!(validate_start_url("ftp://example.com/").is_err());
/// ```
pub fn validate_start_url(raw: &str) -> ConfigResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyUrl);
    }

    let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
        url: trimmed.to_string(),
        message: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::MissingHost);
    }

    Ok(ensure_trailing_slash(&url))
}

/// Ensures the output directory exists and is usable
///
/// Creates the directory (and parents) if missing. An unwritable or
/// otherwise unusable path is a configuration error and surfaces before
/// any network activity.
pub fn prepare_output_dir(path: &Path) -> ConfigResult<()> {
    fs::create_dir_all(path).map_err(|e| ConfigError::OutputDir {
        path: path.display().to_string(),
        source: e,
    })
}
