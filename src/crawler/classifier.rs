//! Link classification heuristics
//!
//! Decides, for each link found on a listing page, whether it denotes a
//! video file, a sub-folder to traverse, or something to ignore. The
//! heuristics are tuned against common static file-listing server output
//! (nginx autoindex, Apache mod_autoindex, and similar); the extension
//! set is swappable so other listing formats can be supported without
//! touching the traversal engine.

use url::Url;

/// Default set of recognized video file extensions
pub const VIDEO_EXTS: &[&str] = &[".mp4", ".mkv", ".avi", ".mov", ".flv", ".webm", ".wmv"];

/// Classification of a single discovered link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// A terminal video resource; collected, never fetched
    Video,
    /// Another directory listing to traverse
    Folder,
    /// Anything else; dropped
    Ignored,
}

/// Classifies discovered links using a configurable extension set
#[derive(Debug, Clone)]
pub struct Classifier {
    video_exts: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Creates a classifier with the default video extension set
    pub fn new() -> Self {
        Self::with_extensions(VIDEO_EXTS.iter().map(|e| e.to_string()).collect())
    }

    /// Creates a classifier with a custom extension set
    ///
    /// Extensions must include the leading dot and be lowercase.
    pub fn with_extensions(video_exts: Vec<String>) -> Self {
        Self { video_exts }
    }

    /// Classifies one (raw href, resolved URL) pair
    ///
    /// Video is checked before Folder: an href satisfying both is a Video.
    ///
    /// # Arguments
    ///
    /// * `href` - The raw href attribute as found on the page
    /// * `resolved` - The href resolved against the page URL
    /// * `root` - The crawl root, used for the descendant check
    pub fn classify(&self, href: &str, resolved: &Url, root: &Url) -> LinkClass {
        if self.is_video(href, resolved) {
            LinkClass::Video
        } else if self.is_folder(href, resolved, root) {
            LinkClass::Folder
        } else {
            LinkClass::Ignored
        }
    }

    /// Video check: the href (query string stripped) or the resolved URL
    /// path ends with a recognized extension, case-insensitively
    ///
    /// The dual check tolerates servers whose hrefs are rewritten relative
    /// to a different base than the page URL.
    fn is_video(&self, href: &str, resolved: &Url) -> bool {
        let lowered = href.to_lowercase();
        let href_path = lowered.split('?').next().unwrap_or("");
        if self.video_exts.iter().any(|ext| href_path.ends_with(ext)) {
            return true;
        }

        let resolved_path = resolved.path().to_lowercase();
        self.video_exts
            .iter()
            .any(|ext| resolved_path.ends_with(ext))
    }

    /// Folder check: a trailing separator on the href, or an extensionless
    /// last segment whose resolved path is a strict descendant of the root
    ///
    /// The second condition admits "extensionless directory" listings while
    /// rejecting sibling or ascending links that happen to lack a dot.
    fn is_folder(&self, href: &str, resolved: &Url, root: &Url) -> bool {
        if href.ends_with('/') {
            return true;
        }

        let resolved_path = resolved.path().trim_end_matches('/');
        let last_segment = resolved_path.rsplit('/').next().unwrap_or("");
        if last_segment.contains('.') {
            return false;
        }

        let root_path = root.path().trim_end_matches('/');
        resolved_path.starts_with(&format!("{}/", root_path))
    }
}
