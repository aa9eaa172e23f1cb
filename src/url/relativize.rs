use url::Url;

/// Computes the output folder key for a discovered video URL
///
/// The key groups a video with its siblings from the same listing directory.
///
/// # Algorithm
///
/// 1. Split the root path and the video path into segments, discarding
///    empty segments
/// 2. If the video is not nested deeper than the root, the key is `"root"`
/// 3. Otherwise drop the video's last segment (the filename), drop the
///    leading segments shared positionally with the root, and join the
///    remainder with underscores
/// 4. Sanitize the result; an empty result (video directly under the root)
///    also yields `"root"`
///
/// Paths are compared as-is, without percent-decoding; literal `%20`
/// sequences are handled by [`sanitize_key`].
///
/// # Examples
///
/// ```
/// use url::Url;
/// use vidgather::url::folder_key;
///
/// let root = Url::parse("https://example.com/show/").unwrap();
/// let nested = Url::parse("https://example.com/show/season1/ep1.mp4").unwrap();
/// let direct = Url::parse("https://example.com/show/ep1.mp4").unwrap();
/// assert_eq!(folder_key(&root, &nested), "season1");
/// assert_eq!(folder_key(&root, &direct), "root");
/// ```
pub fn folder_key(root: &Url, video: &Url) -> String {
    let root_segments: Vec<&str> = path_segments(root.path());
    let video_segments: Vec<&str> = path_segments(video.path());

    if video_segments.len() <= root_segments.len() {
        return "root".to_string();
    }

    // Everything but the filename, minus the segments covered by the root
    let sub_path = &video_segments[..video_segments.len() - 1];
    let start = root_segments.len().min(sub_path.len());
    let relative = &sub_path[start..];

    let key = sanitize_key(&relative.join("_"));
    if key.is_empty() {
        "root".to_string()
    } else {
        key
    }
}

/// Sanitizes a folder key for filesystem use
///
/// Replaces spaces, hyphens, and literal `%20` sequences with underscores.
pub fn sanitize_key(name: &str) -> String {
    name.replace(' ', "_").replace('-', "_").replace("%20", "_")
}

fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
