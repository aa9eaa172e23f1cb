//! Playlist persistence
//!
//! Writes one `.m3u` file per output folder key. Playlists are plain
//! UTF-8 text, one absolute URL per line, consumable by standard media
//! players. Writing is create-or-overwrite, so re-running a crawl
//! replaces stale playlists instead of appending to them.

use crate::crawler::CollectedMapping;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of writing a collected mapping to disk
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteReport {
    /// Playlists written successfully
    pub written: usize,
    /// Playlists that failed to write
    pub failed: usize,
}

/// Writes every playlist in the mapping under the output root
///
/// For each key the file lands at `output_root/<key>/<key>.m3u`, parent
/// directories created as needed. A failure writing one playlist is
/// logged and counted but does not prevent writing the others. An empty
/// mapping writes nothing; that is reported but is not a failure.
///
/// # Arguments
///
/// * `collected` - The completed mapping from the crawl engine
/// * `output_root` - The directory playlists are written under
pub fn write_playlists(collected: &CollectedMapping, output_root: &Path) -> WriteReport {
    let mut report = WriteReport::default();

    if collected.is_empty() {
        tracing::warn!("no video links found");
        return report;
    }

    for (folder, links) in collected {
        match write_playlist(output_root, folder, links) {
            Ok(path) => {
                tracing::info!("saved {} videos -> {}", links.len(), path.display());
                report.written += 1;
            }
            Err(e) => {
                tracing::warn!("failed to write playlist for [{}]: {}", folder, e);
                report.failed += 1;
            }
        }
    }

    report
}

/// Writes a single playlist file, returning its path
fn write_playlist(output_root: &Path, folder: &str, links: &[String]) -> io::Result<PathBuf> {
    let dir = output_root.join(folder);
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!("{}.m3u", folder));
    let mut contents = String::new();
    for link in links {
        contents.push_str(link);
        contents.push('\n');
    }
    fs::write(&path, contents)?;

    Ok(path)
}
