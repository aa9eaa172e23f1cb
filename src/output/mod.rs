//! Output module for persisting crawl results
//!
//! The only output artifact is the per-folder M3U playlist tree written
//! at the end of a successful crawl.

mod playlist;

pub use playlist::{write_playlists, WriteReport};
