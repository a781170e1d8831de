//! Printing the finished playlist.

use crate::playlist::Playlist;
use crate::walker::WalkSummary;
use std::io::{self, Write};

/// Write every `song : artist` pair in insertion order, then the count.
///
/// ```rust
/// use soundtrack_scraper::{report::write_playlist, Playlist};
///
/// let mut playlist = Playlist::new();
/// playlist.insert("X", "Y");
///
/// let mut out = Vec::new();
/// write_playlist(&mut out, &playlist).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "X : Y\nplaylist length: 1\n");
/// ```
pub fn write_playlist<W: Write>(out: &mut W, playlist: &Playlist) -> io::Result<()> {
    for entry in playlist {
        writeln!(out, "{entry}")?;
    }
    writeln!(out, "playlist length: {}", playlist.len())
}

/// Log how the walk went, one line per skipped episode.
pub fn log_summary(summary: &WalkSummary) {
    log::info!(
        "Scraped {} of {} episode(s)",
        summary.scraped(),
        summary.episodes.len()
    );
    for episode in summary.episodes.iter().filter(|e| !e.is_scraped()) {
        log::warn!("Skipped {episode}");
    }
}
