//! The aggregate song-to-artist mapping built across a season's episodes.

use std::collections::HashMap;
use std::fmt;

/// A song title and the artist text scraped for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackEntry {
    /// The song title as shown on the episode page
    pub song: String,
    /// Normalized artist/contributor text
    pub artist: String,
}

impl fmt::Display for TrackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.song, self.artist)
    }
}

/// Mapping from song title to artist text.
///
/// Keys are unique. The first insertion of a song fixes its position in
/// iteration order; inserting the same song again replaces the artist in
/// place, so the last write wins.
///
/// # Examples
///
/// ```rust
/// use soundtrack_scraper::Playlist;
///
/// let mut playlist = Playlist::new();
/// playlist.insert("Song A", "Artist 1");
/// playlist.insert("Song B", "Artist 3");
/// playlist.insert("Song A", "Artist 2");
///
/// assert_eq!(playlist.len(), 2);
/// assert_eq!(playlist.get("Song A"), Some("Artist 2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<TrackEntry>,
    positions: HashMap<String, usize>,
}

impl Playlist {
    /// Create an empty playlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a song's artist.
    ///
    /// Returns the previous artist when the song was already present.
    pub fn insert(&mut self, song: impl Into<String>, artist: impl Into<String>) -> Option<String> {
        let song = song.into();
        let artist = artist.into();

        if let Some(&position) = self.positions.get(&song) {
            let previous = std::mem::replace(&mut self.entries[position].artist, artist);
            log::debug!("Overwrote artist for '{song}' (was '{previous}')");
            return Some(previous);
        }

        self.positions.insert(song.clone(), self.entries.len());
        self.entries.push(TrackEntry { song, artist });
        None
    }

    /// Merge a batch of `(song, artist)` pairs, returning how many were applied.
    pub fn merge<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut applied = 0;
        for (song, artist) in pairs {
            self.insert(song, artist);
            applied += 1;
        }
        applied
    }

    /// Look up the artist recorded for `song`.
    pub fn get(&self, song: &str) -> Option<&str> {
        self.positions
            .get(song)
            .map(|&position| self.entries[position].artist.as_str())
    }

    /// Number of distinct songs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TrackEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a TrackEntry;
    type IntoIter = std::slice::Iter<'a, TrackEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
