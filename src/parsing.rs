//! HTML parsing utilities for episode track panels.
//!
//! The browser adapter hands over an outer-HTML snapshot of an episode's
//! track panel; everything from there on is a pure function of that string,
//! so extraction can be exercised on fixture HTML without a browser.

use crate::config::{PairingStrategy, SiteLocators};
use crate::{Result, ScrapeError};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Songs and artists read from one track panel, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackListing {
    /// Song titles
    pub songs: Vec<String>,
    /// Normalized artist rows
    pub artists: Vec<String>,
}

/// Parser for the track panel of an episode page.
///
/// Holds the compiled song and artist selectors and the pairing strategy.
#[derive(Debug, Clone)]
pub struct SoundtrackParser {
    song_selector: Selector,
    artist_selector: Selector,
    pairing: PairingStrategy,
}

impl SoundtrackParser {
    /// Compile the song and artist locators.
    pub fn new(locators: &SiteLocators, pairing: PairingStrategy) -> Result<Self> {
        Ok(Self {
            song_selector: compile_selector(&locators.song_title)?,
            artist_selector: compile_selector(&locators.artist_row)?,
            pairing,
        })
    }

    /// The strategy used by [`parse_pairs`](Self::parse_pairs).
    pub fn pairing(&self) -> PairingStrategy {
        self.pairing
    }

    /// Read the ordered song titles and artist rows from a panel snapshot.
    ///
    /// Empty titles are kept so that every song still lines up with the
    /// artist row at the same position.
    pub fn parse_listing(&self, panel_html: &str) -> TrackListing {
        let fragment = Html::parse_fragment(panel_html);

        let songs: Vec<String> = fragment
            .select(&self.song_selector)
            .map(|song| collapse_whitespace(&element_text(&song)))
            .collect();

        let artists: Vec<String> = fragment
            .select(&self.artist_selector)
            .map(|row| normalize_artist(&element_text(&row)))
            .collect();

        log::debug!(
            "Track panel holds {} songs and {} artist rows",
            songs.len(),
            artists.len()
        );

        TrackListing { songs, artists }
    }

    /// Extract `(song, artist)` pairs from a panel snapshot.
    pub fn parse_pairs(&self, panel_html: &str) -> Vec<(String, String)> {
        match self.pairing {
            PairingStrategy::Positional => {
                let listing = self.parse_listing(panel_html);
                if listing.songs.len() != listing.artists.len() {
                    log::warn!(
                        "Song/artist count mismatch ({} vs {}), pairing by position",
                        listing.songs.len(),
                        listing.artists.len()
                    );
                }
                pair_positional(listing.songs, listing.artists)
            }
            PairingStrategy::Structural => self.pair_structural(panel_html),
        }
    }

    /// Pair every song with the artist rows of its nearest ancestor that
    /// contains no other song. Songs without such a row are skipped.
    fn pair_structural(&self, panel_html: &str) -> Vec<(String, String)> {
        let fragment = Html::parse_fragment(panel_html);
        let mut pairs = Vec::new();

        for song in fragment.select(&self.song_selector) {
            let title = collapse_whitespace(&element_text(&song));
            if title.is_empty() {
                continue;
            }

            let mut artist = None;
            for ancestor in song.ancestors().filter_map(ElementRef::wrap) {
                if ancestor.select(&self.song_selector).count() > 1 {
                    break;
                }
                let rows: Vec<String> = ancestor
                    .select(&self.artist_selector)
                    .map(|row| normalize_artist(&element_text(&row)))
                    .filter(|row| !row.is_empty())
                    .collect();
                if !rows.is_empty() {
                    artist = Some(rows.join(", "));
                    break;
                }
            }

            match artist {
                Some(artist) => pairs.push((title, artist)),
                None => log::warn!("No artist row shares a track row with '{title}', skipping"),
            }
        }

        pairs
    }
}

/// Strip embedded line separators from artist text.
///
/// Multi-contributor rows come back with one contributor per line; the
/// lines are joined with nothing in between, then runs of whitespace are
/// collapsed to one space and the ends trimmed.
///
/// ```rust
/// use soundtrack_scraper::parsing::normalize_artist;
///
/// assert_eq!(normalize_artist("Artist One\nArtist Two"), "Artist OneArtist Two");
/// assert_eq!(normalize_artist("  Solo Act \r\n"), "Solo Act");
/// ```
pub fn normalize_artist(raw: &str) -> String {
    collapse_whitespace(&line_break_pattern().replace_all(raw, ""))
}

/// Pair songs with artists by position, dropping whatever the shorter list
/// cannot match. Pairs whose song title is empty are dropped after zipping.
pub fn pair_positional(songs: Vec<String>, artists: Vec<String>) -> Vec<(String, String)> {
    songs
        .into_iter()
        .zip(artists)
        .filter(|(song, _)| !song.is_empty())
        .collect()
}

pub(crate) fn compile_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("invalid selector {css:?}: {e}")))
}

fn line_break_pattern() -> &'static Regex {
    static LINE_BREAKS: OnceLock<Regex> = OnceLock::new();
    LINE_BREAKS.get_or_init(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"))
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
