//! Walking a season's episodes and extracting each episode's tracks.

use crate::parsing::SoundtrackParser;
use crate::playlist::Playlist;
use crate::r#trait::SoundtrackPage;
use crate::{Result, ScrapeError};
use std::fmt;

/// What happened to a single episode.
#[derive(Debug)]
pub enum EpisodeOutcome {
    /// The track panel was read and `tracks` pairs were merged.
    Scraped { tracks: usize },
    /// The episode contributed nothing because of `reason`.
    Skipped { reason: ScrapeError },
}

/// One visited episode position.
#[derive(Debug)]
pub struct EpisodeReport {
    /// 0-based position among the season's episode headings
    pub index: usize,
    /// Heading text, or a positional placeholder when it could not be read
    pub title: String,
    pub outcome: EpisodeOutcome,
}

impl EpisodeReport {
    pub fn is_scraped(&self) -> bool {
        matches!(self.outcome, EpisodeOutcome::Scraped { .. })
    }
}

impl fmt::Display for EpisodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            EpisodeOutcome::Scraped { tracks } => {
                write!(f, "{} - {} track(s)", self.title, tracks)
            }
            EpisodeOutcome::Skipped { reason } => write!(f, "{} - skipped: {}", self.title, reason),
        }
    }
}

/// Per-episode results of a walk, in visiting order.
#[derive(Debug, Default)]
pub struct WalkSummary {
    pub episodes: Vec<EpisodeReport>,
}

impl WalkSummary {
    /// Number of episodes whose track panel was read.
    pub fn scraped(&self) -> usize {
        self.episodes.iter().filter(|e| e.is_scraped()).count()
    }

    /// Number of episodes that contributed nothing because of an error.
    pub fn skipped(&self) -> usize {
        self.episodes.len() - self.scraped()
    }
}

/// Extract the tracks of the episode page currently shown.
///
/// Waits for the track panel, expands it when a show-all control exists,
/// pairs songs with artists and merges the pairs into `playlist`. Returns the
/// number of pairs merged.
pub async fn extract_episode(
    page: &dyn SoundtrackPage,
    parser: &SoundtrackParser,
    playlist: &mut Playlist,
) -> Result<usize> {
    page.wait_for_track_panel().await?;

    match page.expand_track_panel().await {
        Ok(true) => log::debug!("Expanded abridged track list"),
        Ok(false) => log::debug!("No 'Show All' control in track panel"),
        Err(e) => log::info!("No 'Show All' button found or issue with clicking: {e}"),
    }

    let html = page.track_panel_html().await?;
    let pairs = parser.parse_pairs(&html);
    Ok(playlist.merge(pairs))
}

/// Visit every episode of the season page currently shown.
///
/// Episode headings are re-read before each visit, since going back to the
/// season page replaces the elements seen on the previous pass. A failure on
/// one episode is recorded in the summary and the walk moves on. After every
/// episode that was entered, the page navigates back, whether or not
/// extraction succeeded.
///
/// Only the initial episode lookup can fail the walk as a whole.
pub async fn walk_episodes(
    page: &dyn SoundtrackPage,
    parser: &SoundtrackParser,
    playlist: &mut Playlist,
) -> Result<WalkSummary> {
    let total = page.headings().await?.len();
    log::info!("Season lists {total} episode(s)");

    let mut summary = WalkSummary::default();
    for index in 0..total {
        let report = visit_episode(page, parser, playlist, index).await;
        match &report.outcome {
            EpisodeOutcome::Scraped { tracks } => {
                log::debug!("Episode {} yielded {tracks} track(s)", index + 1)
            }
            EpisodeOutcome::Skipped { reason } => {
                log::warn!("Could not navigate to episode: {}, error: {reason}", report.title)
            }
        }
        summary.episodes.push(report);
    }

    Ok(summary)
}

async fn visit_episode(
    page: &dyn SoundtrackPage,
    parser: &SoundtrackParser,
    playlist: &mut Playlist,
    index: usize,
) -> EpisodeReport {
    let placeholder = format!("episode #{}", index + 1);

    let titles = match page.headings().await {
        Ok(titles) => titles,
        Err(reason) => return skipped(index, placeholder, reason),
    };
    let title = match titles.get(index) {
        Some(title) if !title.is_empty() => title.clone(),
        Some(_) => placeholder,
        None => {
            let reason = ScrapeError::NotFound {
                what: format!("{placeholder} (season page now lists {})", titles.len()),
                timeout_secs: 0,
            };
            return skipped(index, placeholder, reason);
        }
    };

    log::info!("Navigating to episode: {title}");
    if let Err(reason) = page.activate_heading(index).await {
        return skipped(index, title, reason);
    }

    let extracted = extract_episode(page, parser, playlist).await;

    if let Err(e) = page.go_back().await {
        log::warn!("Failed to navigate back after {title}: {e}");
    }

    match extracted {
        Ok(tracks) => EpisodeReport {
            index,
            title,
            outcome: EpisodeOutcome::Scraped { tracks },
        },
        Err(reason) => skipped(index, title, reason),
    }
}

fn skipped(index: usize, title: String, reason: ScrapeError) -> EpisodeReport {
    EpisodeReport {
        index,
        title,
        outcome: EpisodeOutcome::Skipped { reason },
    }
}
