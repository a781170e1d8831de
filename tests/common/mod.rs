#![allow(dead_code)]
use async_trait::async_trait;
use soundtrack_scraper::{Result, ScrapeError, SoundtrackPage};
use std::cell::RefCell;
use std::time::Duration;

const FAKE_TIMEOUT: Duration = Duration::from_secs(10);

/// Render a track panel the way the site does: one row per track, the song
/// title next to its artist row.
pub fn panel_html(tracks: &[(&str, &str)]) -> String {
    let rows: String = tracks
        .iter()
        .map(|(song, artist)| {
            format!(
                r#"<div class="ant-row track-row">
                    <p class="sc-jEACwC jpIqjk sc-hmdomO YqQqi sc-knuQbY dhEDwX">{song}</p>
                    <div class="ant-row sc-ERObt fRngQV">{artist}</div>
                </div>"#
            )
        })
        .collect();
    format!(r#"<div class="sc-hBtRBD iUapDl">{rows}</div>"#)
}

#[derive(Debug, Clone)]
pub struct FakeEpisode {
    pub title: String,
    /// `None` means the episode page never renders a track panel.
    pub panel: Option<String>,
    pub show_all: bool,
}

impl FakeEpisode {
    pub fn with_tracks(title: &str, tracks: &[(&str, &str)]) -> Self {
        Self {
            title: title.to_string(),
            panel: Some(panel_html(tracks)),
            show_all: false,
        }
    }

    pub fn without_panel(title: &str) -> Self {
        Self {
            title: title.to_string(),
            panel: None,
            show_all: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FakeSeason {
    pub title: String,
    pub episodes: Vec<FakeEpisode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    Blank,
    Show,
    Season(usize),
    Episode(usize, usize),
}

#[derive(Debug, Default)]
pub struct FakeLog {
    pub opened: Vec<String>,
    pub consent_dismissed: bool,
    pub activated: Vec<usize>,
    pub panel_reads: usize,
    pub expansions: usize,
    pub back_navigations: usize,
    pub closed: bool,
}

/// In-memory stand-in for the show site, with a navigation history.
pub struct FakeSite {
    seasons: Vec<FakeSeason>,
    consent_popup: bool,
    history: RefCell<Vec<Location>>,
    log: RefCell<FakeLog>,
}

impl FakeSite {
    pub fn new(seasons: Vec<FakeSeason>) -> Self {
        Self {
            seasons,
            consent_popup: true,
            history: RefCell::new(vec![Location::Blank]),
            log: RefCell::new(FakeLog::default()),
        }
    }

    pub fn without_consent_popup(mut self) -> Self {
        self.consent_popup = false;
        self
    }

    pub fn log(&self) -> std::cell::Ref<'_, FakeLog> {
        self.log.borrow()
    }

    fn here(&self) -> Location {
        *self.history.borrow().last().unwrap_or(&Location::Blank)
    }

    fn current_episode(&self) -> Option<&FakeEpisode> {
        match self.here() {
            Location::Episode(season, episode) => self.seasons.get(season)?.episodes.get(episode),
            _ => None,
        }
    }

    fn headings_here(&self) -> Vec<String> {
        match self.here() {
            Location::Show => self.seasons.iter().map(|s| s.title.clone()).collect(),
            Location::Season(season) => self.seasons[season]
                .episodes
                .iter()
                .map(|e| e.title.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.log.borrow().closed {
            return Err(ScrapeError::Browser("session already closed".to_string()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl SoundtrackPage for FakeSite {
    async fn open(&self, url: &str) -> Result<()> {
        self.ensure_open()?;
        self.log.borrow_mut().opened.push(url.to_string());
        self.history.borrow_mut().push(Location::Show);
        Ok(())
    }

    async fn dismiss_consent(&self) -> Result<bool> {
        self.ensure_open()?;
        if self.consent_popup {
            self.log.borrow_mut().consent_dismissed = true;
        }
        Ok(self.consent_popup)
    }

    async fn headings(&self) -> Result<Vec<String>> {
        self.ensure_open()?;
        let headings = self.headings_here();
        if headings.is_empty() {
            return Err(ScrapeError::not_found("season/episode heading", FAKE_TIMEOUT));
        }
        Ok(headings)
    }

    async fn activate_heading(&self, index: usize) -> Result<()> {
        self.ensure_open()?;
        if index >= self.headings_here().len() {
            return Err(ScrapeError::not_found(
                format!("heading #{}", index + 1),
                FAKE_TIMEOUT,
            ));
        }
        let next = match self.here() {
            Location::Show => Location::Season(index),
            Location::Season(season) => Location::Episode(season, index),
            _ => unreachable!("headings only exist on show and season pages"),
        };
        self.log.borrow_mut().activated.push(index);
        self.history.borrow_mut().push(next);
        Ok(())
    }

    async fn wait_for_track_panel(&self) -> Result<()> {
        self.ensure_open()?;
        match self.current_episode() {
            Some(episode) if episode.panel.is_some() => Ok(()),
            _ => Err(ScrapeError::not_found("track list panel", FAKE_TIMEOUT)),
        }
    }

    async fn expand_track_panel(&self) -> Result<bool> {
        let expandable = self.current_episode().is_some_and(|e| e.show_all);
        if expandable {
            self.log.borrow_mut().expansions += 1;
        }
        Ok(expandable)
    }

    async fn track_panel_html(&self) -> Result<String> {
        let panel = self
            .current_episode()
            .and_then(|e| e.panel.clone())
            .ok_or_else(|| ScrapeError::not_found("track list panel", FAKE_TIMEOUT))?;
        self.log.borrow_mut().panel_reads += 1;
        Ok(panel)
    }

    async fn go_back(&self) -> Result<()> {
        self.ensure_open()?;
        let mut history = self.history.borrow_mut();
        if history.len() > 1 {
            history.pop();
        }
        self.log.borrow_mut().back_navigations += 1;
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.log.borrow_mut().closed = true;
        Ok(())
    }
}
