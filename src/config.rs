//! Scraper configuration.
//!
//! Everything that ties the scraper to the target site's markup lives in
//! [`SiteLocators`]; timing and browser behaviour live in [`ScraperConfig`].

use crate::parsing::compile_selector;
use crate::Result;
use std::time::Duration;

/// Default lookup address; the show slug is appended to it.
pub const DEFAULT_BASE_URL: &str = "https://www.tunefind.com/show/";

/// Element locators for the target site's current markup.
///
/// Only `consent_button` is an XPath expression (it matches on the button
/// label). Every other locator is a CSS selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLocators {
    /// Cookie/consent "AGREE" button (XPath)
    pub consent_button: String,
    /// Season headings on the show page and episode headings on a season page
    pub heading: String,
    /// Container holding every song/artist entry of an episode
    pub track_panel: String,
    /// "Show all" control inside the track panel
    pub show_all: String,
    /// Song title element inside the track panel
    pub song_title: String,
    /// Artist row inside the track panel (one row may hold several contributors)
    pub artist_row: String,
}

impl Default for SiteLocators {
    fn default() -> Self {
        Self {
            consent_button: r#"//button[span[text()="AGREE"]]"#.to_string(),
            heading: "h4.sc-fUnMCh.ImNYE.sc-hmdomO.ifqyAa".to_string(),
            track_panel: "div.sc-hBtRBD.iUapDl".to_string(),
            show_all: "p.sc-jEACwC.jpIqjk.sc-hmdomO.YqQqi:not(.sc-knuQbY)".to_string(),
            song_title: "p.sc-jEACwC.jpIqjk.sc-hmdomO.YqQqi.sc-knuQbY.dhEDwX".to_string(),
            artist_row: "div.ant-row.sc-ERObt.fRngQV".to_string(),
        }
    }
}

/// How song titles are matched with artist rows inside a track panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingStrategy {
    /// Zip songs and artists by position, truncating to the shorter list.
    #[default]
    Positional,
    /// Pair each song with the artist rows sharing its nearest track-row ancestor.
    Structural,
}

/// Unified configuration for a scraping run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Address the show slug is appended to
    pub base_url: String,
    /// Upper bound for every element wait
    pub element_timeout: Duration,
    /// Delay between two probes of a bounded wait
    pub poll_interval: Duration,
    /// Run the browser without a window
    pub headless: bool,
    /// Song/artist association strategy
    pub pairing: PairingStrategy,
    /// Site markup contract
    pub locators: SiteLocators,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            element_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(250),
            headless: true,
            pairing: PairingStrategy::default(),
            locators: SiteLocators::default(),
        }
    }
}

impl ScraperConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a different lookup address
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the element wait window
    pub fn with_element_timeout(mut self, timeout: Duration) -> Self {
        self.element_timeout = timeout;
        self
    }

    /// Set the delay between wait probes
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Show or hide the browser window
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Choose how songs and artists are associated
    pub fn with_pairing(mut self, pairing: PairingStrategy) -> Self {
        self.pairing = pairing;
        self
    }

    /// Replace the site locators
    pub fn with_locators(mut self, locators: SiteLocators) -> Self {
        self.locators = locators;
        self
    }

    /// Check that every CSS locator compiles.
    ///
    /// Run this before launching a browser so a bad locator fails fast.
    pub fn validate(&self) -> Result<()> {
        let locators = &self.locators;
        for css in [
            &locators.heading,
            &locators.track_panel,
            &locators.show_all,
            &locators.song_title,
            &locators.artist_row,
        ] {
            compile_selector(css)?;
        }
        Ok(())
    }
}
