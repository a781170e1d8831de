//! # soundtrack-scraper
//!
//! Collects the soundtrack of one season of a TV show by driving a browser
//! through the show's pages on a media-metadata site: open the show page,
//! pick a season, visit every episode, read the song and artist entries of
//! each episode's track list and merge them into a single [`Playlist`].
//!
//! ## Overview
//!
//! - [`SoundtrackPage`] is the boundary to the browser and the site's markup.
//!   [`ChromiumPage`] implements it over the DevTools protocol.
//! - [`SoundtrackScraper`] runs the workflow against any [`SoundtrackPage`].
//! - [`parsing`] turns a track panel snapshot into `(song, artist)` pairs.
//! - [`Operator`] supplies the show name and season number.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use soundtrack_scraper::{
//!     session::prompt_show_name, ChromiumPage, ConsoleOperator, ScraperConfig,
//!     SoundtrackScraper,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut operator = ConsoleOperator::new();
//!     let show = prompt_show_name(&mut operator)?;
//!
//!     let config = ScraperConfig::new();
//!     let page = ChromiumPage::launch(&config).await?;
//!     let run = SoundtrackScraper::new(page, config)?
//!         .run(&show, &mut operator)
//!         .await?;
//!
//!     run.write_report(&mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Offline Parsing
//!
//! ```rust
//! use soundtrack_scraper::{PairingStrategy, SiteLocators, SoundtrackParser};
//!
//! let html = r#"<div class="sc-hBtRBD iUapDl">
//!   <p class="sc-jEACwC jpIqjk sc-hmdomO YqQqi sc-knuQbY dhEDwX">Hold On</p>
//!   <div class="ant-row sc-ERObt fRngQV">Chord Overstreet</div>
//! </div>"#;
//!
//! let parser = SoundtrackParser::new(&SiteLocators::default(), PairingStrategy::Positional)?;
//! let pairs = parser.parse_pairs(html);
//! assert_eq!(pairs, vec![("Hold On".to_string(), "Chord Overstreet".to_string())]);
//! # Ok::<(), soundtrack_scraper::ScrapeError>(())
//! ```

pub mod browser;
pub mod config;
pub mod error;
pub mod parsing;
pub mod playlist;
pub mod report;
pub mod season;
pub mod session;
pub mod r#trait;
pub mod wait;
pub mod walker;
pub mod workflow;

pub use browser::ChromiumPage;
pub use config::{PairingStrategy, ScraperConfig, SiteLocators, DEFAULT_BASE_URL};
pub use error::ScrapeError;
pub use parsing::{SoundtrackParser, TrackListing};
pub use playlist::{Playlist, TrackEntry};
pub use r#trait::SoundtrackPage;
pub use season::{ConsoleOperator, Operator, ScriptedOperator, SeasonChoice};
pub use walker::{EpisodeOutcome, EpisodeReport, WalkSummary};
pub use workflow::{ScrapeRun, SoundtrackScraper};

#[cfg(feature = "mock")]
pub use r#trait::MockSoundtrackPage;

// Re-export scraper types for testing
pub use scraper::Html;

pub type Result<T> = std::result::Result<T, ScrapeError>;
