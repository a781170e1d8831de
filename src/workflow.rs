use crate::config::ScraperConfig;
use crate::parsing::SoundtrackParser;
use crate::playlist::Playlist;
use crate::r#trait::SoundtrackPage;
use crate::report;
use crate::season::{select_season, Operator, SeasonChoice};
use crate::session::{bootstrap, show_url};
use crate::walker::{walk_episodes, WalkSummary};
use crate::Result;
use std::io::{self, Write};

/// Everything a finished run produced.
#[derive(Debug)]
pub struct ScrapeRun {
    /// Show name as entered by the operator
    pub show_name: String,
    /// Lookup URL the session was opened on
    pub url: String,
    pub season: SeasonChoice,
    pub playlist: Playlist,
    pub summary: WalkSummary,
}

impl ScrapeRun {
    /// Print the playlist and its size.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        report::write_playlist(out, &self.playlist)
    }
}

/// Drives one scraping run: bootstrap, season selection, episode walk.
///
/// # Examples
///
/// ```rust,no_run
/// use soundtrack_scraper::{ChromiumPage, ConsoleOperator, ScraperConfig, SoundtrackScraper};
///
/// # tokio_test::block_on(async {
/// let config = ScraperConfig::new();
/// let page = ChromiumPage::launch(&config).await?;
/// let scraper = SoundtrackScraper::new(page, config)?;
///
/// let mut operator = ConsoleOperator::new();
/// let run = scraper.run("The Bear", &mut operator).await?;
/// run.write_report(&mut std::io::stdout())?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
pub struct SoundtrackScraper<P> {
    page: P,
    config: ScraperConfig,
    parser: SoundtrackParser,
}

impl<P: SoundtrackPage> SoundtrackScraper<P> {
    /// Create a scraper over `page`. Fails if a configured locator is not a
    /// valid selector.
    pub fn new(page: P, config: ScraperConfig) -> Result<Self> {
        let parser = SoundtrackParser::new(&config.locators, config.pairing)?;
        Ok(Self {
            page,
            config,
            parser,
        })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Scrape one season of `show_name`.
    ///
    /// The browser session is closed before returning, whether the run
    /// succeeded or not. Bootstrap and season-selection errors are returned;
    /// per-episode errors end up in [`ScrapeRun::summary`].
    pub async fn run(&self, show_name: &str, operator: &mut dyn Operator) -> Result<ScrapeRun> {
        let outcome = self.scrape(show_name, operator).await;

        if let Err(e) = self.page.close().await {
            log::warn!("Failed to close browser session: {e}");
        }

        outcome
    }

    async fn scrape(&self, show_name: &str, operator: &mut dyn Operator) -> Result<ScrapeRun> {
        let url = show_url(&self.config.base_url, show_name);
        bootstrap(&self.page, &url).await?;

        let season = select_season(&self.page, operator, show_name).await?;

        let mut playlist = Playlist::new();
        let summary = walk_episodes(&self.page, &self.parser, &mut playlist).await?;
        report::log_summary(&summary);

        Ok(ScrapeRun {
            show_name: show_name.to_string(),
            url,
            season,
            playlist,
            summary,
        })
    }
}
