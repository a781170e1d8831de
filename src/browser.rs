use crate::config::{ScraperConfig, SiteLocators};
use crate::r#trait::SoundtrackPage;
use crate::wait::{wait_for, WaitConfig};
use crate::{Result, ScrapeError};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Script-level click, used where a regular click can be intercepted by
/// overlays or off-screen layout.
const FORCE_CLICK: &str = "function() { this.click(); }";

/// [`SoundtrackPage`] backed by a Chromium instance driven over the
/// DevTools protocol.
///
/// # Examples
///
/// ```rust,no_run
/// use soundtrack_scraper::{ChromiumPage, ScraperConfig, SoundtrackPage};
///
/// # tokio_test::block_on(async {
/// let config = ScraperConfig::new().with_headless(false);
/// let page = ChromiumPage::launch(&config).await?;
/// page.open("https://www.tunefind.com/show/the-bear").await?;
/// let seasons = page.headings().await?;
/// println!("{} seasons", seasons.len());
/// page.close().await?;
/// # Ok::<(), soundtrack_scraper::ScrapeError>(())
/// # });
/// ```
pub struct ChromiumPage {
    browser: Mutex<Option<Browser>>,
    handler_task: Mutex<Option<JoinHandle<()>>>,
    page: Page,
    locators: SiteLocators,
    wait: WaitConfig,
}

impl ChromiumPage {
    /// Launch a browser and open a blank tab to drive.
    pub async fn launch(config: &ScraperConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder();
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder
            .build()
            .map_err(|e| ScrapeError::Browser(format!("Invalid browser configuration: {e}")))?;

        log::debug!("Launching browser (headless: {})", config.headless);
        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScrapeError::Browser(format!("Failed to launch browser: {e}")))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    log::debug!("Browser handler error: {e}");
                }
            }
            log::debug!("Browser handler task ended");
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            browser: Mutex::new(Some(browser)),
            handler_task: Mutex::new(Some(handler_task)),
            page,
            locators: config.locators.clone(),
            wait: WaitConfig::new(config.element_timeout, config.poll_interval),
        })
    }

    async fn find_headings(&self) -> Result<Vec<Element>> {
        let page = &self.page;
        let selector = self.locators.heading.as_str();
        wait_for(self.wait, "season/episode heading", || async move {
            let found = page.find_elements(selector).await?;
            Ok::<_, ScrapeError>(if found.is_empty() { None } else { Some(found) })
        })
        .await
    }

    async fn find_track_panel(&self) -> Result<Element> {
        let page = &self.page;
        let selector = self.locators.track_panel.as_str();
        wait_for(self.wait, "track list panel", || async move {
            Ok::<_, ScrapeError>(page.find_elements(selector).await?.into_iter().next())
        })
        .await
    }

    /// Give client-side rendering a moment after a navigation.
    async fn settle(&self) -> Result<()> {
        self.page.wait_for_navigation().await?;
        tokio::time::sleep(self.wait.poll_interval).await;
        Ok(())
    }
}

#[async_trait(?Send)]
impl SoundtrackPage for ChromiumPage {
    async fn open(&self, url: &str) -> Result<()> {
        log::debug!("Opening {url}");
        self.page.goto(url).await?;
        Ok(())
    }

    async fn dismiss_consent(&self) -> Result<bool> {
        let page = &self.page;
        let xpath = self.locators.consent_button.as_str();
        let found = wait_for(self.wait, "consent button", || async move {
            Ok::<_, ScrapeError>(Some(page.find_xpath(xpath).await?))
        })
        .await;

        match found {
            Ok(button) => {
                if let Err(e) = button.click().await {
                    log::debug!("Regular click on consent button failed ({e}), forcing it");
                    if let Err(e) = button.call_js_fn(FORCE_CLICK, false).await {
                        log::warn!("Could not click the consent button: {e}");
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn headings(&self) -> Result<Vec<String>> {
        let elements = self.find_headings().await?;
        let mut titles = Vec::with_capacity(elements.len());
        for element in &elements {
            let text = element.inner_text().await?.unwrap_or_default();
            titles.push(text.trim().to_string());
        }
        Ok(titles)
    }

    async fn activate_heading(&self, index: usize) -> Result<()> {
        let elements = self.find_headings().await?;
        let count = elements.len();
        let heading = elements.into_iter().nth(index).ok_or_else(|| ScrapeError::NotFound {
            what: format!("heading #{} (page shows {count})", index + 1),
            timeout_secs: self.wait.timeout.as_secs(),
        })?;

        heading.call_js_fn(FORCE_CLICK, false).await?;
        self.settle().await
    }

    async fn wait_for_track_panel(&self) -> Result<()> {
        self.find_track_panel().await.map(|_| ())
    }

    async fn expand_track_panel(&self) -> Result<bool> {
        let panel = self.find_track_panel().await?;
        let controls = panel
            .find_elements(self.locators.show_all.as_str())
            .await
            .unwrap_or_default();

        let Some(control) = controls.into_iter().next() else {
            return Ok(false);
        };

        control.scroll_into_view().await?;
        control.call_js_fn(FORCE_CLICK, false).await?;
        tokio::time::sleep(self.wait.poll_interval).await;
        Ok(true)
    }

    async fn track_panel_html(&self) -> Result<String> {
        let panel = self.find_track_panel().await?;
        panel
            .outer_html()
            .await?
            .ok_or_else(|| ScrapeError::Parse("track list panel has no HTML".to_string()))
    }

    async fn go_back(&self) -> Result<()> {
        self.page.evaluate("window.history.back()").await?;
        self.settle().await
    }

    async fn close(&self) -> Result<()> {
        if let Some(mut browser) = self.browser.lock().await.take() {
            if let Err(e) = browser.close().await {
                log::warn!("Failed to close browser cleanly: {e}");
            }
            if let Err(e) = browser.wait().await {
                log::debug!("Failed to wait for browser exit: {e}");
            }
        }

        if let Some(task) = self.handler_task.lock().await.take() {
            if tokio::time::timeout(Duration::from_secs(2), task).await.is_err() {
                log::debug!("Browser handler task did not stop in time");
            }
        }

        Ok(())
    }
}
