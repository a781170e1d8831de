use crate::Result;
use async_trait::async_trait;

/// The browser capabilities the scraping workflow depends on.
///
/// This trait isolates the target site's markup and the browser binding from
/// the navigation and extraction logic, so the workflow can run against a
/// fake site in tests. Implementations never hand out element handles: every
/// method locates what it needs from the live page at call time, which keeps
/// stale references out of the workflow entirely.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides
/// `MockSoundtrackPage` that implements this trait using the `mockall`
/// library.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait(?Send)]
pub trait SoundtrackPage {
    /// Navigate the session to `url`.
    async fn open(&self, url: &str) -> Result<()>;

    /// Activate the consent-dismiss control if it shows up within the
    /// element timeout. Returns `false` when there is none.
    async fn dismiss_consent(&self) -> Result<bool>;

    /// Wait for at least one season/episode heading and return the display
    /// text of every heading on the current page, in page order.
    async fn headings(&self) -> Result<Vec<String>>;

    /// Re-locate the headings and activate the one at `index` (0-based).
    async fn activate_heading(&self, index: usize) -> Result<()>;

    /// Wait for the episode's track-list panel to appear.
    async fn wait_for_track_panel(&self) -> Result<()>;

    /// Expand a truncated track listing. Returns `false` when the panel has
    /// no show-all control.
    async fn expand_track_panel(&self) -> Result<bool>;

    /// Outer HTML of the track-list panel as currently rendered.
    async fn track_panel_html(&self) -> Result<String>;

    /// Navigate back to the previous page.
    async fn go_back(&self) -> Result<()>;

    /// Terminate the browser session.
    async fn close(&self) -> Result<()>;
}
