//! Session bootstrap: building the show URL, opening it and clearing the
//! consent overlay.

use crate::r#trait::SoundtrackPage;
use crate::season::Operator;
use crate::{Result, ScrapeError};

/// Prompt shown when asking for the show name.
pub const SHOW_PROMPT: &str = "Please enter a TV Show to search...";

/// Build the lookup URL for a show.
///
/// Whitespace-delimited words are joined with `-` and appended to
/// `base_url`. Characters outside the unreserved URL set are
/// percent-encoded.
///
/// ```rust
/// use soundtrack_scraper::session::show_url;
///
/// assert_eq!(
///     show_url("https://www.tunefind.com/show/", "  Grey's   Anatomy "),
///     "https://www.tunefind.com/show/Grey%27s-Anatomy"
/// );
/// ```
pub fn show_url(base_url: &str, show_name: &str) -> String {
    let slug = show_name.split_whitespace().collect::<Vec<_>>().join("-");
    format!("{base_url}{}", urlencoding::encode(&slug))
}

/// Ask the operator which show to scrape.
///
/// Returns the name with surrounding whitespace removed. An empty answer is
/// an [`ScrapeError::InvalidSelection`].
pub fn prompt_show_name(operator: &mut dyn Operator) -> Result<String> {
    let answer = operator.ask(SHOW_PROMPT)?;
    let name = answer.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return Err(ScrapeError::InvalidSelection(
            "no TV show name was entered".to_string(),
        ));
    }
    Ok(name)
}

/// Open the show page and dismiss the consent overlay if one appears.
///
/// Nothing about the consent control is an error: it may be missing or
/// refuse the click. Any failure to open the page is returned to the caller
/// and ends the run.
pub async fn bootstrap(page: &dyn SoundtrackPage, url: &str) -> Result<()> {
    log::info!("Opening {url}");
    page.open(url).await?;

    match page.dismiss_consent().await {
        Ok(true) => log::debug!("Consent popup dismissed"),
        Ok(false) => log::info!("No cookies popup found."),
        Err(e) => log::warn!("Ignoring consent popup failure: {e}"),
    }

    Ok(())
}
