use thiserror::Error;

/// Error types for soundtrack scraping.
///
/// Whether an error is fatal depends on where it surfaces: anything raised
/// while bootstrapping the session or selecting a season ends the run, while
/// errors raised for a single episode are recorded and the walk continues.
///
/// # Error Handling Examples
///
/// ```rust
/// use soundtrack_scraper::ScrapeError;
///
/// fn describe(err: &ScrapeError) -> &'static str {
///     match err {
///         ScrapeError::NotFound { .. } => "page element missing",
///         ScrapeError::InvalidSelection(_) => "bad operator input",
///         _ => "other failure",
///     }
/// }
///
/// let err = ScrapeError::not_found("season heading", std::time::Duration::from_secs(10));
/// assert_eq!(describe(&err), "page element missing");
/// assert_eq!(err.to_string(), "season heading not found within 10s");
/// ```
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// A required element never appeared within the bounded wait.
    ///
    /// Fatal during bootstrap and season selection, skip-and-continue when
    /// raised while extracting a single episode.
    #[error("{what} not found within {timeout_secs}s")]
    NotFound {
        /// Human-readable name of the element that was awaited
        what: String,
        /// The wait window that elapsed, in whole seconds
        timeout_secs: u64,
    },

    /// The operator entered something that is not a usable choice.
    ///
    /// Out-of-range or non-numeric season indexes and empty show names end
    /// up here. There is no retry loop.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// An element handle was used after a navigation invalidated it.
    ///
    /// The page adapter re-locates elements before every use, so this only
    /// surfaces if the page changes underneath a single operation.
    #[error("Stale element reference: {0}")]
    StaleReference(String),

    /// Browser launch or DevTools protocol failures.
    #[error("Browser error: {0}")]
    Browser(String),

    /// Invalid locators or unusable HTML snapshots.
    #[error("Failed to parse page content: {0}")]
    Parse(String),

    /// Terminal I/O errors while prompting the operator.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Build a [`ScrapeError::NotFound`] for `what` after waiting `timeout`.
    pub fn not_found(what: impl Into<String>, timeout: std::time::Duration) -> Self {
        ScrapeError::NotFound {
            what: what.into(),
            timeout_secs: timeout.as_secs(),
        }
    }

    /// Whether this error means the element simply was not there.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScrapeError::NotFound { .. })
    }
}

impl From<chromiumoxide::error::CdpError> for ScrapeError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        classify_protocol_message(err.to_string())
    }
}

/// Sort a DevTools protocol failure into stale-handle or generic browser
/// errors by its message.
fn classify_protocol_message(message: String) -> ScrapeError {
    // Chrome reports handles to detached DOM nodes with these messages.
    if message.contains("No node with given id")
        || message.contains("Could not find node with given id")
        || message.contains("Node is detached")
    {
        ScrapeError::StaleReference(message)
    } else {
        ScrapeError::Browser(message)
    }
}
