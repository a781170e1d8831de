//! Bounded polling against the live page.

use crate::{Result, ScrapeError};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Timing for a bounded wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    /// Give up once this much time has passed
    pub timeout: Duration,
    /// Pause between two probes
    pub poll_interval: Duration,
}

impl WaitConfig {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }
}

/// Probe until it yields a value or the timeout elapses.
///
/// The probe returns `Ok(None)` while the awaited element is not there yet.
/// Probe errors count as "not there yet" as well, since a page in the middle
/// of rendering routinely fails lookups. The probe always runs at least once,
/// and one last time at the deadline.
///
/// # Arguments
/// * `config` - Timeout and poll interval
/// * `what` - Name of the awaited element, used in logs and the error
/// * `probe` - Async lookup against the page
pub async fn wait_for<T, F, Fut>(config: WaitConfig, what: &str, mut probe: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let deadline = Instant::now() + config.timeout;
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match probe().await {
            Ok(Some(value)) => {
                log::debug!("Found {what} after {attempts} probe(s)");
                return Ok(value);
            }
            Ok(None) => {}
            Err(e) => log::debug!("Probe for {what} failed: {e}"),
        }

        let now = Instant::now();
        if now >= deadline {
            log::debug!("Gave up waiting for {what} after {attempts} probe(s)");
            return Err(ScrapeError::not_found(what, config.timeout));
        }

        let pause = config.poll_interval.min(deadline - now);
        tokio::time::sleep(pause).await;
    }
}
