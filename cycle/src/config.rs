//! Module with [`Config`] of the submission cycle.

use std::time::Duration;

use crate::{dispatch::ANALYZE_ENDPOINT, watchdog::DEFAULT_WATCHDOG_TIMEOUT};

/// Settings of the submission cycle.
///
/// There is nothing to read from the environment: the web app always runs with [`Config::default()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the analysis endpoint, relative to the page.
    pub endpoint: String,
    /// Time after which the form is force-unlocked if no response has arrived.
    pub watchdog_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: ANALYZE_ENDPOINT.to_owned(),
            watchdog_timeout: DEFAULT_WATCHDOG_TIMEOUT,
        }
    }
}
