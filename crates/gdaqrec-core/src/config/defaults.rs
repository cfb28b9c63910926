//! Default values for the poller configuration.

use crate::config::types::PollerConfig;
use std::time::Duration;

/// Status file written by GDAQRec while a recording is running.
pub const DEFAULT_STATUS_PATH: &str = "~/.GDAQRec_timestamp";

/// Poll every half second.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            status_path: DEFAULT_STATUS_PATH.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
