use std::time::Duration;

/// Settings for a [`StatusPoller`](crate::status::handler::StatusPoller).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    /// Location of the status file. A leading `~` is expanded to the home
    /// directory when the poller is initialized.
    pub status_path: String,

    /// Delay before every poll.
    pub poll_interval: Duration,
}
