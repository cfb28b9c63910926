use std::convert::Infallible;
use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::PollerConfig;
use crate::status::errors::StatusError;
use crate::status::operations;
use crate::status::source::{FsStatusSource, StatusSource};
use crate::status::types::{PollOutcome, StatusFile};

/// Polls the recorder's status file and reports what it finds.
///
/// Nothing is carried between polls except the resolved path: every poll
/// looks at the file afresh.
#[derive(Debug)]
pub struct StatusPoller<S: StatusSource = FsStatusSource> {
    file: StatusFile,
    interval: Duration,
    source: S,
}

impl StatusPoller<FsStatusSource> {
    /// Validate `config` and resolve the status path against the home directory.
    pub fn initialize(config: &PollerConfig) -> Result<Self, StatusError> {
        info!(
            event = "core.status.initialize_started",
            status_path = %config.status_path
        );

        config.validate()?;
        let file = operations::resolve_status_path(config)?;

        info!(
            event = "core.status.initialize_completed",
            path = %file.path().display(),
            interval_ms = config.poll_interval.as_millis() as u64
        );

        Ok(Self::with_source(file, config.poll_interval, FsStatusSource))
    }
}

impl<S: StatusSource> StatusPoller<S> {
    pub fn with_source(file: StatusFile, interval: Duration, source: S) -> Self {
        Self {
            file,
            interval,
            source,
        }
    }

    pub fn status_file(&self) -> &StatusFile {
        &self.file
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Look at the status file once, without waiting.
    pub fn poll(&self) -> Result<PollOutcome, StatusError> {
        let outcome = operations::probe(&self.source, &self.file)?;
        debug!(
            event = "core.status.poll_completed",
            path = %self.file.path().display(),
            recording = outcome.is_recording()
        );
        Ok(outcome)
    }

    /// Sleep for the poll interval, poll, and write the result to `out`.
    pub fn cycle<W: Write + ?Sized>(&self, out: &mut W) -> Result<PollOutcome, StatusError> {
        thread::sleep(self.interval);
        let outcome = self.poll()?;
        operations::render(&outcome, out)?;
        Ok(outcome)
    }

    /// Run [`cycle`](Self::cycle) forever. Only returns on a fatal error.
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<Infallible, StatusError> {
        info!(
            event = "core.status.run_started",
            path = %self.file.path().display()
        );

        loop {
            self.cycle(out)?;
        }
    }
}
