//! gdaqrec-core: Core library for the GDAQRec status monitor
//!
//! GDAQRec signals that a recording is in progress by keeping a timestamp
//! file in the user's home directory. This library watches that file and
//! reports its contents, or `not recording` when it is absent.
//!
//! # Main Entry Points
//!
//! - [`status`] - Resolve, probe and poll the status file
//! - [`config`] - Poller configuration and defaults
//! - [`logging`] - Structured logging setup

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod status;

// Re-export commonly used types at crate root for convenience
pub use config::PollerConfig;
pub use errors::{ConfigError, GdaqError};
pub use status::errors::StatusError;
pub use status::handler::StatusPoller;
pub use status::source::{FsStatusSource, StatusSource};
pub use status::types::{NOT_RECORDING, PollOutcome, StatusFile};

// Re-export logging initialization
pub use logging::init_logging;
