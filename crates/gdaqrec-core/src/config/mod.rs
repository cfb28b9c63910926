//! # Poller Configuration
//!
//! The monitor has no config file: the status path and poll interval are
//! fixed by the recorder's conventions and live in [`defaults`]. The type
//! exists so the poller can be pointed at another path or interval when
//! embedded or tested.
//!
//! ```rust
//! use gdaqrec_core::config::PollerConfig;
//!
//! let config = PollerConfig::default();
//! assert_eq!(config.status_path, "~/.GDAQRec_timestamp");
//! assert!(config.validate().is_ok());
//! ```

pub mod defaults;
pub mod types;
pub mod validation;

// Public API exports
pub use types::PollerConfig;
pub use validation::validate_config;

impl PollerConfig {
    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
