use crate::config::types::PollerConfig;
use crate::errors::ConfigError;

/// Validate a poller configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] if the status path is empty
/// or the poll interval is zero.
pub fn validate_config(config: &PollerConfig) -> Result<(), ConfigError> {
    if config.status_path.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "status path cannot be empty".to_string(),
        });
    }

    if config.poll_interval.is_zero() {
        return Err(ConfigError::InvalidConfiguration {
            message: "poll interval must be greater than zero".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PollerConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_status_path_rejected() {
        let config = PollerConfig {
            status_path: "   ".to_string(),
            ..PollerConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("status path cannot be empty"));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = PollerConfig {
            poll_interval: Duration::ZERO,
            ..PollerConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("poll interval"));
    }
}
