use std::error::Error;

/// Base trait for all application errors
pub trait GdaqError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not resolve home directory to expand '{path}'")]
    HomeDirNotFound { path: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl GdaqError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::HomeDirNotFound { .. } => "PATH_RESOLUTION_FAILED",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ConfigError::InvalidConfiguration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_dir_not_found_display() {
        let error = ConfigError::HomeDirNotFound {
            path: "~/.GDAQRec_timestamp".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Could not resolve home directory to expand '~/.GDAQRec_timestamp'"
        );
        assert_eq!(error.error_code(), "PATH_RESOLUTION_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_invalid_configuration() {
        let error = ConfigError::InvalidConfiguration {
            message: "poll interval must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: poll interval must be greater than zero"
        );
        assert_eq!(error.error_code(), "INVALID_CONFIGURATION");
        assert!(error.is_user_error());
    }
}
