use crate::errors::{ConfigError, GdaqError};

#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("Status monitor configuration failed: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to check whether '{path}' exists: {source}")]
    ExistenceCheckFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to read status file '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write status output: {source}")]
    OutputFailed { source: std::io::Error },
}

impl GdaqError for StatusError {
    fn error_code(&self) -> &'static str {
        match self {
            StatusError::Config { source } => source.error_code(),
            StatusError::ExistenceCheckFailed { .. } => "STATUS_EXISTENCE_CHECK_FAILED",
            StatusError::ReadFailed { .. } => "STATUS_READ_FAILED",
            StatusError::OutputFailed { .. } => "STATUS_OUTPUT_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            StatusError::Config { source } => source.is_user_error(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_failed_display() {
        let error = StatusError::ReadFailed {
            path: "/home/daq/.GDAQRec_timestamp".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read status file '/home/daq/.GDAQRec_timestamp': gone"
        );
        assert_eq!(error.error_code(), "STATUS_READ_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_config_error_keeps_code() {
        let error: StatusError = ConfigError::HomeDirNotFound {
            path: "~/.GDAQRec_timestamp".to_string(),
        }
        .into();
        assert_eq!(error.error_code(), "PATH_RESOLUTION_FAILED");
        assert!(error.to_string().contains("home directory"));
    }
}
