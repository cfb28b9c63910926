use std::fmt;
use std::path::{Path, PathBuf};

/// Shown when the status file does not exist.
pub const NOT_RECORDING: &str = "not recording";

/// The recorder's status file, resolved to an absolute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFile {
    path: PathBuf,
}

impl StatusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// What a single poll observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The file exists; `contents` is exactly what was on disk.
    Recording { contents: String },
    NotRecording,
}

impl PollOutcome {
    pub fn is_recording(&self) -> bool {
        matches!(self, PollOutcome::Recording { .. })
    }
}

impl fmt::Display for PollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollOutcome::Recording { contents } => f.write_str(contents),
            PollOutcome::NotRecording => f.write_str(NOT_RECORDING),
        }
    }
}
