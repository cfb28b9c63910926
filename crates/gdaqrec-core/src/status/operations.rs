use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::PollerConfig;
use crate::errors::ConfigError;
use crate::status::errors::StatusError;
use crate::status::source::StatusSource;
use crate::status::types::{PollOutcome, StatusFile};

/// Expand a leading `~` in `path` to `home`.
///
/// Only `~` and `~/...` are expanded; `~user` forms and paths without a
/// leading tilde are returned unchanged.
pub fn expand_home(path: &str, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/") {
        rest
    } else {
        return Ok(PathBuf::from(path));
    };

    let home = home.ok_or_else(|| ConfigError::HomeDirNotFound {
        path: path.to_string(),
    })?;

    if rest.is_empty() {
        Ok(home.to_path_buf())
    } else {
        Ok(home.join(rest))
    }
}

/// Resolve the configured status path against the current user's home directory.
pub fn resolve_status_path(config: &PollerConfig) -> Result<StatusFile, ConfigError> {
    let home = dirs::home_dir();
    let path = expand_home(&config.status_path, home.as_deref())?;
    Ok(StatusFile::new(path))
}

/// Check for the status file and read it if present.
///
/// A read that fails after the file was seen to exist is an error. It is
/// never reported as [`PollOutcome::NotRecording`].
pub fn probe<S: StatusSource + ?Sized>(
    source: &S,
    file: &StatusFile,
) -> Result<PollOutcome, StatusError> {
    let path = file.path();

    let exists = source
        .exists(path)
        .map_err(|e| StatusError::ExistenceCheckFailed {
            path: path.display().to_string(),
            source: e,
        })?;

    if !exists {
        return Ok(PollOutcome::NotRecording);
    }

    let contents = source.read(path).map_err(|e| StatusError::ReadFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(PollOutcome::Recording { contents })
}

/// Write one poll result followed by a newline, then flush.
pub fn render<W: Write + ?Sized>(outcome: &PollOutcome, out: &mut W) -> Result<(), StatusError> {
    writeln!(out, "{}", outcome)
        .and_then(|()| out.flush())
        .map_err(|e| StatusError::OutputFailed { source: e })
}
