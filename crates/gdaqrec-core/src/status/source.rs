//! Filesystem access for the status file.

use std::fs;
use std::io;
use std::path::Path;

/// Where the poller looks for the status file.
///
/// The poller checks existence and reads as two separate calls, so an
/// implementation can make the file disappear in between.
pub trait StatusSource {
    /// Whether something exists at `path`. Errors are reported, not treated as absent.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Read the whole file as text.
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads the status file from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStatusSource;

impl StatusSource for FsStatusSource {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
