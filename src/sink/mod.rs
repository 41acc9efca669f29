//! Append-only sinks through which the step reports back to the CI runner.
//!
//! A [`Sink`] is an optional handle to a file. When the controlling
//! environment variable is unset (or empty) the handle is disabled and every
//! write is a silent no-op, so callers never branch on sink presence.
//!
//! Each write opens the file in append mode, creating it if needed, writes one
//! record, and closes it again before returning.

mod output;
mod summary;

#[cfg(test)]
mod tests;

pub use output::{format_record, write_output};
pub use summary::write_summary;

use crate::error::{ConfigError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Optional handle to an append-only sink file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sink {
    path: Option<PathBuf>,
}

impl Sink {
    /// Create a sink from an optional path. An empty path disables the sink.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.filter(|p| !p.as_os_str().is_empty()),
        }
    }

    /// Create a sink that discards everything.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Create a sink that appends to `path`.
    #[cfg(test)]
    pub fn to_file<P: AsRef<Path>>(path: P) -> Self {
        Self::new(Some(path.as_ref().to_path_buf()))
    }

    /// The backing file, if the sink is enabled.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append `text` verbatim to the sink.
    ///
    /// Returns `Ok(())` without touching the filesystem when disabled.
    pub fn append(&self, text: &str) -> Result<()> {
        let Some(path) = self.path() else {
            return Ok(());
        };

        let sink_error = |source| ConfigError::Sink {
            path: path.to_path_buf(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(sink_error)?;

        file.write_all(text.as_bytes()).map_err(sink_error)?;

        log::debug!("appended {} bytes to {}", text.len(), path.display());
        Ok(())
    }
}
