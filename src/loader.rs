//! Reading and parsing the config file.
//!
//! This module only touches the config file itself. Reporting the result to
//! the CI runner is the job of [`crate::run`].

use crate::document::ConfigDocument;
use crate::error::{ConfigError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// A successfully loaded config: the text as read and its parsed form.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// File contents exactly as stored, decoded as UTF-8.
    pub raw: String,
    pub document: ConfigDocument,
}

/// Load the config file at `path`.
///
/// # Returns
///
/// * `Ok(LoadedConfig)` - The file exists and holds a YAML mapping (or nothing)
/// * `Err(ConfigError::Missing)` - No file at `path`
/// * `Err(ConfigError::Yaml | InvalidDocument)` - The file is not a usable YAML mapping
/// * `Err(ConfigError::NotAMapping | Read | Encoding)` - Any other failure
pub fn load(path: &Path) -> Result<LoadedConfig> {
    if !path.exists() {
        return Err(ConfigError::Missing {
            path: path.to_path_buf(),
        });
    }

    let raw = read_text(path)?;
    log::debug!("read {} bytes from {}", raw.len(), path.display());

    let document = ConfigDocument::parse(&raw)?;
    Ok(LoadedConfig { raw, document })
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        // Removed between the existence check and the read.
        io::ErrorKind::NotFound => ConfigError::Missing {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    String::from_utf8(bytes).map_err(|source| ConfigError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}
