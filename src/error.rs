//! Error types for the config loader.
//!
//! Uses thiserror for derive macros. Every variant belongs to one of three
//! kinds, and the kind decides how the failure affects the exit status.

use crate::exit_codes;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// The three ways a load can fail, as seen by the CI policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The config file does not exist.
    ConfigMissing,
    /// The file exists but is not well-formed YAML.
    YamlSyntaxError,
    /// Anything else: I/O, encoding, sink failures.
    UnexpectedError,
}

/// Main error type for loading and publishing the config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No file at the resolved config path.
    #[error("config file not found: {}", path.display())]
    Missing { path: PathBuf },

    /// The YAML parser rejected the file.
    #[error("{source}")]
    Yaml {
        #[source]
        source: serde_yaml::Error,
    },

    /// The YAML parsed but cannot be published as a JSON object.
    #[error("{0}")]
    InvalidDocument(String),

    /// The YAML parsed to a non-empty value that is not a mapping.
    #[error("expected a mapping at the top level, found {found}")]
    NotAMapping { found: &'static str },

    /// The file exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("'{}' is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// Appending to an output or summary sink failed.
    #[error("failed to write to '{}': {source}", path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Returns the policy kind for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Missing { .. } => ErrorKind::ConfigMissing,
            ConfigError::Yaml { .. } | ConfigError::InvalidDocument(_) => {
                ErrorKind::YamlSyntaxError
            }
            ConfigError::NotAMapping { .. }
            | ConfigError::Read { .. }
            | ConfigError::Encoding { .. }
            | ConfigError::Sink { .. } => ErrorKind::UnexpectedError,
        }
    }

    /// Returns the exit code for this error under the given fail-fast policy.
    ///
    /// Missing and malformed config only fail the step when `fail_on_missing`
    /// is set. Unexpected errors always fail it.
    pub fn exit_code(&self, fail_on_missing: bool) -> i32 {
        match self.kind() {
            ErrorKind::ConfigMissing | ErrorKind::YamlSyntaxError if !fail_on_missing => {
                exit_codes::SUCCESS
            }
            _ => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for config loader operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
