//! Resolved run settings.
//!
//! Everything the loader needs from its environment is collected here once,
//! at entry, and passed down explicitly.

use crate::sink::Sink;
use std::path::PathBuf;

/// Config path used when `CONFIG_FILE` is not set.
pub const DEFAULT_CONFIG_PATH: &str = ".github/repository-config.yml";

/// Settings for a single loader run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the YAML config, relative to the working directory unless absolute.
    pub config_path: PathBuf,

    /// Treat a missing or malformed config as a step failure.
    pub fail_on_missing: bool,

    /// Where `name=value` outputs are appended (`GITHUB_OUTPUT`).
    pub output_sink: Sink,

    /// Where markdown summary lines are appended (`GITHUB_STEP_SUMMARY`).
    pub summary_sink: Sink,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            fail_on_missing: false,
            output_sink: Sink::disabled(),
            summary_sink: Sink::disabled(),
        }
    }
}

/// Parse a boolean policy flag.
///
/// Only `"true"` in any letter case enables the flag.
/// Every other value is false; this never fails.
pub fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
