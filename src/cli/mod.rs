//! CLI argument parsing for the config loader.
//!
//! Uses clap derive macros. Every argument is bound to the environment
//! variable the CI runner (or the workflow author) sets, so the binary
//! normally runs with no arguments at all; flags override the environment.

use crate::settings::{DEFAULT_CONFIG_PATH, Settings, parse_flag};
use crate::sink::Sink;
use clap::{ArgAction, Parser};
use std::convert::Infallible;
use std::path::PathBuf;

/// Load the repository config file and publish it as step outputs.
///
/// Writes `has-config`, `config` (compact JSON) and `raw-yaml` to the step
/// output file and a short markdown report to the step summary.
#[derive(Parser, Debug)]
#[command(name = "repo-config-loader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the YAML config file, relative to the working directory.
    #[arg(long, env = "CONFIG_FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config_file: PathBuf,

    /// Fail the step when the config is missing or malformed.
    ///
    /// Only "true" (any case) enables this; every other value disables it.
    #[arg(
        long,
        env = "FAIL_ON_MISSING",
        value_name = "BOOL",
        default_value = "false",
        action = ArgAction::Set,
        value_parser = parse_policy_flag
    )]
    pub fail_on_missing: bool,

    /// Step output file. Outputs are skipped when unset.
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    pub github_output: Option<PathBuf>,

    /// Step summary file. The summary is skipped when unset.
    #[arg(long, env = "GITHUB_STEP_SUMMARY", value_name = "PATH")]
    pub github_step_summary: Option<PathBuf>,
}

fn parse_policy_flag(value: &str) -> Result<bool, Infallible> {
    Ok(parse_flag(value))
}

impl Cli {
    /// Parse command-line arguments and the environment.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Resolve into the settings used for the whole run.
    pub fn into_settings(self) -> Settings {
        Settings {
            config_path: self.config_file,
            fail_on_missing: self.fail_on_missing,
            output_sink: Sink::new(self.github_output),
            summary_sink: Sink::new(self.github_step_summary),
        }
    }
}
