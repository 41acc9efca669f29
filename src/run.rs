//! The step's main routine.
//!
//! One pass through a small state machine:
//!
//! ```text
//! START -> CHECK_EXISTS -> MISSING
//!                       -> READ -> PARSED | YAML_ERROR | OTHER_ERROR
//! ```
//!
//! Every state writes exactly three outputs: `has-config`, `config` and
//! `raw-yaml`. All failure states write the same absent-config triple
//! (`false`, `{}`, empty) and differ only in diagnostics and exit status.

use crate::annotation::Console;
use crate::error::{ConfigError, ErrorKind, Result};
use crate::exit_codes;
use crate::loader::{self, LoadedConfig};
use crate::settings::Settings;
use crate::sink::{write_output, write_summary};
use std::io::Write;
use std::path::Path;

pub const OUTPUT_HAS_CONFIG: &str = "has-config";
pub const OUTPUT_CONFIG: &str = "config";
pub const OUTPUT_RAW_YAML: &str = "raw-yaml";

/// Run the loader once and return the process exit code.
pub fn run<W: Write>(settings: &Settings, console: &mut Console<W>) -> i32 {
    let path = settings.config_path.as_path();
    console.line(&format!("Loading config from: {}", absolute(path).display()));

    let loaded = match loader::load(path) {
        Ok(loaded) => loaded,
        Err(err) => return report_failure(settings, console, &err, Outputs::Pending),
    };

    if let Err(err) = publish(settings, &loaded) {
        return report_failure(settings, console, &err, Outputs::Pending);
    }

    match summarize(settings, console, &loaded) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => report_failure(settings, console, &err, Outputs::Published),
    }
}

/// Whether the three outputs still have to be written for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outputs {
    Pending,
    Published,
}

/// PARSED: publish the config as step outputs.
fn publish(settings: &Settings, loaded: &LoadedConfig) -> Result<()> {
    let sink = &settings.output_sink;
    write_output(sink, OUTPUT_HAS_CONFIG, "true")?;
    write_output(sink, OUTPUT_CONFIG, &loaded.document.to_compact_json())?;
    write_output(sink, OUTPUT_RAW_YAML, &loaded.raw)
}

/// PARSED: report the load and list the config sections.
fn summarize<W: Write>(
    settings: &Settings,
    console: &mut Console<W>,
    loaded: &LoadedConfig,
) -> Result<()> {
    let summary = format!(
        "✅ Loaded config from `{}`",
        settings.config_path.display()
    );
    console.line(&summary);
    write_summary(&settings.summary_sink, &summary)?;

    if loaded.document.is_empty() {
        console.notice(&format!(
            "Config file {} is empty (using defaults)",
            settings.config_path.display()
        ));
        return Ok(());
    }

    let keys: Vec<&str> = loaded.document.keys().collect();
    let sections = keys
        .iter()
        .map(|k| format!("`{}`", k))
        .collect::<Vec<_>>()
        .join(", ");
    write_summary(
        &settings.summary_sink,
        &format!("\n**Config sections:** {}", sections),
    )?;
    console.line(&format!("Config sections: {}", keys.join(", ")));

    Ok(())
}

/// MISSING, YAML_ERROR and OTHER_ERROR: report `err` and, unless the outputs
/// are already published, write the absent-config triple. Returns the exit code.
fn report_failure<W: Write>(
    settings: &Settings,
    console: &mut Console<W>,
    err: &ConfigError,
    outputs: Outputs,
) -> i32 {
    let mut code = err.exit_code(settings.fail_on_missing);

    if outputs == Outputs::Pending
        && let Err(sink_err) = emit_absent_config(settings)
    {
        log::error!("failed to publish absent config: {}", sink_err);
        code = exit_codes::FAILURE;
    }

    let summary = match err.kind() {
        ErrorKind::ConfigMissing => {
            let msg = format!(
                "⚠️ Config file not found: `{}`",
                settings.config_path.display()
            );
            console.warning(&format!("{} (using defaults)", msg));
            if settings.fail_on_missing {
                console.error(&format!(
                    "Config file required but not found: {}",
                    settings.config_path.display()
                ));
            }
            msg
        }
        ErrorKind::YamlSyntaxError => {
            let msg = format!("Failed to parse YAML: {}", err);
            console.error(&msg);
            format!("❌ {}", msg)
        }
        ErrorKind::UnexpectedError => {
            let msg = format!("Unexpected error: {}", err);
            console.error(&msg);
            format!("❌ {}", msg)
        }
    };

    if let Err(sink_err) = write_summary(&settings.summary_sink, &summary) {
        log::error!("failed to write step summary: {}", sink_err);
        code = exit_codes::FAILURE;
    }

    code
}

/// Write `has-config=false`, `config={}` and an empty `raw-yaml`.
fn emit_absent_config(settings: &Settings) -> Result<()> {
    let sink = &settings.output_sink;
    write_output(sink, OUTPUT_HAS_CONFIG, "false")?;
    write_output(sink, OUTPUT_CONFIG, "{}")?;
    write_output(sink, OUTPUT_RAW_YAML, "")
}

fn absolute(path: &Path) -> std::borrow::Cow<'_, Path> {
    match std::path::absolute(path) {
        Ok(abs) => abs.into(),
        Err(_) => path.into(),
    }
}
