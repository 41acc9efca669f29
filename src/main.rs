//! repo-config-loader: publish a repository YAML config to a CI step.
//!
//! This is the entry point for the binary. It resolves settings from the
//! command line and environment, runs the loader once, and exits with the
//! code the loader decided on.

mod annotation;
mod cli;
mod document;
mod error;
mod exit_codes;
mod loader;
mod run;
mod settings;
mod sink;

#[cfg(test)]
mod test_support;

use annotation::Console;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Diagnostics for the runner go to stdout; internal logging goes to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Cli::parse_args().into_settings();
    log::debug!("resolved settings: {:?}", settings);

    let mut console = Console::stdout();
    let code = run::run(&settings, &mut console);

    ExitCode::from(code as u8)
}
