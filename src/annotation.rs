//! Diagnostics in the CI workflow-command format.
//!
//! Lines written as `::warning::message` (and friends) are picked up by the
//! runner and shown as annotations on the job. Everything else is printed as
//! plain log output.

use std::fmt;
use std::io::Write;

/// Annotation severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Notice,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Notice => "notice",
            Level::Warning => "warning",
            Level::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Escape a message so it stays a single workflow command.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Render `::<level>::<message>`.
pub fn format_annotation(level: Level, message: &str) -> String {
    format!("::{}::{}", level, escape_data(message))
}

/// Line-oriented diagnostic stream, normally stdout.
pub struct Console<W: Write> {
    out: W,
}

impl Console<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print a plain line.
    pub fn line(&mut self, text: &str) {
        self.emit(text);
    }

    pub fn notice(&mut self, message: &str) {
        self.emit(&format_annotation(Level::Notice, message));
    }

    pub fn warning(&mut self, message: &str) {
        self.emit(&format_annotation(Level::Warning, message));
    }

    pub fn error(&mut self, message: &str) {
        self.emit(&format_annotation(Level::Error, message));
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        // A closed stdout must not change the step result.
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::warn!("failed to write diagnostic line: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(f: impl FnOnce(&mut Console<Vec<u8>>)) -> String {
        let mut console = Console::new(Vec::new());
        f(&mut console);
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Notice.to_string(), "notice");
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::Error.to_string(), "error");
    }

    #[test]
    fn test_format_annotation() {
        assert_eq!(
            format_annotation(Level::Warning, "Config file not found"),
            "::warning::Config file not found"
        );
    }

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("plain"), "plain");
        assert_eq!(escape_data("100%"), "100%25");
        assert_eq!(escape_data("line one\r\nline two"), "line one%0D%0Aline two");
    }

    #[test]
    fn test_console_writes_one_line_per_call() {
        let out = captured(|c| {
            c.line("Loading config from: /repo/cfg.yml");
            c.notice("empty");
            c.warning("missing");
            c.error("broken\nYAML");
        });

        assert_eq!(
            out,
            "Loading config from: /repo/cfg.yml\n::notice::empty\n::warning::missing\n::error::broken%0AYAML\n"
        );
    }
}
