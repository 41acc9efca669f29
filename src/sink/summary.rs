//! Summary writer: markdown lines for the `GITHUB_STEP_SUMMARY` report.

use super::Sink;
use crate::error::Result;

/// Append `text` followed by a newline to `sink`.
pub fn write_summary(sink: &Sink, text: &str) -> Result<()> {
    sink.append(&format!("{text}\n"))
}
