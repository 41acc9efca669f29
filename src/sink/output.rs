//! Output writer: named step outputs in the `GITHUB_OUTPUT` file format.

use super::Sink;
use crate::error::Result;

/// Sentinel that closes a multiline output block.
const DELIMITER: &str = "EOF";

/// Append the output `name` with `value` to `sink`.
///
/// Single-line values are written as `name=value`. Values containing a
/// newline use the heredoc form `name<<EOF` ... `EOF`.
pub fn write_output(sink: &Sink, name: &str, value: &str) -> Result<()> {
    sink.append(&format_record(name, value))
}

/// Render one output record, including its trailing newline.
pub fn format_record(name: &str, value: &str) -> String {
    if value.contains('\n') {
        let delimiter = pick_delimiter(value);
        format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
    } else {
        format!("{name}={value}\n")
    }
}

/// `EOF`, or `EOF_<n>` for the first `n` that does not appear as a line of `value`.
fn pick_delimiter(value: &str) -> String {
    let collides = |candidate: &str| value.lines().any(|line| line == candidate);

    if !collides(DELIMITER) {
        return DELIMITER.to_string();
    }

    let mut n = 1;
    loop {
        let candidate = format!("{DELIMITER}_{n}");
        if !collides(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
