//! Tests for the output and summary sinks.

use super::*;
use crate::error::ConfigError;
use std::fs;
use tempfile::TempDir;

fn sink_in(dir: &TempDir, name: &str) -> (Sink, PathBuf) {
    let path = dir.path().join(name);
    (Sink::to_file(&path), path)
}

#[test]
fn test_format_single_line_record() {
    assert_eq!(format_record("has-config", "true"), "has-config=true\n");
    assert_eq!(format_record("raw-yaml", ""), "raw-yaml=\n");
    assert_eq!(
        format_record("config", r#"{"build":{"target":"release"}}"#),
        "config={\"build\":{\"target\":\"release\"}}\n"
    );
}

#[test]
fn test_format_multiline_record_uses_heredoc() {
    assert_eq!(
        format_record("raw-yaml", "build:\n  target: release\n"),
        "raw-yaml<<EOF\nbuild:\n  target: release\n\nEOF\n"
    );
}

#[test]
fn test_format_multiline_record_avoids_delimiter_collision() {
    let value = "a: |\n  text\nEOF\nb: 1";
    assert_eq!(
        format_record("raw-yaml", value),
        "raw-yaml<<EOF_1\na: |\n  text\nEOF\nb: 1\nEOF_1\n"
    );

    let value = "EOF\nEOF_1";
    assert_eq!(
        format_record("raw-yaml", value),
        "raw-yaml<<EOF_2\nEOF\nEOF_1\nEOF_2\n"
    );
}

#[test]
fn test_delimiter_substring_is_not_a_collision() {
    let value = "note: EOF is fine inline\nother: 1";
    assert!(format_record("raw-yaml", value).starts_with("raw-yaml<<EOF\n"));
}

#[test]
fn test_write_output_appends_records() {
    let dir = TempDir::new().unwrap();
    let (sink, path) = sink_in(&dir, "output");

    write_output(&sink, "has-config", "true").unwrap();
    write_output(&sink, "config", "{}").unwrap();
    write_output(&sink, "raw-yaml", "a: 1\n").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "has-config=true\nconfig={}\nraw-yaml<<EOF\na: 1\n\nEOF\n"
    );
}

#[test]
fn test_write_output_preserves_existing_content() {
    let dir = TempDir::new().unwrap();
    let (sink, path) = sink_in(&dir, "output");
    fs::write(&path, "earlier-step=value\n").unwrap();

    write_output(&sink, "has-config", "false").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "earlier-step=value\nhas-config=false\n");
}

#[test]
fn test_write_summary_appends_lines() {
    let dir = TempDir::new().unwrap();
    let (sink, path) = sink_in(&dir, "summary.md");

    write_summary(&sink, "✅ Loaded config").unwrap();
    write_summary(&sink, "\n**Config sections:** `build`").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "✅ Loaded config\n\n**Config sections:** `build`\n"
    );
}

#[test]
fn test_disabled_sink_is_a_no_op() {
    let sink = Sink::disabled();
    assert!(sink.path().is_none());

    write_output(&sink, "has-config", "true").unwrap();
    write_summary(&sink, "anything").unwrap();
}

#[test]
fn test_empty_path_disables_sink() {
    let sink = Sink::new(Some(PathBuf::new()));
    assert_eq!(sink, Sink::disabled());

    let sink = Sink::new(None);
    assert_eq!(sink, Sink::disabled());
}

#[test]
fn test_unwritable_sink_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("output");
    let sink = Sink::to_file(&path);

    let err = write_output(&sink, "has-config", "true").unwrap_err();
    match err {
        ConfigError::Sink { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected sink error, got {other:?}"),
    }
}
