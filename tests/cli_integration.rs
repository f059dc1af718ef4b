//! CLI Integration Tests
//!
//! These tests verify that the CLI works correctly end-to-end.
//! They run the actual binary, not just the library.
//!
//! Run with:
//! ```bash
//! cargo test --test cli_integration
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::tempdir;

/// Get the path to the built binary
fn triegen_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_triegen"))
}

/// Run triegen and return (stdout, stderr, success)
fn run_triegen(args: &[&str], stdin: Option<&str>) -> (String, String, bool) {
    let mut child = Command::new(triegen_binary())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute triegen");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait on triegen");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn write_word_list(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("word_list.txt");
    std::fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Input Source Tests
// ============================================================================

#[test]
fn test_cli_reads_file_argument() {
    let dir = tempdir().unwrap();
    let path = write_word_list(dir.path(), "cat\ndog\n");

    let (stdout, _stderr, success) = run_triegen(&[path.to_str().unwrap()], None);

    assert!(success, "triegen should succeed");
    assert_eq!(stdout, "{\"cat\":false,\"dog\":false}\n");
}

#[test]
fn test_cli_reads_stdin_without_argument() {
    let (stdout, _stderr, success) = run_triegen(&[], Some("hello\n"));

    assert!(success, "triegen should succeed");
    assert_eq!(stdout, "{\"hello\":false}\n");
}

#[test]
fn test_cli_missing_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let (stdout, stderr, success) = run_triegen(&[path.to_str().unwrap()], None);

    assert!(!success, "missing input should fail");
    assert!(stdout.is_empty(), "nothing should be written on failure");
    assert!(
        stderr.contains("not found"),
        "error should mention the missing file, got: {}",
        stderr
    );
}

#[test]
fn test_cli_empty_input() {
    let (stdout, _stderr, success) = run_triegen(&[], Some("\n  \n"));

    assert!(success);
    assert_eq!(stdout, "{}\n");
}

// ============================================================================
// Output Shape Tests
// ============================================================================

#[test]
fn test_cli_prefix_words() {
    let (stdout, _stderr, success) = run_triegen(&[], Some("catalog\ncat\n"));

    assert!(success);
    assert_eq!(stdout, "{\"cat\":{\"\":false,\"alog\":false}}\n");
}

#[test]
fn test_cli_uncompressed() {
    let (stdout, _stderr, success) = run_triegen(&["--uncompressed"], Some("hi\nho\n"));

    assert!(success);
    assert_eq!(stdout, "{\"h\":{\"i\":false,\"o\":false}}\n");
}

#[test]
fn test_cli_pretty_format() {
    let dir = tempdir().unwrap();
    let path = write_word_list(dir.path(), "tea\nten\n");

    let (stdout, _stderr, success) =
        run_triegen(&["-f", "pretty", path.to_str().unwrap()], None);

    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "te": { "a": false, "n": false } }));
    assert!(stdout.lines().count() > 1, "pretty output spans lines");
}

#[test]
fn test_cli_logs_stay_off_stdout() {
    let output = Command::new(triegen_binary())
        .env("RUST_LOG", "debug")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute triegen");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{}\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("trie built"));
}

#[test]
fn test_cli_long_single_line() {
    let dir = tempdir().unwrap();
    let word = "a".repeat(100_000);
    let path = write_word_list(dir.path(), &format!("{}\n", word));

    let (stdout, stderr, success) = run_triegen(&[path.to_str().unwrap()], None);
    assert!(success, "long line should not crash, got: {}", stderr);
    assert_eq!(stdout, format!("{{\"{}\":false}}\n", word));

    let (stdout, stderr, success) =
        run_triegen(&["--uncompressed", path.to_str().unwrap()], None);
    assert!(success, "long line should not crash, got: {}", stderr);
    assert!(stdout.starts_with("{\"a\":{\"a\":"));
    assert!(stdout.ends_with(&format!("false{}\n", "}".repeat(100_000))));
}

#[test]
fn test_cli_rejects_unknown_format() {
    let (_stdout, stderr, success) = run_triegen(&["-f", "xml"], Some("a\n"));

    assert!(!success);
    assert!(stderr.contains("xml"), "got: {}", stderr);
}
