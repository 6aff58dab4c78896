//! Common utilities for CLI E2E tests.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Home directory the CLI sees during tests, so config files never touch
/// the real one.
fn test_home() -> PathBuf {
    let dir = std::env::temp_dir().join("stopwatch-cli-tests");
    std::fs::create_dir_all(&dir).expect("Failed to create test home");
    dir
}

fn cli_command(args: &[&str]) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "-q", "-p", "stopwatch-cli", "--"])
        .args(args)
        .env("HOME", test_home())
        .env("STOPWATCH_ENV", "dev");
    cmd
}

fn collect(output: std::process::Output) -> (String, String, i32) {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Invoke a CLI command with `input` piped to stdin, then closed.
pub fn run_cli_with_stdin(args: &[&str], input: &str) -> (String, String, i32) {
    let mut child = cli_command(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    // Dropping the handle closes stdin so the CLI sees EOF.
    let mut stdin = child.stdin.take().expect("stdin is piped");
    stdin
        .write_all(input.as_bytes())
        .expect("Failed to write CLI stdin");
    drop(stdin);

    collect(child.wait_with_output().expect("Failed to wait for CLI"))
}

/// Invoke a CLI command and return the output.
pub fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = cli_command(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute CLI command");

    collect(output)
}

/// Invoke a CLI command and expect success.
pub fn run_cli_success(args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(args);
    if code != 0 && !stderr.is_empty() {
        eprintln!("CLI error output: {}", stderr);
    }
    assert_eq!(code, 0, "CLI command failed with code {}: {:?}", code, args);
    stdout
}

/// Invoke a CLI command and expect failure.
pub fn run_cli_failure(args: &[&str]) -> (String, String, i32) {
    let (stdout, stderr, code) = run_cli(args);
    assert!(code != 0, "CLI command unexpectedly succeeded: {:?}", args);
    (stdout, stderr, code)
}

/// Parse one JSON document per non-empty output line.
pub fn parse_json_lines(out: &str) -> Vec<serde_json::Value> {
    out.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("Failed to parse JSON output"))
        .collect()
}

/// Check if string contains substring
pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "Expected '{}' to contain '{}'",
        haystack, needle
    );
}
