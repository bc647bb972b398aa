//! Integration tests for the launchdeck binary.
//!
//! These run the compiled binary in `--render` mode; the interactive deck
//! needs a real terminal and is covered by the shell unit tests.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_launchdeck"))
}

/// A config path that never exists, so a user's own config cannot leak in.
fn isolated_config() -> PathBuf {
    std::env::temp_dir().join("launchdeck_e2e_missing").join("config.toml")
}

fn run(args: &[&str]) -> Output {
    let config = isolated_config();
    Command::new(binary_path())
        .env_remove("RUST_LOG")
        .args(["--config", config.to_str().unwrap(), "--seed", "42"])
        .args(args)
        .output()
        .expect("Failed to run binary")
}

fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

// ─── Static render ──────────────────────────────────────────────────────────

#[test]
fn test_render_each_slide() {
    let cases = [
        ("hero", "MARS COLONY"),
        ("figures", "Key Figures"),
        ("orgchart", "SpaceX Organization"),
        ("credits", "About This Presentation"),
    ];
    for (slide, headline) in cases {
        let output = run_ok(&["--render", slide]);
        assert!(output.contains(headline), "{slide}: missing {headline}");
    }
}

#[test]
fn test_render_is_silent_on_stderr() {
    let output = run(&["--render", "orgchart"]);
    assert!(output.status.success());
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_headline_survives_every_seed() {
    let config = isolated_config();
    for seed in 1..30 {
        let output = Command::new(binary_path())
            .args(["--config", config.to_str().unwrap(), "-q", "--render", "orgchart"])
            .args(["--seed", &seed.to_string()])
            .output()
            .expect("Failed to run binary");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("SpaceX Organization"), "seed {seed}");
    }
}

#[test]
fn test_render_by_position() {
    let by_name = run_ok(&["--render", "credits"]);
    let by_number = run_ok(&["--render", "4"]);
    assert_eq!(by_name, by_number);
}

#[test]
fn test_render_respects_size() {
    let output = run_ok(&["--render", "figures", "--width", "60", "--height", "20"]);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 20);
    assert!(lines.iter().all(|l| l.chars().count() <= 60));
}

#[test]
fn test_ascii_flag() {
    let output = run_ok(&["--render", "orgchart", "--ascii"]);
    assert!(output.is_ascii(), "Unicode char found in --ascii output");
    assert!(output.contains('+') && output.contains('|'));
}

#[test]
fn test_output_to_file() {
    let dir = std::env::temp_dir().join("launchdeck_test_write");
    fs::create_dir_all(&dir).ok();
    let out_file = dir.join("credits.txt");

    let stdout = run_ok(&["--render", "credits", "--output", out_file.to_str().unwrap()]);
    assert!(stdout.is_empty());
    let content = fs::read_to_string(&out_file).unwrap();
    assert!(content.contains("About This Presentation"));

    fs::remove_file(&out_file).ok();
    fs::remove_dir(&dir).ok();
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_slide_fails() {
    let output = run(&["--render", "launchpad"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("launchpad"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_config_fails() {
    let dir = std::env::temp_dir().join("launchdeck_test_bad_config");
    fs::create_dir_all(&dir).ok();
    let config = dir.join("config.toml");
    fs::write(&config, "cooldown_ms = 0\n").unwrap();

    let output = Command::new(binary_path())
        .args(["--config", config.to_str().unwrap(), "--render", "hero"])
        .output()
        .expect("Failed to run binary");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cooldown_ms"));

    fs::remove_file(&config).ok();
    fs::remove_dir(&dir).ok();
}
