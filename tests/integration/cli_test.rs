//! Integration tests for the subplay CLI

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{config_in, fixtures_dir, temp_fixture};

/// subplay command isolated from the user's config and log settings.
fn subplay(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("subplay").expect("binary should be built");
    cmd.env("SUBPLAY_CONFIG", config)
        .env_remove("SUBPLAY_LOG")
        .env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_includes_package_version() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "subplay {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir)).assert().code(2);
}

// ============================================================================
// info
// ============================================================================

#[test]
fn info_prints_summary() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .arg("info")
        .arg(fixtures_dir().join("sample.srt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Subtitles:   3"))
        .stdout(predicate::str::contains("First shown: 00:00:01"))
        .stdout(predicate::str::contains("Duration:    00:01:02"));
}

#[test]
fn info_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let output = subplay(&config_in(&dir))
        .arg("info")
        .arg(fixtures_dir().join("sample.srt"))
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["entries"], 3);
    assert_eq!(report["first_start_ms"], 1000);
    assert_eq!(report["duration_ms"], 62000);
    assert_eq!(report["duration"], "00:01:02");
    assert!(report["size_bytes"].as_u64().unwrap() > 0);
}

#[test]
fn info_reports_parse_error_with_line() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .arg("info")
        .arg(fixtures_dir().join("broken.srt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"))
        .stderr(predicate::str::contains("Line 5"));
}

#[test]
fn info_rejects_empty_file() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .arg("info")
        .arg(fixtures_dir().join("empty.srt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subtitle list is empty"));
}

#[test]
fn info_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .args(["info", "does-not-exist.srt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.srt"));
}

// ============================================================================
// at
// ============================================================================

#[test]
fn at_prints_active_subtitle() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .arg("at")
        .arg(fixtures_dir().join("sample.srt"))
        .arg("00:00:06")
        .assert()
        .success()
        .stdout("Where were we?\nRight here.\n");
}

#[test]
fn at_accepts_milliseconds() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .arg("at")
        .arg(fixtures_dir().join("sample.srt"))
        .arg("1000")
        .assert()
        .success()
        .stdout("Good evening.\n");
}

#[test]
fn at_end_time_is_exclusive() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .arg("at")
        .arg(fixtures_dir().join("sample.srt"))
        .arg("00:04")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No subtitle at 00:00:04"));
}

#[test]
fn at_rejects_bad_time() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .arg("at")
        .arg(fixtures_dir().join("sample.srt"))
        .arg("soon")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid time 'soon'"));
}

// ============================================================================
// play --plain
// ============================================================================

#[test]
fn plain_play_prints_subtitles_and_finishes() {
    let dir = TempDir::new().unwrap();
    let (_fixture_dir, srt) = temp_fixture("short_crlf.srt");
    subplay(&config_in(&dir))
        .arg("play")
        .arg(&srt)
        .args(["--plain", "--interval", "10"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout("[00:00:00] alpha\n[00:00:00] beta\n");
}

#[test]
fn plain_play_honours_start() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .arg("play")
        .arg(fixtures_dir().join("short_crlf.srt"))
        .args(["--plain", "--interval", "10", "--start", "200"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout("[00:00:00] beta\n");
}

#[test]
fn plain_play_saves_last_folder() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let (fixture_dir, srt) = temp_fixture("short_crlf.srt");

    subplay(&config)
        .arg("play")
        .arg(&srt)
        .args(["--plain", "--interval", "10", "--start", "300"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success();

    let saved = subplay::Config::load_from(&config).unwrap();
    assert_eq!(saved.display.last_open_folder, fixture_dir.path());
    assert_eq!(saved.display.font_name, "Arial");
}

#[test]
fn play_with_invalid_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(&config, "[playback]\ntick_interval_ms = \"fast\"\n").unwrap();

    subplay(&config)
        .arg("play")
        .arg(fixtures_dir().join("short_crlf.srt"))
        .args(["--plain", "--interval", "10"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout("[00:00:00] alpha\n[00:00:00] beta\n")
        .stderr(predicate::str::contains("Invalid config file"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_honours_env() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    subplay(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", config.display()));
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[playback]"))
        .stdout(predicate::str::contains("tick_interval_ms = 40"))
        .stdout(predicate::str::contains("seek_step_ms = 5000"))
        .stdout(predicate::str::contains("[display]"))
        .stdout(predicate::str::contains("font_name = \"Arial\""));
}

#[test]
fn config_reset_keeps_other_tables() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(
        &config,
        "# my settings\n[playback]\nseek_step_ms = 1000\n\n[display]\nopacity = 200\nfont_style = \"bold\"\n",
    )
    .unwrap();

    subplay(&config)
        .args(["config", "reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset"));

    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("# my settings"));
    assert!(content.contains("seek_step_ms = 1000"));

    let saved = subplay::Config::load_from(&config).unwrap();
    assert_eq!(saved.display, subplay::Settings::default());
    assert_eq!(saved.playback.seek_step_ms, 1000);
}

#[test]
fn config_reset_without_tty_needs_yes() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    subplay(&config)
        .args(["config", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made"));
    assert!(!config.exists());
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    subplay(&config_in(&dir))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subplay"));
}
