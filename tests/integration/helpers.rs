//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Directory holding the `.srt` fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy a fixture into a fresh temp dir.
///
/// Returns the dir (keep it alive for the test) and the copied file path.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let dest = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &dest).expect("Failed to copy fixture");
    (dir, dest)
}

/// Path of a config file inside `dir` (not created).
pub fn config_in(dir: &TempDir) -> PathBuf {
    dir.path().join("config").join("config.toml")
}
