//! At command handler

use std::path::Path;

use anyhow::{bail, Context, Result};

use subplay::player::render::format_duration;
use subplay::subtitle::srt;

/// Print the text of the subtitle visible at `time_ms`.
///
/// Fails when no subtitle is visible, so scripts can test the exit status.
pub fn handle(file: &Path, time_ms: u64) -> Result<()> {
    let index = srt::parse(file).with_context(|| format!("Failed to load {}", file.display()))?;

    match index.find_active(time_ms) {
        Some(entry) => {
            println!("{}", entry.text());
            Ok(())
        }
        None => bail!("No subtitle at {}", format_duration(time_ms)),
    }
}
