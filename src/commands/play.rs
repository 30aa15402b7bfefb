//! Play command handler

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use subplay::player::{play_session, PlayOptions, PlaybackResult};

/// Play a subtitle file, interactively or line by line.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    file: &Path,
    start: Option<u64>,
    interval: Option<u64>,
    step: Option<u64>,
    plain: bool,
) -> Result<()> {
    let options = PlayOptions {
        start_ms: start,
        interval: interval.map(Duration::from_millis),
        seek_step_ms: step,
        plain,
    };

    let result = play_session(file, &options)
        .with_context(|| format!("Failed to play {}", file.display()))?;

    if result == PlaybackResult::Interrupted {
        eprintln!("Interrupted");
    }
    Ok(())
}
