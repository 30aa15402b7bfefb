//! Info command handler

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use subplay::player::render::format_duration;
use subplay::subtitle::{srt, SubtitleIndex};

/// Summary of a subtitle file.
#[derive(Debug, Serialize)]
struct InfoReport {
    file: String,
    entries: usize,
    first_start_ms: u64,
    duration_ms: u64,
    duration: String,
    size_bytes: u64,
}

impl InfoReport {
    fn new(file: &Path, index: &SubtitleIndex, size_bytes: u64) -> Self {
        Self {
            file: file.display().to_string(),
            entries: index.len(),
            first_start_ms: index.entries().first().map_or(0, |e| e.start_ms()),
            duration_ms: index.total_duration(),
            duration: format_duration(index.total_duration()),
            size_bytes,
        }
    }
}

/// Print entry count, duration and size of a subtitle file.
pub fn handle(file: &Path, json: bool) -> Result<()> {
    let index = srt::parse(file).with_context(|| format!("Failed to load {}", file.display()))?;
    let size = fs::metadata(file)
        .with_context(|| format!("Failed to stat {}", file.display()))?
        .len();
    let report = InfoReport::new(file, &index, size);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("File:        {}", report.file);
    println!("Subtitles:   {}", report.entries);
    println!("First shown: {}", format_duration(report.first_start_ms));
    println!("Duration:    {}", report.duration);
    println!(
        "Size:        {}",
        humansize::format_size(report.size_bytes, humansize::BINARY)
    );
    Ok(())
}
