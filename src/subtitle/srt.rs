//! SubRip (`.srt`) reader
//!
//! Reference: https://en.wikipedia.org/wiki/SubRip
//!
//! Each block is a numeric id line, a timing line
//! (`00:00:01,000 --> 00:00:02,500`), one or more text lines and a blank
//! separator line. Multi-line text is joined with `\n`.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use super::{SubtitleEntry, SubtitleError, SubtitleIndex};

/// Separator between start and end timestamps on a timing line.
const TIMING_SEPARATOR: &str = "-->";

/// Parse a SubRip file from a path.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<SubtitleIndex, SubtitleError> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|source| SubtitleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loading subtitles from {}", path.display());

    parse_reader(BufReader::new(file)).map_err(|e| match e {
        SubtitleError::Read(source) => SubtitleError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parse SubRip content from a string.
pub fn parse_str(content: &str) -> Result<SubtitleIndex, SubtitleError> {
    parse_reader(BufReader::new(content.as_bytes()))
}

/// Parse SubRip content from a reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<SubtitleIndex, SubtitleError> {
    let mut lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
    if let Some(first) = lines.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }

    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let id_line = lines[i].trim();
        if id_line.is_empty() {
            i += 1;
            continue;
        }

        let id: u32 = id_line.parse().map_err(|_| {
            SubtitleError::parse(i + 1, format!("expected subtitle number, found '{id_line}'"))
        })?;
        i += 1;

        let timing = lines
            .get(i)
            .ok_or_else(|| SubtitleError::parse(i + 1, "missing timing line"))?;
        let (start_ms, end_ms) =
            parse_timing(timing.trim()).map_err(|message| SubtitleError::parse(i + 1, message))?;
        i += 1;

        let mut text = Vec::new();
        while let Some(line) = lines.get(i) {
            if line.trim().is_empty() {
                break;
            }
            text.push(line.trim_end());
            i += 1;
        }

        let entry = SubtitleEntry::new(id, start_ms, end_ms, text.join("\n"));
        trace!("Parsed subtitle: {:?}", entry);
        entries.push(entry);
    }

    let index = SubtitleIndex::new(entries)?;
    debug!(
        "Loaded {} subtitles (total: {}ms)",
        index.len(),
        index.total_duration()
    );
    Ok(index)
}

/// Parse `start --> end` into millisecond offsets.
///
/// Anything after the end timestamp (some files carry position hints) is ignored.
fn parse_timing(line: &str) -> Result<(u64, u64), String> {
    let (start, rest) = line
        .split_once(TIMING_SEPARATOR)
        .ok_or_else(|| format!("expected 'start {TIMING_SEPARATOR} end', found '{line}'"))?;

    let end = rest.split_whitespace().next().unwrap_or_default();

    Ok((parse_timestamp(start.trim())?, parse_timestamp(end)?))
}

/// Parse `HH:MM:SS,mmm` (or `HH:MM:SS.mmm`) into milliseconds.
fn parse_timestamp(value: &str) -> Result<u64, String> {
    let invalid = || format!("invalid timestamp '{value}'");

    let (clock, millis) = value
        .split_once([',', '.'])
        .ok_or_else(invalid)?;

    let mut parts = clock.split(':');
    let (Some(h), Some(m), Some(s), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let number = |part: &str| part.trim().parse::<u64>().map_err(|_| invalid());
    let (hours, minutes, seconds, millis) = (number(h)?, number(m)?, number(s)?, number(millis)?);

    if minutes >= 60 || seconds >= 60 || millis >= 1000 {
        return Err(invalid());
    }

    hours
        .checked_mul(3_600_000)
        .and_then(|ms| ms.checked_add((minutes * 60 + seconds) * 1000 + millis))
        .ok_or_else(invalid)
}
