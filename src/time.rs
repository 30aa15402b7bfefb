//! Parsing of playback positions given on the command line.
//!
//! Accepted forms:
//! - `HH:MM:SS` or `HH:MM:SS.mmm` (`,` also works as the millisecond separator)
//! - `MM:SS` or `MM:SS.mmm`
//! - plain milliseconds, e.g. `90500`

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time '{input}': {reason}")]
pub struct TimeParseError {
    input: String,
    reason: &'static str,
}

impl TimeParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Parse a playback position into milliseconds.
pub fn parse_time(input: &str) -> Result<u64, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::new(input, "empty"));
    }
    if !trimmed.contains(':') {
        return trimmed
            .parse::<u64>()
            .map_err(|_| TimeParseError::new(input, "expected milliseconds or HH:MM:SS"));
    }

    let (clock, millis) = match trimmed.split_once(['.', ',']) {
        Some((clock, fraction)) => (clock, parse_fraction(input, fraction)?),
        None => (trimmed, 0),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [m, s] => (0, number(input, m)?, number(input, s)?),
        [h, m, s] => (number(input, h)?, number(input, m)?, number(input, s)?),
        _ => return Err(TimeParseError::new(input, "too many ':' separators")),
    };
    if parts.len() == 3 && minutes > 59 {
        return Err(TimeParseError::new(input, "minutes must be below 60"));
    }
    if seconds > 59 {
        return Err(TimeParseError::new(input, "seconds must be below 60"));
    }

    hours
        .checked_mul(60)
        .and_then(|m| m.checked_add(minutes))
        .and_then(|m| m.checked_mul(60_000))
        .and_then(|ms| ms.checked_add(seconds * 1000 + millis))
        .ok_or_else(|| TimeParseError::new(input, "number out of range"))
}

fn number(input: &str, part: &str) -> Result<u64, TimeParseError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeParseError::new(input, "expected digits"));
    }
    part.parse()
        .map_err(|_| TimeParseError::new(input, "number out of range"))
}

/// Fractional seconds, e.g. `5` -> 500, `05` -> 50, `005` -> 5.
fn parse_fraction(input: &str, fraction: &str) -> Result<u64, TimeParseError> {
    if fraction.len() > 3 {
        return Err(TimeParseError::new(input, "at most 3 fractional digits"));
    }
    let value = number(input, fraction)?;
    Ok(value * 10u64.pow(3 - fraction.len() as u32))
}
