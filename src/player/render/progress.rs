//! Progress bar rendering for the terminal player.
//!
//! Displays elapsed/total playback time with a playhead.

use std::io::{self, Write};

/// Format a duration in milliseconds as `HH:MM:SS`.
///
/// Milliseconds are truncated; hours are not wrapped.
pub fn format_duration(millis: u64) -> String {
    let total_secs = millis / 1000;
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Width of the bar part of a progress bar drawn `width` columns wide.
///
/// Leaves room for the leading pad, the `elapsed/total` display and a
/// trailing pad. Elapsed never formats wider than total, so the bar does not
/// move as playback advances.
pub fn progress_bar_width(width: u16, total_ms: u64) -> usize {
    let total = format_duration(total_ms);
    // " " + elapsed + "/" + total
    let time_width = 2 + total.len() * 2;
    (width as usize).saturating_sub(time_width + 2)
}

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `elapsed_ms` - Current playback position
/// * `total_ms` - Total duration
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_progress_bar_chars(
    bar_width: usize,
    elapsed_ms: u64,
    total_ms: u64,
) -> (Vec<char>, usize) {
    let progress = if total_ms > 0 {
        (elapsed_ms as f64 / total_ms as f64).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the progress bar.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `elapsed_ms` - Current playback position
/// * `total_ms` - Total duration
pub fn render_progress_bar<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    elapsed_ms: u64,
    total_ms: u64,
) -> io::Result<()> {
    let time_display = format!(
        " {}/{}",
        format_duration(elapsed_ms),
        format_duration(total_ms)
    );
    let bar_width = progress_bar_width(width, total_ms);
    let (bar, filled) = build_progress_bar_chars(bar_width, elapsed_ms, total_ms);

    const GREEN: &str = "\x1b[32m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1)); // Move cursor
    output.push_str("\x1b[48;5;236m "); // Dark gray background + padding

    output.push_str(GREEN);
    for (i, &c) in bar.iter().enumerate() {
        if i < filled {
            output.push('━');
        } else if i == filled {
            output.push_str(WHITE);
            output.push(c);
            output.push_str(DARK_GREY);
        } else {
            output.push(c);
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    let used_width = 1 + bar_width + time_display.len();
    let remaining = (width as usize).saturating_sub(used_width);
    output.push_str(&" ".repeat(remaining));

    output.push_str("\x1b[0m"); // Reset
    write!(out, "{}", output)
}
