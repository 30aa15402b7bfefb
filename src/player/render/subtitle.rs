//! Subtitle text rendering for the terminal player.
//!
//! Lines are centred horizontally and placed at the bottom of the subtitle
//! area, like an overlay above a video. Font style maps to SGR attributes and
//! opacity to a background shade; font name and size cannot be expressed in a
//! terminal and are ignored here.

use std::io::{self, Write};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::settings::{Settings, MAX_OPACITY};

/// First and last index of the 256-colour greyscale ramp.
const GREY_RAMP_START: u16 = 232;
const GREY_RAMP_END: u16 = 255;

/// Cut `text` to at most `width` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

/// Lay out subtitle text for a terminal `width` columns wide.
///
/// Returns one `(column, line)` pair per text line, where `column` is the
/// 0-indexed start column that centres the line.
pub fn layout_subtitle(text: &str, width: u16) -> Vec<(u16, String)> {
    let width = width as usize;
    text.lines()
        .map(|line| {
            let line = truncate_to_width(line.trim(), width);
            let column = (width - line.width()) / 2;
            (column as u16, line)
        })
        .collect()
}

/// SGR escape sequence for subtitle text drawn with `settings`.
pub fn text_style(settings: &Settings) -> String {
    let mut params = vec!["97".to_string()];
    if settings.font_style.is_bold() {
        params.push("1".to_string());
    }
    if settings.font_style.is_italic() {
        params.push("3".to_string());
    }
    if settings.opacity > 0 {
        let span = GREY_RAMP_END - GREY_RAMP_START;
        let shade = GREY_RAMP_START + settings.opacity as u16 * span / MAX_OPACITY as u16;
        params.push(format!("48;5;{}", shade));
    }
    format!("\x1b[{}m", params.join(";"))
}

/// Render the subtitle area (rows `0..area_rows`).
///
/// Clears the area, then draws `text` (if any) on the bottom rows, leaving
/// one blank row above the progress bar when there is room.
pub fn render_subtitle_area<W: Write>(
    out: &mut W,
    text: Option<&str>,
    settings: &Settings,
    width: u16,
    area_rows: u16,
) -> io::Result<()> {
    let mut output = String::new();
    for row in 0..area_rows {
        output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1));
    }

    let lines = text.map(|t| layout_subtitle(t, width)).unwrap_or_default();
    let area_rows = area_rows as usize;
    let visible = lines.len().min(area_rows);
    let first_row = area_rows.saturating_sub(visible + 1);
    let style = text_style(settings);

    for (i, (column, line)) in lines.iter().take(visible).enumerate() {
        output.push_str(&format!(
            "\x1b[{};{}H{}{}\x1b[0m",
            first_row + i + 1,
            column + 1,
            style,
            line
        ));
    }

    write!(out, "{}", output)
}
