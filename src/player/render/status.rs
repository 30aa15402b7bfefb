//! Status bar rendering for the terminal player.
//!
//! Displays playback state, display settings and keyboard shortcuts.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::settings::Settings;

/// Keyboard hints shown on the right of the status bar.
pub const KEY_HINTS: &str = "space:play/stop  ←/→:seek  home:rewind  [/]:opacity  b:bold  q:quit";

/// Build the plain-text content of the status bar, padded or cut to `width`.
pub fn status_text(width: u16, playing: bool, settings: &Settings) -> String {
    let state = if playing { "▶ playing" } else { "⏸ stopped" };
    let left = format!(" {}  opacity:{:>3}", state, settings.opacity);

    let width = width as usize;
    let left_width = left.width();
    let hint_width = KEY_HINTS.width();

    let mut text = left;
    if left_width + 2 + hint_width <= width {
        text.push_str(&" ".repeat(width - left_width - hint_width));
        text.push_str(KEY_HINTS);
    } else {
        text = super::subtitle::truncate_to_width(&text, width);
        let used = text.width();
        text.push_str(&" ".repeat(width.saturating_sub(used)));
    }
    text
}

/// Render the status/controls bar.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `playing` - Whether the clock is running
/// * `settings` - Current display settings
pub fn render_status_bar<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    playing: bool,
    settings: &Settings,
) -> io::Result<()> {
    const WHITE: &str = "\x1b[97m";
    const GREEN: &str = "\x1b[32m";

    let colour = if playing { GREEN } else { WHITE };
    write!(
        out,
        "\x1b[{};1H\x1b[48;5;236m{}{}\x1b[0m",
        row + 1,
        colour,
        status_text(width, playing, settings)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminal_shows_hints_right_aligned() {
        let text = status_text(120, true, &Settings::default());
        assert!(text.starts_with(" ▶ playing  opacity:  0"));
        assert!(text.ends_with(KEY_HINTS));
        assert_eq!(text.width(), 120);
    }

    #[test]
    fn narrow_terminal_drops_hints() {
        let text = status_text(30, false, &Settings::default().with_opacity(255));
        assert!(text.starts_with(" ⏸ stopped  opacity:255"));
        assert!(!text.contains("quit"));
        assert_eq!(text.width(), 30);
    }

    #[test]
    fn tiny_terminal_truncates_state() {
        let text = status_text(6, false, &Settings::default());
        assert_eq!(text.width(), 6);
    }

    #[test]
    fn render_moves_to_row() {
        let mut out = Vec::new();
        render_status_bar(&mut out, 40, 0, false, &Settings::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[1;1H"));
        assert!(text.contains("stopped"));
    }
}
