//! Rendering components for the terminal player.
//!
//! This module contains the drawing functions for the subtitle area,
//! progress bar and status bar, and the session listeners that use them.

mod progress;
mod status;
mod subtitle;
mod view;

pub use progress::{
    build_progress_bar_chars, format_duration, progress_bar_width, render_progress_bar,
};
pub use status::{render_status_bar, status_text, KEY_HINTS};
pub use subtitle::{layout_subtitle, render_subtitle_area, text_style, truncate_to_width};
pub use view::{PlainView, TerminalView, CHROME_ROWS};
