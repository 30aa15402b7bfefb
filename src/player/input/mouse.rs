//! Mouse input handling for the terminal player.
//!
//! Handles click-to-seek on the progress bar.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::InputResult;
use crate::player::error::PlayerError;
use crate::player::render::{progress_bar_width, CHROME_ROWS};
use crate::player::session::PlaybackSession;

/// Map a click on the progress bar to a playback position.
///
/// The bar starts at column 1. Returns `None` for clicks outside it.
pub fn seek_target_for_column(column: u16, term_cols: u16, total_ms: u64) -> Option<u64> {
    let bar_start = 1u16;
    let bar_width = progress_bar_width(term_cols, total_ms);
    if bar_width == 0 || column < bar_start || column >= bar_start + bar_width as u16 {
        return None;
    }
    let ratio = (column - bar_start) as f64 / bar_width as f64;
    Some((ratio * total_ms as f64).round() as u64)
}

/// Handle a mouse event.
///
/// A left click on the progress bar seeks to the matching position.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    session: &mut PlaybackSession,
    term_size: (u16, u16),
) -> Result<InputResult, PlayerError> {
    let (cols, rows) = term_size;
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if rows >= CHROME_ROWS && mouse.row == rows - CHROME_ROWS {
            if let Some(target) = seek_target_for_column(mouse.column, cols, session.total_ms()) {
                session.seek(target)?;
            }
        }
    }
    Ok(InputResult::Continue)
}
