//! Input handling for the terminal player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::{handle_key_event, OPACITY_STEP};
pub use mouse::{handle_mouse_event, seek_target_for_column};

use crossterm::event::Event;

use super::error::PlayerError;
use super::session::PlaybackSession;

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
    /// Terminal was resized to (cols, rows)
    Resized(u16, u16),
}

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `session` - Session to drive
/// * `seek_step_ms` - Distance of one arrow-key seek
/// * `term_size` - Current terminal (cols, rows), used to map mouse clicks
pub fn handle_event(
    event: Event,
    session: &mut PlaybackSession,
    seek_step_ms: u64,
    term_size: (u16, u16),
) -> Result<InputResult, PlayerError> {
    match event {
        Event::Key(key) => handle_key_event(key, session, seek_step_ms),
        Event::Mouse(mouse) => handle_mouse_event(mouse, session, term_size),
        Event::Resize(cols, rows) => Ok(InputResult::Resized(cols, rows)),
        _ => Ok(InputResult::Continue), // Ignore focus events, paste, etc.
    }
}
