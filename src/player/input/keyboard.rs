//! Keyboard input handling for the terminal player.
//!
//! Handles playback controls, seeking and the display settings shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::InputResult;
use crate::player::error::PlayerError;
use crate::player::session::PlaybackSession;

/// Opacity change per `[` / `]` key press.
pub const OPACITY_STEP: u8 = 16;

/// Handle a keyboard event.
///
/// Quit keys always work. Playback keys need loaded subtitles and return
/// [`PlayerError::NoSubtitles`] otherwise.
pub fn handle_key_event(
    key: KeyEvent,
    session: &mut PlaybackSession,
    seek_step_ms: u64,
) -> Result<InputResult, PlayerError> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Ok(InputResult::Continue);
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return Ok(InputResult::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(InputResult::Quit)
        }

        // === Display settings ===
        KeyCode::Char('[') => {
            let settings = session.settings();
            let opacity = settings.opacity.saturating_sub(OPACITY_STEP);
            session.set_settings(settings.with_opacity(opacity));
        }
        KeyCode::Char(']') => {
            let settings = session.settings();
            let opacity = settings.opacity.saturating_add(OPACITY_STEP);
            session.set_settings(settings.with_opacity(opacity));
        }
        KeyCode::Char('b') => {
            let settings = session.settings();
            session.set_settings(settings.with_font_style(settings.font_style.toggle_bold()));
        }

        // === Playback controls ===
        KeyCode::Char(' ') => toggle_playback(session)?,

        // === Seeking ===
        KeyCode::Left => {
            let target = session.elapsed_ms().saturating_sub(seek_step_ms);
            session.seek(target)?;
        }
        KeyCode::Right => {
            let target = session.elapsed_ms().saturating_add(seek_step_ms);
            session.seek(target)?;
        }
        KeyCode::Home => session.seek(0)?,
        KeyCode::End => {
            let end = session.total_ms();
            session.seek(end)?;
        }

        _ => {}
    }
    Ok(InputResult::Continue)
}

/// Start or stop playback. Starting at the end rewinds first.
fn toggle_playback(session: &mut PlaybackSession) -> Result<(), PlayerError> {
    if session.is_playing() {
        session.stop();
        return Ok(());
    }
    if session.has_subtitles() && session.elapsed_ms() >= session.total_ms() {
        session.seek(0)?;
    }
    session.start()
}
