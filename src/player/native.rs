//! Terminal playback loops.
//!
//! `play_session` wires a [`PlaybackSession`] to the terminal: a full-screen
//! view driven by keyboard and mouse when attached to a TTY, or a plain
//! line-per-subtitle printer otherwise. Both loops are single-threaded and
//! block only until the next tick is due.

use std::io;
use std::path::Path;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use tracing::{debug, info, warn};

use super::clock::PlaybackClock;
use super::error::{PlaybackError, PlayerError};
use super::input::{self, InputResult};
use super::render::{PlainView, TerminalView};
use super::session::PlaybackSession;
use crate::config::{Config, ConfigSettingsStore};
use crate::subtitle::{srt, SubtitleIndex};

/// Longest wait between loop iterations while the clock is stopped.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// How a playback run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Playback reached the end of the subtitles
    Finished,
    /// The user quit the interactive player
    Quit,
    /// Plain playback was stopped with Ctrl-C
    Interrupted,
}

/// Options for a playback run. `None` fields fall back to the config file.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Position to start from
    pub start_ms: Option<u64>,
    /// Tick interval override
    pub interval: Option<Duration>,
    /// Seek step override for the arrow keys
    pub seek_step_ms: Option<u64>,
    /// Print subtitles line by line instead of drawing a full-screen view
    pub plain: bool,
}

/// Play a SubRip file in the terminal.
///
/// Settings are loaded from and saved back to the config file; the folder
/// of `path` is remembered as the last opened folder.
pub fn play_session(path: &Path, options: &PlayOptions) -> Result<PlaybackResult, PlaybackError> {
    let config_path = Config::config_path()?;
    let config = Config::load_from(&config_path).unwrap_or_else(|e| {
        warn!("{}. Using default playback settings", e);
        Config::default()
    });
    let interval = options.interval.unwrap_or_else(|| config.tick_interval());
    let seek_step_ms = options.seek_step_ms.unwrap_or(config.playback.seek_step_ms);

    let subtitles = srt::parse(path)?;
    info!(
        "Playing {} ({} subtitles, {} ms)",
        path.display(),
        subtitles.len(),
        subtitles.total_duration()
    );

    let store = ConfigSettingsStore::new(config_path);
    let mut session = PlaybackSession::new(PlaybackClock::new(interval), Box::new(store));
    let folder = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    session.set_last_folder(folder);

    let interactive =
        !options.plain && atty::is(atty::Stream::Stdout) && atty::is(atty::Stream::Stdin);
    let result = if interactive {
        run_interactive(&mut session, subtitles, options.start_ms, seek_step_ms)
    } else {
        run_plain(&mut session, subtitles, options.start_ms)
    };

    session.close();
    result
}

/// Restores the terminal on drop, including on early error returns.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        let guard = Self;
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Load subtitles and move to the start position before any view is attached.
fn prepare(
    session: &mut PlaybackSession,
    subtitles: SubtitleIndex,
    start_ms: Option<u64>,
) -> Result<(), PlayerError> {
    session.load_subtitles(subtitles);
    if let Some(start) = start_ms {
        session.seek(start)?;
    }
    Ok(())
}

fn run_interactive(
    session: &mut PlaybackSession,
    subtitles: SubtitleIndex,
    start_ms: Option<u64>,
    seek_step_ms: u64,
) -> Result<PlaybackResult, PlaybackError> {
    let _guard = TerminalGuard::enter()?;
    let mut size = terminal::size()?;

    prepare(session, subtitles, start_ms)?;
    let view = Rc::new(TerminalView::new(io::stdout(), size.0, size.1));
    session.add_listener(view.clone());
    session.start()?;

    loop {
        let wait = session.time_until_next_tick().unwrap_or(IDLE_POLL);
        if event::poll(wait)? {
            match input::handle_event(event::read()?, session, seek_step_ms, size)? {
                InputResult::Quit => {
                    debug!("Quit requested");
                    return Ok(PlaybackResult::Quit);
                }
                InputResult::Resized(cols, rows) => {
                    size = (cols, rows);
                    view.resize(cols, rows);
                    view.draw(session)?;
                }
                InputResult::Continue => {}
            }
        }

        session.poll()?;

        if let Some(e) = view.take_error() {
            return Err(e.into());
        }
    }
}

fn run_plain(
    session: &mut PlaybackSession,
    subtitles: SubtitleIndex,
    start_ms: Option<u64>,
) -> Result<PlaybackResult, PlaybackError> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

    let width = terminal_size::terminal_size().map(|(w, _)| w.0 as usize);
    prepare(session, subtitles, start_ms)?;
    session.add_listener(Rc::new(PlainView::new(io::stdout()).with_max_width(width)));
    session.start()?;

    while session.is_playing() {
        if interrupted.load(Ordering::SeqCst) {
            debug!("Interrupted");
            session.stop();
            return Ok(PlaybackResult::Interrupted);
        }
        let wait = session
            .time_until_next_tick()
            .map_or(IDLE_POLL, |d| d.min(IDLE_POLL));
        std::thread::sleep(wait);
        session.poll()?;
    }
    Ok(PlaybackResult::Finished)
}
