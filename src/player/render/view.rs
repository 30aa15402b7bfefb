//! Session listeners that draw playback state to a terminal.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};

use tracing::warn;

use super::progress::{format_duration, render_progress_bar};
use super::status::render_status_bar;
use super::subtitle::{render_subtitle_area, truncate_to_width};
use crate::player::session::{PlaybackSession, PlayerEvent, PlayerListener};

/// Rows used below the subtitle area (progress bar + status bar).
pub const CHROME_ROWS: u16 = 2;

/// Full-screen view: subtitle area, progress bar and status bar.
///
/// Redraws on every event. Write errors cannot be returned from a listener,
/// so the first one is kept for the event loop to collect with
/// [`take_error`](Self::take_error).
pub struct TerminalView<W: Write> {
    out: RefCell<W>,
    size: Cell<(u16, u16)>,
    error: RefCell<Option<io::Error>>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out: RefCell::new(out),
            size: Cell::new((cols, rows)),
            error: RefCell::new(None),
        }
    }

    pub fn resize(&self, cols: u16, rows: u16) {
        self.size.set((cols, rows));
    }

    /// First write error since the last call, if any.
    pub fn take_error(&self) -> Option<io::Error> {
        self.error.borrow_mut().take()
    }

    /// Draw the whole frame for the current session state.
    pub fn draw(&self, player: &PlaybackSession) -> io::Result<()> {
        let (cols, rows) = self.size.get();
        let area_rows = rows.saturating_sub(CHROME_ROWS);
        let settings = player.settings();
        let mut out = self.out.borrow_mut();

        render_subtitle_area(
            &mut *out,
            player.active_subtitle().map(|s| s.text()),
            &settings,
            cols,
            area_rows,
        )?;
        if rows >= CHROME_ROWS {
            render_progress_bar(
                &mut *out,
                cols,
                rows - 2,
                player.elapsed_ms(),
                player.total_ms(),
            )?;
            render_status_bar(&mut *out, cols, rows - 1, player.is_playing(), &settings)?;
        }
        out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> PlayerListener for TerminalView<W> {
    fn on_event(&self, player: &PlaybackSession, _event: PlayerEvent) {
        if let Err(e) = self.draw(player) {
            warn!("Failed to draw player: {}", e);
            self.error.borrow_mut().get_or_insert(e);
        }
    }
}

/// Line-oriented view for non-interactive output.
///
/// Prints each subtitle once, when it becomes active, prefixed with its
/// start time.
pub struct PlainView<W: Write> {
    out: RefCell<W>,
    last_id: Cell<Option<u32>>,
    max_width: Option<usize>,
}

impl<W: Write> PlainView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            last_id: Cell::new(None),
            max_width: None,
        }
    }

    /// Cut printed lines to `width` display columns.
    pub fn with_max_width(mut self, width: Option<usize>) -> Self {
        self.max_width = width;
        self
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn print_active(&self, player: &PlaybackSession) -> io::Result<()> {
        let active = player.active_subtitle();
        let id = active.map(|s| s.id());
        if id == self.last_id.get() {
            return Ok(());
        }
        self.last_id.set(id);

        if let Some(entry) = active {
            let mut line = format!(
                "[{}] {}",
                format_duration(entry.start_ms()),
                entry.text().replace('\n', " / ")
            );
            if let Some(width) = self.max_width {
                line = truncate_to_width(&line, width);
            }
            let mut out = self.out.borrow_mut();
            writeln!(out, "{}", line)?;
            out.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> PlayerListener for PlainView<W> {
    fn on_event(&self, player: &PlaybackSession, event: PlayerEvent) {
        let result = match event {
            PlayerEvent::SubtitlesLoaded => {
                self.last_id.set(None);
                self.print_active(player)
            }
            PlayerEvent::Tick { .. } | PlayerEvent::Started => self.print_active(player),
            _ => Ok(()),
        };
        if let Err(e) = result {
            warn!("Failed to print subtitle: {}", e);
        }
    }
}
