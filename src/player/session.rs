//! Playback session: clock, subtitles and settings bound together.
//!
//! The session recomputes the active subtitle whenever the clock ticks or
//! the user seeks, and reports every state transition to its listeners as a
//! [`PlayerEvent`]. All operations run on one thread; listeners are invoked
//! synchronously and may register or remove listeners from their callback.

use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info};

use super::clock::{ClockTick, PlaybackClock};
use super::error::PlayerError;
use super::listeners::{ListenerId, ListenerRegistry};
use crate::settings::{Settings, SettingsStore};
use crate::subtitle::{SubtitleEntry, SubtitleIndex};

/// State transition reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A new subtitle list replaced the previous one
    SubtitlesLoaded,
    /// Elapsed time changed
    Tick {
        /// True when the change came from [`PlaybackSession::seek`]
        /// rather than from the clock
        seek: bool,
    },
    Started,
    Stopped,
    SettingsChanged,
}

/// Observer of a [`PlaybackSession`].
///
/// Implemented for any `Fn(&PlaybackSession, PlayerEvent)`.
pub trait PlayerListener {
    fn on_event(&self, player: &PlaybackSession, event: PlayerEvent);
}

impl<F> PlayerListener for F
where
    F: Fn(&PlaybackSession, PlayerEvent),
{
    fn on_event(&self, player: &PlaybackSession, event: PlayerEvent) {
        self(player, event)
    }
}

pub struct PlaybackSession {
    clock: PlaybackClock,
    subtitles: Option<SubtitleIndex>,
    /// Position of the active subtitle in `subtitles`
    active: Option<usize>,
    seeking: bool,
    settings: Rc<Settings>,
    store: Box<dyn SettingsStore>,
    listeners: ListenerRegistry<dyn PlayerListener>,
}

impl PlaybackSession {
    /// Create a session with settings loaded from `store`.
    pub fn new(clock: PlaybackClock, store: Box<dyn SettingsStore>) -> Self {
        let settings = store.load();
        Self::with_settings(clock, settings, store)
    }

    pub fn with_settings(
        clock: PlaybackClock,
        settings: Settings,
        store: Box<dyn SettingsStore>,
    ) -> Self {
        Self {
            clock,
            subtitles: None,
            active: None,
            seeking: false,
            settings: Rc::new(settings),
            store,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn add_listener(&self, listener: Rc<dyn PlayerListener>) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Remove a listener. Safe to call from inside a listener callback.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Replace the subtitle list and rewind the clock.
    pub fn load_subtitles(&mut self, subtitles: SubtitleIndex) {
        debug!(
            "Setting new list of subtitles (Total: {})",
            subtitles.len()
        );
        self.clock.stop();
        self.clock.init(subtitles.total_duration());
        self.active = subtitles.position_at(0);
        self.seeking = false;
        self.subtitles = Some(subtitles);
        self.notify(PlayerEvent::SubtitlesLoaded);
    }

    /// Start playback.
    ///
    /// # Errors
    /// [`PlayerError::NoSubtitles`] if nothing was loaded.
    pub fn start(&mut self) -> Result<(), PlayerError> {
        self.require_subtitles()?;
        self.clock.start();
        self.notify(PlayerEvent::Started);
        Ok(())
    }

    /// Stop playback. Always reports [`PlayerEvent::Stopped`], even when
    /// already stopped.
    pub fn stop(&mut self) {
        self.clock.stop();
        self.notify(PlayerEvent::Stopped);
    }

    /// Jump to `target_ms` (clamped to the total duration).
    ///
    /// Listeners receive `Tick { seek: true }`. If the jump reaches the end
    /// while playing, the clock stops and `Stopped` follows.
    ///
    /// # Errors
    /// [`PlayerError::NoSubtitles`] if nothing was loaded.
    pub fn seek(&mut self, target_ms: u64) -> Result<(), PlayerError> {
        self.require_subtitles()?;
        debug!("Seeking to duration: {}", target_ms);

        let was_running = self.clock.is_running();
        self.clock.set_elapsed(target_ms);

        self.seeking = true;
        self.update_active();
        self.notify(PlayerEvent::Tick { seek: true });
        self.seeking = false;

        if was_running && !self.clock.is_running() {
            self.notify(PlayerEvent::Stopped);
        }
        Ok(())
    }

    /// Deliver a tick of `delta_ms` as if the tick source had fired.
    ///
    /// Returns `None` when the clock is stopped and the tick was ignored.
    ///
    /// # Errors
    /// [`PlayerError::NoSubtitles`] if nothing was loaded.
    pub fn advance(&mut self, delta_ms: u64) -> Result<Option<ClockTick>, PlayerError> {
        self.require_subtitles()?;
        let tick = self.clock.on_tick(delta_ms);
        if let Some(tick) = tick {
            self.on_clock_tick(tick);
        }
        Ok(tick)
    }

    /// Process a tick if the clock's tick source has one due.
    pub fn poll(&mut self) -> Result<Option<ClockTick>, PlayerError> {
        let Some(tick) = self.clock.poll() else {
            return Ok(None);
        };
        self.require_subtitles()?;
        self.on_clock_tick(tick);
        Ok(Some(tick))
    }

    /// How long the event loop may wait before the next tick is due.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.clock.until_next_tick()
    }

    /// Replace the settings and notify listeners. Values are not validated.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = Rc::new(settings);
        self.notify(PlayerEvent::SettingsChanged);
    }

    /// Remember the folder subtitles were last opened from.
    ///
    /// Replaces the settings value without notifying listeners.
    pub fn set_last_folder(&mut self, folder: impl Into<PathBuf>) {
        self.settings = Rc::new(self.settings.with_last_open_folder(folder));
    }

    /// Stop playback, drop all listeners and persist the settings.
    pub fn close(&mut self) {
        info!("Closing player");
        self.listeners.clear();
        self.clock.stop();
        self.store.save(&self.settings);
    }

    pub fn has_subtitles(&self) -> bool {
        self.subtitles.is_some()
    }

    pub fn subtitles(&self) -> Option<&SubtitleIndex> {
        self.subtitles.as_ref()
    }

    /// Subtitle visible at the current elapsed time.
    pub fn active_subtitle(&self) -> Option<&SubtitleEntry> {
        self.subtitles.as_ref()?.get(self.active?)
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.clock.elapsed_ms()
    }

    pub fn total_ms(&self) -> u64 {
        self.clock.total_ms()
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_running()
    }

    /// True while listeners are being told about a seek.
    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    /// Current settings. The returned value is never mutated afterwards.
    pub fn settings(&self) -> Rc<Settings> {
        Rc::clone(&self.settings)
    }

    pub fn last_folder(&self) -> &Path {
        &self.settings.last_open_folder
    }

    fn on_clock_tick(&mut self, tick: ClockTick) {
        self.update_active();
        self.notify(PlayerEvent::Tick { seek: false });
        if tick.last {
            self.notify(PlayerEvent::Stopped);
        }
    }

    fn update_active(&mut self) {
        let elapsed = self.clock.elapsed_ms();
        self.active = self
            .subtitles
            .as_ref()
            .and_then(|subtitles| subtitles.position_at(elapsed));
    }

    fn require_subtitles(&self) -> Result<(), PlayerError> {
        if self.subtitles.is_none() {
            return Err(PlayerError::NoSubtitles);
        }
        Ok(())
    }

    fn notify(&self, event: PlayerEvent) {
        self.listeners.notify_all(|listener| listener.on_event(self, event));
    }
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("clock", &self.clock)
            .field("subtitles", &self.subtitles.as_ref().map(SubtitleIndex::len))
            .field("active", &self.active)
            .field("seeking", &self.seeking)
            .field("settings", &self.settings)
            .field("listeners", &self.listeners)
            .finish()
    }
}
