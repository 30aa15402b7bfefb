//! Virtual playback clock.
//!
//! Tracks elapsed and total playback time in milliseconds and advances the
//! elapsed time on every tick of its [`TickSource`]. Elapsed time never
//! exceeds the total; reaching the total stops the clock.

use std::time::Duration;

use tracing::{debug, trace};

use super::timer::{IntervalTimer, TickSource};

/// Outcome of a tick delivered to a running clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick {
    /// Milliseconds added by this tick (before clamping)
    pub delta_ms: u64,
    /// True if this tick reached the end and stopped the clock
    pub last: bool,
}

pub struct PlaybackClock {
    elapsed_ms: u64,
    total_ms: u64,
    timer: Box<dyn TickSource>,
}

impl PlaybackClock {
    /// Clock driven by an [`IntervalTimer`] with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self::with_timer(Box::new(IntervalTimer::new(interval)))
    }

    /// Clock driven by a specific tick source (for testing).
    pub fn with_timer(timer: Box<dyn TickSource>) -> Self {
        Self {
            elapsed_ms: 0,
            total_ms: 0,
            timer,
        }
    }

    /// Reset to a stopped clock at zero with a new total.
    pub fn init(&mut self, total_ms: u64) {
        self.stop();
        self.total_ms = total_ms;
        self.elapsed_ms = 0;
    }

    /// Start the tick source. Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.timer.is_running() {
            return false;
        }
        self.timer.start();
        debug!("Clock started");
        true
    }

    /// Stop the tick source. Returns false if it was already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.timer.is_running() {
            return false;
        }
        self.timer.stop();
        debug!("Clock stopped");
        true
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// Jump to `value`, clamped to the total. Reaching the total stops the clock.
    pub fn set_elapsed(&mut self, value: u64) {
        self.elapsed_ms = value.min(self.total_ms);
        if self.elapsed_ms >= self.total_ms {
            self.stop();
        }
    }

    /// Advance by `delta_ms`. Ignored (returns `None`) while stopped.
    pub fn on_tick(&mut self, delta_ms: u64) -> Option<ClockTick> {
        if !self.is_running() {
            trace!("Ignoring tick of {}ms on a stopped clock", delta_ms);
            return None;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms).min(self.total_ms);
        trace!("Tick: clock elapsed duration: {}", self.elapsed_ms);

        let last = self.elapsed_ms >= self.total_ms;
        if last {
            self.stop();
        }
        Some(ClockTick { delta_ms, last })
    }

    /// Deliver a tick if the tick source has one due.
    pub fn poll(&mut self) -> Option<ClockTick> {
        let delta_ms = self.timer.poll()?;
        self.on_tick(delta_ms)
    }

    /// Time until the tick source is due, `None` while stopped.
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.timer.until_next()
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::with_timer(Box::<IntervalTimer>::default())
    }
}

impl std::fmt::Debug for PlaybackClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackClock")
            .field("elapsed_ms", &self.elapsed_ms)
            .field("total_ms", &self.total_ms)
            .field("running", &self.is_running())
            .finish()
    }
}
