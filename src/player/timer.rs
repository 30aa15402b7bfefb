//! Tick sources driving the playback clock.
//!
//! A tick source only measures time. Each tick reports the wall-clock
//! milliseconds that actually passed since the previous tick (or since
//! `start` for the first one), not the nominal interval, so scheduling
//! delays never accumulate into drift.

use std::time::{Duration, Instant};

/// Default interval between ticks: 40ms, i.e. 25 ticks per second.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(40);

/// A cancellable, restartable source of ticks.
///
/// Sources are polled by the event loop that owns the clock; nothing fires
/// on another thread.
pub trait TickSource {
    /// Begin producing ticks. No-op if already running.
    fn start(&mut self);

    /// Stop producing ticks. No-op if already stopped.
    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Elapsed milliseconds since the previous tick if a tick is due now.
    fn poll(&mut self) -> Option<u64>;

    /// Time left until the next tick is due, `None` while stopped.
    fn until_next(&self) -> Option<Duration>;
}

/// Deadline-based timer firing at a fixed nominal interval.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    /// Time of the previous tick (or of `start`); `None` while stopped
    last_tick: Option<Instant>,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start_at(&mut self, now: Instant) {
        if self.last_tick.is_none() {
            self.last_tick = Some(now);
        }
    }

    pub fn poll_at(&mut self, now: Instant) -> Option<u64> {
        let last = self.last_tick?;
        let elapsed = now.saturating_duration_since(last);
        if elapsed < self.interval {
            return None;
        }

        // Carry the sub-millisecond remainder into the next tick
        let elapsed_ms = elapsed.as_millis() as u64;
        self.last_tick = Some(last + Duration::from_millis(elapsed_ms));
        Some(elapsed_ms)
    }

    pub fn until_next_at(&self, now: Instant) -> Option<Duration> {
        let due = self.last_tick? + self.interval;
        Some(due.saturating_duration_since(now))
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl TickSource for IntervalTimer {
    fn start(&mut self) {
        self.start_at(Instant::now());
    }

    fn stop(&mut self) {
        self.last_tick = None;
    }

    fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    fn poll(&mut self) -> Option<u64> {
        self.poll_at(Instant::now())
    }

    fn until_next(&self) -> Option<Duration> {
        self.until_next_at(Instant::now())
    }
}
