//! Subtitle playback engine and terminal player
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `timer`: Tick sources (`TickSource`, `IntervalTimer`)
//! - `clock`: Playback position driven by ticks (`PlaybackClock`)
//! - `listeners`: Reentrancy-safe observer registry
//! - `session`: The facade tying clock, subtitles, settings and listeners together
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: UI rendering (subtitle area, progress bar, status bar)
//! - `native`: Terminal event loops
//!
//! # Usage
//!
//! ```no_run
//! use subplay::player::{play_session, PlayOptions, PlaybackResult};
//! use std::path::Path;
//!
//! match play_session(Path::new("movie.srt"), &PlayOptions::default()) {
//!     Ok(PlaybackResult::Finished) => println!("Finished"),
//!     Ok(_) => println!("Stopped by user"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

pub mod clock;
mod error;
pub mod input;
pub mod listeners;
mod native;
pub mod render;
pub mod session;
pub mod timer;

pub use clock::{ClockTick, PlaybackClock};
pub use error::{PlaybackError, PlayerError};
pub use input::InputResult;
pub use listeners::{ListenerId, ListenerRegistry};
pub use native::{play_session, PlayOptions, PlaybackResult};
pub use session::{PlaybackSession, PlayerEvent, PlayerListener};
pub use timer::{IntervalTimer, TickSource, DEFAULT_TICK_INTERVAL};
