//! subplay - synchronized subtitle playback
//!
//! The core is a single-threaded playback engine: a tick-driven
//! [`PlaybackClock`] over an ordered [`SubtitleIndex`], wrapped by a
//! [`PlaybackSession`] that notifies registered listeners of every change.
//! A terminal front end lives in [`player`], the SubRip reader in
//! [`subtitle::srt`] and settings persistence in [`config`].

pub mod cli;
pub mod config;
pub mod player;
pub mod settings;
pub mod subtitle;
pub mod time;

pub use config::{Config, ConfigError, ConfigSettingsStore};
pub use player::{
    PlaybackClock, PlaybackSession, PlayerError, PlayerEvent, PlayerListener, TickSource,
};
pub use settings::{FontStyle, Settings, SettingsStore};
pub use subtitle::{SubtitleEntry, SubtitleError, SubtitleIndex};
