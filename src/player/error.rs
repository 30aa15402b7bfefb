//! Playback errors.

use std::io;

use crate::config::ConfigError;
use crate::subtitle::SubtitleError;

/// Errors returned by [`PlaybackSession`](super::PlaybackSession) operations.
///
/// These signal misuse by the caller: the presentation layer is expected to
/// check [`has_subtitles`](super::PlaybackSession::has_subtitles) before
/// offering playback controls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("No subtitles loaded")]
    NoSubtitles,
}

/// Errors that end a terminal playback run.
#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error(transparent)]
    Subtitles(#[from] SubtitleError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("Failed to install Ctrl-C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}
