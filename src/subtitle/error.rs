//! Subtitle loading errors.

use std::path::PathBuf;

/// Errors that can occur while building a subtitle index.
#[derive(Debug, thiserror::Error)]
pub enum SubtitleError {
    #[error("Subtitle list is empty")]
    Empty,

    #[error("Subtitle {id} ends before it starts ({start_ms}ms --> {end_ms}ms)")]
    InvalidRange { id: u32, start_ms: u64, end_ms: u64 },

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failure on input that has no path (`parse_reader`, `parse_str`)
    #[error("Failed to read subtitle input: {0}")]
    Read(#[from] std::io::Error),
}

impl SubtitleError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
