//! Subtitle entries and the time-ordered index used during playback.
//!
//! An index is built once from a parsed entry sequence and never changes
//! afterwards. Loading a different file means building a new index.
//!
//! - [`srt`] - SubRip (`.srt`) reader producing a [`SubtitleIndex`]

mod error;
pub mod srt;

pub use error::SubtitleError;

/// A single time-ranged subtitle.
///
/// The range is half-open: the entry is visible from `start_ms` up to,
/// but not including, `end_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    id: u32,
    start_ms: u64,
    end_ms: u64,
    text: String,
}

impl SubtitleEntry {
    pub fn new(id: u32, start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            start_ms,
            end_ms,
            text: text.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> u64 {
        self.end_ms
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this entry is visible at `elapsed_ms`.
    pub fn covers(&self, elapsed_ms: u64) -> bool {
        self.start_ms <= elapsed_ms && elapsed_ms < self.end_ms
    }
}

/// Chronologically ordered, immutable list of subtitles.
///
/// Entries are expected to be sorted by start time and non-overlapping.
/// That ordering is the caller's responsibility and is not checked here;
/// only emptiness and per-entry ranges are validated.
#[derive(Debug, Clone)]
pub struct SubtitleIndex {
    entries: Vec<SubtitleEntry>,
    total_ms: u64,
}

impl SubtitleIndex {
    /// Build an index from entries in source order.
    ///
    /// # Errors
    /// - [`SubtitleError::Empty`] when `entries` is empty
    /// - [`SubtitleError::InvalidRange`] when an entry does not end after it starts
    pub fn new(entries: Vec<SubtitleEntry>) -> Result<Self, SubtitleError> {
        if let Some(bad) = entries.iter().find(|e| e.end_ms <= e.start_ms) {
            return Err(SubtitleError::InvalidRange {
                id: bad.id,
                start_ms: bad.start_ms,
                end_ms: bad.end_ms,
            });
        }

        let total_ms = entries.last().ok_or(SubtitleError::Empty)?.end_ms;
        Ok(Self { entries, total_ms })
    }

    /// First entry visible at `elapsed_ms`, or `None` in a gap or past the end.
    pub fn find_active(&self, elapsed_ms: u64) -> Option<&SubtitleEntry> {
        self.position_at(elapsed_ms).map(|idx| &self.entries[idx])
    }

    /// Position of the first entry visible at `elapsed_ms`.
    pub fn position_at(&self, elapsed_ms: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.covers(elapsed_ms))
    }

    /// End time of the last entry.
    pub fn total_duration(&self) -> u64 {
        self.total_ms
    }

    pub fn get(&self, idx: usize) -> Option<&SubtitleEntry> {
        self.entries.get(idx)
    }

    pub fn entries(&self) -> &[SubtitleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed index.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
