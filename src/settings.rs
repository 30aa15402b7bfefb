//! Display settings for the subtitle overlay.
//!
//! `Settings` is a plain value. A session replaces it wholesale on every
//! change, so a listener holding an earlier `Rc<Settings>` keeps seeing the
//! values it was given.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Largest opacity value (fully opaque background).
pub const MAX_OPACITY: u8 = u8::MAX;

/// Font style of the subtitle text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }

    /// Same style with bold switched on or off.
    pub fn toggle_bold(self) -> Self {
        match self {
            Self::Plain => Self::Bold,
            Self::Bold => Self::Plain,
            Self::Italic => Self::BoldItalic,
            Self::BoldItalic => Self::Italic,
        }
    }
}

/// Presentation settings of the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub font_name: String,
    pub font_style: FontStyle,
    pub font_size: u32,
    /// Background alpha, 0 (transparent) to 255 (opaque)
    pub opacity: u8,
    /// Folder the last subtitle file was opened from
    pub last_open_folder: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_name: "Arial".to_string(),
            font_style: FontStyle::Plain,
            font_size: 24,
            opacity: 0,
            last_open_folder: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Copy of these settings with a different opacity.
    pub fn with_opacity(&self, opacity: u8) -> Self {
        Self {
            opacity,
            ..self.clone()
        }
    }

    /// Copy of these settings with a different font style.
    pub fn with_font_style(&self, font_style: FontStyle) -> Self {
        Self {
            font_style,
            ..self.clone()
        }
    }

    /// Copy of these settings with a different last-open folder.
    pub fn with_last_open_folder(&self, folder: impl Into<PathBuf>) -> Self {
        Self {
            last_open_folder: folder.into(),
            ..self.clone()
        }
    }
}

/// Loads and persists [`Settings`].
///
/// Both operations are fire-and-forget: implementations log failures and
/// fall back to defaults instead of returning errors.
pub trait SettingsStore {
    /// Load stored settings, or defaults when none are available.
    fn load(&self) -> Settings;

    /// Persist `settings`.
    fn save(&self, settings: &Settings);
}
