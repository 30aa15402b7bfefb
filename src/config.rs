//! Configuration file handling
//!
//! The config file is TOML, located at `$SUBPLAY_CONFIG` or
//! `<config dir>/subplay/config.toml`:
//!
//! ```toml
//! [playback]
//! tick_interval_ms = 40
//! seek_step_ms = 5000
//!
//! [display]
//! font_name = "Arial"
//! font_style = "plain"
//! font_size = 24
//! opacity = 0
//! last_open_folder = "."
//! ```
//!
//! The `[display]` table is the persisted [`Settings`] value.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item, Table};
use tracing::{info, warn};

use crate::player::timer::DEFAULT_TICK_INTERVAL;
use crate::settings::{Settings, SettingsStore};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SUBPLAY_CONFIG";

/// Table holding the persisted display settings.
const DISPLAY_TABLE: &str = "display";

/// Errors that can occur while reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Playback tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Nominal timer interval in milliseconds
    pub tick_interval_ms: u64,
    /// Distance of a single seek step in the interactive player
    pub seek_step_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            seek_step_ms: 5000,
        }
    }
}

/// Complete contents of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub display: Settings,
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("subplay").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config from its default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the config from `path`, returning defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Save the config to its default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save the config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        write_file(path, &content)
    }

    /// Nominal tick interval, never zero.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.playback.tick_interval_ms.max(1))
    }
}

/// [`SettingsStore`] backed by the `[display]` table of the config file.
#[derive(Debug, Clone)]
pub struct ConfigSettingsStore {
    path: PathBuf,
}

impl ConfigSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store using the default config location.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        Config::config_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite only the `[display]` table, keeping the rest of the file as is.
    fn write_display(&self, settings: &Settings) -> Result<(), ConfigError> {
        let existing = if self.path.exists() {
            fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
                path: self.path.clone(),
                source,
            })?
        } else {
            String::new()
        };

        let invalid = |message: String| ConfigError::Invalid {
            path: self.path.clone(),
            message,
        };

        let mut doc: DocumentMut = existing.parse().map_err(|e| invalid(format!("{e}")))?;
        let rendered: DocumentMut = toml::to_string(settings)?
            .parse()
            .map_err(|e| invalid(format!("{e}")))?;

        if !doc.contains_key(DISPLAY_TABLE) {
            doc.insert(DISPLAY_TABLE, Item::Table(Table::new()));
        }
        let table = doc[DISPLAY_TABLE]
            .as_table_mut()
            .ok_or_else(|| invalid(format!("[{DISPLAY_TABLE}] must be a table")))?;

        for (key, item) in rendered.as_table().iter() {
            table.insert(key, item.clone());
        }

        write_file(&self.path, &doc.to_string())
    }
}

impl SettingsStore for ConfigSettingsStore {
    fn load(&self) -> Settings {
        match Config::load_from(&self.path) {
            Ok(config) => {
                info!("Loaded settings from config file: {}", self.path.display());
                config.display
            }
            Err(e) => {
                info!(
                    "Could not read settings from config file: {} ({}). Using default settings",
                    self.path.display(),
                    e
                );
                Settings::default()
            }
        }
    }

    fn save(&self, settings: &Settings) {
        match self.write_display(settings) {
            Ok(()) => info!("Saved settings to config file: {}", self.path.display()),
            // Runs on shutdown; nothing to do but report it.
            Err(e) => warn!("Could not save settings: {}", e),
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FontStyle;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("none.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.playback.tick_interval_ms, 40);
        assert_eq!(config.tick_interval(), Duration::from_millis(40));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.playback.seek_step_ms = 1000;
        config.display.font_size = 30;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[playback\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn zero_interval_is_raised_to_one_millisecond() {
        let mut config = Config::default();
        config.playback.tick_interval_ms = 0;
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn store_load_falls_back_to_defaults_on_bad_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "display = 12").unwrap();

        let store = ConfigSettingsStore::new(&path);
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn store_save_keeps_other_sections_and_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "# my tweaks\n[playback]\ntick_interval_ms = 20 # faster\n\n[display]\nfont_size = 12\n",
        )
        .unwrap();

        let store = ConfigSettingsStore::new(&path);
        let settings = Settings {
            font_style: FontStyle::Italic,
            opacity: 128,
            ..Settings::default()
        };
        store.save(&settings);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# my tweaks"));
        assert!(written.contains("tick_interval_ms = 20 # faster"));

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.playback.tick_interval_ms, 20);
        assert_eq!(config.display, settings);
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn store_save_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let store = ConfigSettingsStore::new(&path);
        store.save(&Settings::default().with_opacity(7));

        assert_eq!(store.load().opacity, 7);
    }

    #[test]
    fn store_save_failure_is_swallowed() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the write fail.
        let store = ConfigSettingsStore::new(dir.path());
        store.save(&Settings::default());
    }
}
