//! Editor configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[derive(Deserialize)]` generates the code that turns TOML into these
//! structs. `#[serde(default)]` fills missing fields from `Default`, so a
//! config file only needs the keys the user wants to change.
//!
//! The config is read once at startup and never written back: appearance
//! changes made in a session are not persisted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor behavior settings
    pub editor: EditorConfig,

    /// UI appearance settings
    pub ui: UiConfig,

    /// File handling settings
    pub files: FileConfig,
}

impl Config {
    /// Loads config from the default location.
    ///
    /// A missing file gives defaults. A malformed one is logged and also
    /// gives defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring config: {}", err);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses config from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads from the default config path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("textlite").join("config.toml"))
    }
}

/// Editor behavior configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Undo history limit, in steps
    pub undo_limit: usize,

    /// Wrap long lines at word boundaries
    pub word_wrap: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_limit: 1000,
            word_wrap: true,
        }
    }
}

/// UI appearance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Font family
    pub font_family: String,

    /// Font size in points; also the 100% zoom reference
    pub font_size: u16,

    /// Text color in light mode, as a name or `#RRGGBB`
    pub font_color: String,

    /// Start in dark mode
    pub dark_mode: bool,

    /// Initial window width
    pub window_width: f32,

    /// Initial window height
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_family: "Consolas".to_string(),
            font_size: 11,
            font_color: "black".to_string(),
            dark_mode: false,
            window_width: 800.0,
            window_height: 600.0,
        }
    }
}

/// File handling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Extension added to saved files that have none
    pub default_extension: String,

    /// Readme shown by Help → Readme, relative to the working directory
    pub readme_path: PathBuf,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            default_extension: "txt".to_string(),
            readme_path: PathBuf::from("Readme.txt"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no per-user config directory on this platform")]
    NoConfigDir,

    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
