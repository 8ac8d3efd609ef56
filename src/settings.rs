use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{Difficulty, GameConfig, GridSize};
use crate::error::ConfigError;

const APP_DIR_NAME: &str = "classic-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Optional startup overrides, read from JSON or built from CLI flags.
///
/// Every field is optional; unset fields fall back to the built-in defaults.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub initial_length: Option<usize>,
    pub difficulty: Option<Difficulty>,
}

impl Settings {
    /// Layers `overrides` on top of `self`, keeping values `overrides` leaves
    /// unset.
    #[must_use]
    pub fn merged_with(self, overrides: Self) -> Self {
        Self {
            width: overrides.width.or(self.width),
            height: overrides.height.or(self.height),
            initial_length: overrides.initial_length.or(self.initial_length),
            difficulty: overrides.difficulty.or(self.difficulty),
        }
    }

    /// Builds and validates the game layout described by these settings.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let defaults = GameConfig::default();
        let config = GameConfig {
            grid: GridSize {
                width: self.width.unwrap_or(defaults.grid.width),
                height: self.height.unwrap_or(defaults.grid.height),
            },
            initial_length: self.initial_length.unwrap_or(defaults.initial_length),
            ..defaults
        };

        config.validate()?;
        Ok(config)
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from `path`.
///
/// Returns defaults when the file does not exist. Returns `Err` when the
/// file exists but cannot be read or parsed, so the caller can report it
/// before entering raw terminal mode.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(ConfigError::SettingsIo {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| ConfigError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}
