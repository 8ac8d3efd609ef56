use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Conditions raised by the simulation core.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    /// The snake covers every cell, so there is nowhere to put food.
    #[error("no free cell left on a {width}x{height} board")]
    BoardFull { width: u16, height: u16 },
}

/// Invalid startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidGrid { width: u16, height: u16 },

    #[error("initial length {length} must be between 1 and {max}")]
    InvalidInitialLength { length: usize, max: usize },

    #[error("tick interval must be greater than zero")]
    NonPositiveInterval,

    #[error("unknown difficulty {0:?}")]
    UnknownDifficulty(String),

    #[error("failed to read settings from {path}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed settings in {path}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
