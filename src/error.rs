//! Startup error types
//!
//! Everything here is fatal: levels and assets are loaded once before the
//! first frame, and the per-frame update cannot fail.

use std::path::PathBuf;

use thiserror::Error;

/// A level file could not be turned into a tile map
#[derive(Debug, Error)]
pub enum LevelLoadError {
    #[error("failed to read level {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("level has no rows")]
    Empty,
    #[error("level row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A non-level resource the game needs at startup is missing
#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("missing asset: {0}")]
    Missing(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Level(#[from] LevelLoadError),
    #[error(transparent)]
    Asset(#[from] AssetLoadError),
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("failed to read settings {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Surface, adapter or device creation failed
    #[error("graphics unavailable: {0}")]
    Graphics(String),
}
