//! Error types for level loading.

use thiserror::Error;

use crate::data::DataLoadError;

/// Errors that can occur when loading or resolving a level.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error(transparent)]
    Load(#[from] DataLoadError),

    /// Grid character with no palette entry.
    #[error("Unknown palette entry '{character}' at ({x}, {y}) in level '{level}'")]
    UnknownPaletteEntry {
        level: String,
        character: char,
        x: usize,
        y: usize,
    },

    /// Monster placement naming something the catalog does not know.
    #[error("Unknown monster '{name}' at ({x}, {y}) in level '{level}'")]
    UnknownMonster {
        level: String,
        name: String,
        x: usize,
        y: usize,
    },

    #[error("Level '{0}' has no player placement")]
    MissingPlayer(String),

    #[error("Level '{0}' not found")]
    UnknownLevel(String),
}
