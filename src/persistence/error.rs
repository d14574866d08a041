//! Error types for save files.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to access save file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode save data: {0}")]
    Encode(#[from] ron::Error),

    #[error("Corrupt save file '{path}': {details}")]
    Parse { path: String, details: String },
}
