//! Error types for data loading and catalog validation.

use thiserror::Error;

/// Errors that can occur when reading a RON data file.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}

/// Catalog problems. These are fatal at startup: the simulation assumes every
/// key it is handed resolves.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Unknown weapon index {0}")]
    UnknownWeapon(usize),

    #[error("Unknown spell index {0}")]
    UnknownSpell(usize),

    #[error("Unknown monster '{0}'")]
    UnknownMonster(String),

    #[error("The {0} catalog is empty")]
    EmptyCatalog(&'static str),

    #[error("Animation '{kind}/{status}' has no frames")]
    EmptyAnimation { kind: String, status: String },

    #[error("Monster '{name}': {details}")]
    InvalidMonster { name: String, details: String },
}
