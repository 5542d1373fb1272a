//! Error types for arena data loading.

use thiserror::Error;

/// Errors that can occur when loading the arena definition.
#[derive(Debug, Error)]
pub enum MapLoadError {
    /// File could not be read.
    #[error("Failed to read map file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {source}")]
    Parse {
        path: String,
        source: ron::error::SpannedError,
    },

    /// The map data is unusable.
    #[error("Invalid map '{path}': {details}")]
    Invalid { path: String, details: String },
}
