//! Error types for the ranking store.

use thiserror::Error;

/// Errors from the persistence gateway. All of them are non-fatal to
/// gameplay: the caller logs and moves on.
#[derive(Debug, Error)]
pub enum RankingError {
    /// Store file could not be read or written.
    #[error("Failed to access ranking store '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// RON parsing failed.
    #[error("Parse error in ranking store '{path}': {source}")]
    Parse {
        path: String,
        source: ron::error::SpannedError,
    },

    /// RON serialization failed.
    #[error("Failed to serialize ranking store: {0}")]
    Serialize(#[from] ron::Error),

    /// A user with this name already exists in the store.
    #[error("User '{0}' already exists in the ranking store")]
    DuplicateUser(String),
}

/// Rejections when registering a new user. Surfaced to the player as a
/// blocking message; nothing is mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserCreateError {
    #[error("A user name cannot be empty")]
    EmptyName,

    #[error("User '{0}' already exists")]
    Duplicate(String),
}
