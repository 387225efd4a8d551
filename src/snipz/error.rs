use crate::keys::KeyValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("Invalid snippet key '{key}': {reason}")]
    InvalidKey {
        key: String,
        reason: KeyValidationError,
    },

    #[error("Snippet already exists: {0}")]
    DuplicateKey(String),

    #[error("Position {index} is out of range (have {len} snippets)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Snippet not found: {0}")]
    NotFound(String),

    #[error("Failed to save snippets: {0}")]
    Persistence(String),

    #[error("Snippet repository is closed")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SnipzError>;
