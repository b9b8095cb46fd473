use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in pwdmanager.
#[derive(Debug, Error)]
pub enum PwdManagerError {
    // --- Store errors ---
    #[error("Invalid keyword '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("No password has been saved with the keyword '{0}'")]
    NotFound(String),

    #[error("Password database is corrupt: {0}")]
    Corrupt(String),

    #[error("Password database at {path} is unavailable: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Generator errors ---
    #[error("Password length must be a whole number between {min} and {max}, got {got}")]
    InvalidLength { got: usize, min: usize, max: usize },

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Prompt failed: {0}")]
    PromptFailed(String),
}

impl PwdManagerError {
    /// Wrap an I/O error raised while touching the database file.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_key(key: &str, reason: &str) -> Self {
        Self::InvalidKey {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience type alias for pwdmanager results.
pub type Result<T> = std::result::Result<T, PwdManagerError>;
