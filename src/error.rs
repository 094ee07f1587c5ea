//! Error handling

use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid settings: {0}")]
    Settings(#[from] validator::ValidationErrors),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("preference store error: {0}")]
    Preference(String),
}

impl AppError {
    /// Build a clipboard error
    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Build a preference store error
    pub fn preference<T: Into<String>>(msg: T) -> Self {
        Self::Preference(msg.into())
    }
}

/// Application Result type
pub type Result<T> = std::result::Result<T, AppError>;
