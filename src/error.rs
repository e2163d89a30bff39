//! Error types for loading, configuring and translating germicules

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GermiculeError>;

#[derive(Error, Debug)]
pub enum GermiculeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// No strategy exists for the requested back-end name.
    #[error("Unsupported backend: {name} (expected one of: echart, d3)")]
    UnsupportedBackend { name: String },

    #[error("Invalid theme: {message}")]
    InvalidTheme { message: String },
}
