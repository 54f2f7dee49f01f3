//! Error types for configuration generation and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem errors that abort the build
    #[error("alias directory cannot be read: {}", path.display())]
    AliasDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("package manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("invalid package manifest {}: {message}", path.display())]
    InvalidManifest { path: PathBuf, message: String },

    // Settings loading errors
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("invalid config value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    // Schema validation errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
