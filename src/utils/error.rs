use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Could not list input directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse {path} as an HTML document: {reason}")]
    DocumentParse { path: PathBuf, reason: String },

    #[error("No known page layout matched for '{city}'")]
    UnsupportedStructure { city: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl EtlError {
    /// Per-file failures are skipped with a log line; everything else
    /// aborts the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            EtlError::DocumentParse { .. } | EtlError::UnsupportedStructure { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
