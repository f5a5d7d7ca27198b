// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use crate::models::Version;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Parse error in {source_path}: {message}")]
    Parse {
        source_path: String,
        message: String,
    },

    #[error("Duplicate version {version} in {source_path} (already provided by {existing_path})")]
    DuplicateVersion {
        version: Version,
        source_path: String,
        existing_path: String,
    },

    #[error("No document found for version {0}")]
    NotFound(Version),

    #[error("Invalid version string: {0:?}")]
    InvalidVersion(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RegistryError {
    pub fn parse(source_path: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            source_path: source_path.to_string(),
            message: message.into(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateVersion { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
