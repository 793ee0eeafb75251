//! Error types for branding-check
//!
//! Validation findings are never errors: they end up in an
//! [`EnvironmentReport`](crate::application::EnvironmentReport). These types
//! cover the conditions that abort the whole run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for branding-check operations
pub type BrandingResult<T> = Result<T, BrandingError>;

/// Fatal error raised while checking a repository
#[derive(Error, Debug)]
pub enum BrandingError {
    /// IO error other than "not found" while probing the repository
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Environment variable carries a value we cannot interpret
    #[error("invalid value '{value}' for {var}, expected one of: {expected}")]
    InvalidEnvVar {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl BrandingError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BrandingError::Io {
            path: path.into(),
            source,
        }
    }
}
