//! Error handling for the name age estimator.
//!
//! The estimation core never fails: empty or partial data produces empty or
//! zero-valued results. Errors only arise at the edges, when datasets are read
//! from disk or configuration is assembled.

use std::io;
use std::path::{Path, PathBuf};

/// Specialized error type for dataset loading and configuration
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    /// Error opening or reading a dataset file
    #[error("IO error for {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Dataset content is not valid JSON or has the wrong top-level shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset content parsed but does not match the expected layout
    #[error("Dataset format error: {0}")]
    Format(String),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The worker pool for batch profiling could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A gender label could not be recognised
    #[error("Unknown gender: {0}")]
    UnknownGender(String),
}

impl EstimatorError {
    /// Create an IO error carrying the offending path
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a dataset format error
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;
