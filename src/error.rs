//! Error types for treeselect
//!
//! Only loading and parsing can fail. Engine operations never return errors;
//! they report a [`Diagnostic`](crate::diagnostics::Diagnostic) and carry on.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treeselect operations
pub type TreeSelectResult<T> = Result<T, TreeSelectError>;

/// Main error type for treeselect operations
#[derive(Error, Debug)]
pub enum TreeSelectError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config file extension is neither `.toml` nor `.json`
    #[error("unsupported config format for {file} - expected .toml or .json")]
    UnsupportedFormat { file: PathBuf },

    /// Container id missing from a config that must be initialized
    #[error("config in {file} has no container_id")]
    MissingContainerId { file: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
