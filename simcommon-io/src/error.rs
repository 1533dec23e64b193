//! Error types for scene import

use thiserror::Error;

/// Errors that can occur while importing scene files
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Import error: {0}")]
    Import(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Scene has no root node: {0}")]
    MissingRoot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scene import operations
pub type Result<T> = std::result::Result<T, LoaderError>;
