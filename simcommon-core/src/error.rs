//! Error types for simcommon

use thiserror::Error;

/// Main error type for simcommon operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Plugin error: {0}")]
    Plugin(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for simcommon operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Error::Decode(e.to_string())
    }
}
