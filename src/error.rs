//! Error types for kurma-nav.

use thiserror::Error;

/// Crate error type.
#[derive(Error, Debug)]
pub enum KurmaError {
    /// Rejected configuration (degenerate canvas, unknown mode string, ...).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Rejected numeric input (NaN or infinite distance/angle/coordinate).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Image export or config file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for KurmaError {
    fn from(e: toml::de::Error) -> Self {
        KurmaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KurmaError>;
