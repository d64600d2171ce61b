//! Error types for the iris prediction workspace.

use thiserror::Error;

/// Main error type for the iris prediction crates.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Model artifact is missing, malformed, or unusable
    #[error("Model error: {0}")]
    Model(String),

    /// Classifier failed while producing predictions
    #[error("Inference error: {0}")]
    Inference(String),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Specialized Result type for iris prediction operations.
pub type Result<T> = std::result::Result<T, Error>;
