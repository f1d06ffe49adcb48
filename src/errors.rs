use thiserror::Error;

use crate::core::validation::FieldErrors;

/// Error type shared by the state, storage and configuration layers.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),
    #[error("Sign in first to open this view")]
    NotAuthenticated,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<FieldErrors> for TrackerError {
    fn from(errors: FieldErrors) -> Self {
        TrackerError::Validation(errors)
    }
}
