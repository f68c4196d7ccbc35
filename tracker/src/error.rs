//! Tracker-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Validation failed: {0}")]
    Validation(#[from] SharedError),

    #[error("Persistence failed for '{key}': {message}")]
    Persistence { key: String, message: String },

    #[error("Configuration error: {field}")]
    Configuration { field: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    pub fn persistence(key: &str, message: impl Into<String>) -> Self {
        Self::Persistence {
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub fn config(field: impl Into<String>) -> Self {
        Self::Configuration { field: field.into() }
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
