//! Error types for the fitcalc_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitcalc_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout code outside the supported set
    #[error("Unknown workout type: {0:?} (expected one of RUN, WLK, SWM)")]
    UnknownWorkoutType(String),

    /// Parameter list does not fit the workout's fields
    #[error("Invalid parameters for workout type {code:?}: {reason}")]
    InvalidParameters { code: String, reason: String },

    /// Some packages of a batch could not be processed
    #[error("{failed} of {total} packages failed")]
    BatchFailed { failed: usize, total: usize },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Workout code the error refers to, if any
    pub fn workout_code(&self) -> Option<&str> {
        match self {
            Error::UnknownWorkoutType(code) => Some(code),
            Error::InvalidParameters { code, .. } => Some(code),
            _ => None,
        }
    }
}
