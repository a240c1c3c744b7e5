//! Error types for the gradebook engine
//!
//! Grade calculations never fail: partial data resolves to N/A. Errors only
//! come from decoding record snapshots and from strict lookups.

use thiserror::Error;

/// Main error type for the gradebook engine
#[derive(Error, Debug)]
pub enum GradebookError {
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Unknown letter grade: {0}")]
    UnknownLetter(String),
}

impl From<serde_json::Error> for GradebookError {
    fn from(err: serde_json::Error) -> Self {
        GradebookError::Deserialization(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<GradebookError> for pyo3::PyErr {
    fn from(err: GradebookError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyValueError};

        match err {
            GradebookError::Deserialization(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
            GradebookError::InvalidRecord(msg) => {
                PyValueError::new_err(format!("Invalid record: {}", msg))
            }
            GradebookError::UnknownLetter(letter) => {
                PyKeyError::new_err(format!("Unknown letter grade: {}", letter))
            }
        }
    }
}

/// Result type alias for the gradebook engine
pub type Result<T> = std::result::Result<T, GradebookError>;
