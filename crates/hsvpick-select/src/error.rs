//! Error types for hsvpick-select

use thiserror::Error;

/// Errors that can occur during selection operations
#[derive(Debug, Error)]
pub enum SelectError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] hsvpick_core::Error),

    /// Console input had the wrong number of integer tokens
    #[error("malformed console input: expected {expected} integer(s), got {got}")]
    WrongTokenCount { expected: usize, got: usize },

    /// Console input token was not an integer
    #[error("malformed console input: {0:?} is not an integer")]
    InvalidNumber(String),
}

/// Result type for selection operations
pub type SelectResult<T> = Result<T, SelectError>;
