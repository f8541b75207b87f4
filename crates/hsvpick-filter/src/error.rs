//! Error types for hsvpick-filter

use thiserror::Error;

/// Errors that can occur during filtering and rendering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] hsvpick_core::Error),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
