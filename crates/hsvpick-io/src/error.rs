//! I/O error types
//!
//! Provides a unified error type for all image input operations. Each
//! format-specific module maps its underlying library errors into
//! `IoError` variants so that callers only need to handle one error type.
//!
//! Unreadable or absent input media is fatal to the tool - there is
//! nothing to pick colors from - so these errors propagate to the caller
//! instead of being swallowed.

use thiserror::Error;

/// Error type for image input operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] hsvpick_core::Error),

    /// The frame source has no more frames to deliver
    #[error("no more frames")]
    EndOfStream,
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
