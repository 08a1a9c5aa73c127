//! I/O error types
//!
//! Provides a unified error type for all image I/O operations. Each
//! format-specific module maps its underlying library errors into
//! `IoError` variants so that callers only need to handle one type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format-specific encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Zero-area images cannot be encoded
    #[error("cannot encode a zero-area image")]
    EmptyImage,

    /// A grayscale-conversion error from grayfilt-color
    #[error("color error: {0}")]
    Color(#[from] grayfilt_color::ColorError),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
