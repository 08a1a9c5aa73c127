//! Error types for grayfilt-color

use thiserror::Error;

/// Errors that can occur while converting color sources to grayscale
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] grayfilt_core::Error),

    /// Row stride is too small for the layout's pixel size
    #[error("stride {stride} too small: row needs {needed} bytes")]
    BadStride { stride: usize, needed: usize },

    /// Source buffer is too short for the described geometry
    #[error("buffer of {len} bytes is too short: need at least {needed}")]
    ShortBuffer { len: usize, needed: usize },

    /// Indexed image carries no palette
    #[error("indexed image has no palette")]
    MissingPalette,

    /// Pixel refers to a palette entry that does not exist
    #[error("palette index out of range: {index} >= {len}")]
    BadPaletteIndex { index: usize, len: usize },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
