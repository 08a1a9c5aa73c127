//! Error types for grayfilt-core
//!
//! Provides a unified error type for constructing and accessing image
//! buffers. Each variant captures the offending values for diagnostics.

use thiserror::Error;

/// grayfilt-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Row stride is smaller than the image width
    #[error("stride {stride} is smaller than width {width}")]
    BadStride { stride: usize, width: u32 },

    /// Backing buffer is too short for the described geometry
    #[error("buffer of {len} bytes is too short: need at least {needed}")]
    ShortBuffer { len: usize, needed: usize },

    /// Row index out of bounds
    #[error("row index out of bounds: {row} >= {height}")]
    RowOutOfBounds { row: u32, height: u32 },
}

/// Result type alias for grayfilt-core operations
pub type Result<T> = std::result::Result<T, Error>;
