//! Grayfilt - Grayscale image filtering for Rust
//!
//! Converts color images to 8-bit grayscale and smooths them with
//! windowed rank filters.
//!
//! # Overview
//!
//! The library is split into focused crates, re-exported here:
//!
//! - Grayscale conversion from RGB, RGBA, CMYK, indexed and gray
//!   layouts, plus binary thresholding
//! - Median and average filters over square sliding windows of any size
//! - Image I/O (PNG, JPEG, GIF) with format detection
//!
//! # Example
//!
//! ```
//! use grayfilt::GrayImage;
//! use grayfilt::filter::median_filter;
//!
//! // Create a mid-gray image and smooth it with a 3x3 median window
//! let mut img = GrayImage::filled(64, 48, 128);
//! median_filter(&mut img, 3);
//! assert_eq!(img.width(), 64);
//! assert_eq!(img.height(), 48);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use grayfilt_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use grayfilt_color as color;
pub use grayfilt_filter as filter;
pub use grayfilt_io as io;
