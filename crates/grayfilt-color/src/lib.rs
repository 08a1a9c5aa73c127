//! grayfilt-color - Color-to-grayscale conversion
//!
//! This crate normalizes color sources into the single-channel
//! [`GrayImage`](grayfilt_core::GrayImage) the rest of the library
//! operates on:
//!
//! - [`ColorImage`] / [`PixelLayout`]: raw decoded samples plus their
//!   packing, converted with [`ColorImage::to_gray`]
//! - [`luma`] / [`cmyk_to_gray`]: the integer conversion primitives
//! - [`to_monochrome`]: fixed-threshold binarization

mod convert;
mod error;
mod threshold;

pub use convert::{ColorImage, PixelLayout, cmyk_to_gray, luma};
pub use error::{ColorError, ColorResult};
pub use threshold::to_monochrome;
