//! grayfilt-core - The single-channel image container
//!
//! `GrayImage` is the fundamental image type shared by every grayfilt
//! crate: an 8-bit intensity grid with an explicit row stride. Color
//! decoding (grayfilt-color) produces it, the statistical filters
//! (grayfilt-filter) mutate it in place, and the codecs (grayfilt-io)
//! read and write it.
//!
//! # Pixel layout
//!
//! - One byte per pixel, row-major
//! - Rows are `stride` bytes apart; `stride >= width`, so a row may carry
//!   trailing bytes that are not part of the visible image
//! - Zero-area images (width or height of 0) are legal and behave as
//!   no-ops throughout the library

mod error;

pub use error::{Error, Result};

/// Intensity of every synthetic pixel outside the image extent.
///
/// The filters treat all four borders as this value, and conversions use
/// it as the "blank" intensity.
pub const WHITE: u8 = 255;

/// 8-bit single-channel image with explicit row stride.
///
/// # Examples
///
/// ```
/// use grayfilt_core::GrayImage;
///
/// let img = GrayImage::new(640, 480);
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.stride(), 640);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Bytes per row (>= width)
    stride: usize,
    /// Backing buffer, `stride * height` bytes
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a new image filled with black (0), with `stride == width`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create a new image filled with `value`, with `stride == width`.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        let stride = width as usize;
        GrayImage {
            width,
            height,
            stride,
            data: vec![value; stride * height as usize],
        }
    }

    /// Create a new all-white image, with `stride == width`.
    pub fn white(width: u32, height: u32) -> Self {
        Self::filled(width, height, WHITE)
    }

    /// Build an image over an existing buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadStride`] if `stride < width`, or
    /// [`Error::ShortBuffer`] if `data` holds fewer than
    /// `stride * height` bytes.
    pub fn from_raw(width: u32, height: u32, stride: usize, data: Vec<u8>) -> Result<Self> {
        if stride < width as usize {
            return Err(Error::BadStride { stride, width });
        }
        let needed = stride * height as usize;
        if data.len() < needed {
            return Err(Error::ShortBuffer {
                len: data.len(),
                needed,
            });
        }
        Ok(GrayImage {
            width,
            height,
            stride,
            data,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the row stride in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get the pixel count of the visible image.
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check whether the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Get the backing buffer, stride padding included.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the backing buffer mutably, stride padding included.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return the backing buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Get the visible part of row `y` (`width` bytes, padding excluded).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {} out of bounds ({})", y, self.height);
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize]
    }

    /// Get the visible part of row `y` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.height, "row {} out of bounds ({})", y, self.height);
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.width as usize]
    }

    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.stride + x as usize])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowOutOfBounds`] if the coordinates are out of
    /// bounds.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::RowOutOfBounds {
                row: y,
                height: self.height,
            });
        }
        self.data[y as usize * self.stride + x as usize] = value;
        Ok(())
    }

    /// Fill every visible pixel with `value`, leaving stride padding alone.
    pub fn fill(&mut self, value: u8) {
        let width = self.width as usize;
        for y in 0..self.height {
            let start = y as usize * self.stride;
            self.data[start..start + width].fill(value);
        }
    }
}
