//! Color-to-grayscale conversion
//!
//! A [`ColorImage`] pairs a raw sample buffer with a [`PixelLayout`]
//! describing how the samples are packed. [`ColorImage::to_gray`]
//! dispatches on the layout exactly once per image and runs a pure
//! per-pixel extraction rule over the rows.
//!
//! Conversion rules:
//! - **Gray8**: byte copy
//! - **Gray16 / Alpha16 / Rgba16**: big-endian samples, most significant
//!   byte taken
//! - **Rgb8 / Rgba8 / Rgba16 / Indexed8**: integer Rec.709 luminance
//!   (alpha ignored)
//! - **Alpha8 / Alpha16**: inverted coverage, `255 - alpha`
//! - **Cmyk8**: composite to RGB, then integer Rec.601 luminance

use crate::{ColorError, ColorResult};
use grayfilt_core::GrayImage;

/// Integer Rec.709 luminance weights, scaled by 8192 (sum is exactly 8192).
const RED_WEIGHT: u32 = 1742;
const GREEN_WEIGHT: u32 = 5859;
const BLUE_WEIGHT: u32 = 591;

/// Integer Rec.601 luminance weights, scaled by 8192. Used for CMYK
/// sources, whose composite step already bakes in a different gamut.
const CMYK_RED_WEIGHT: i32 = 2449;
const CMYK_GREEN_WEIGHT: i32 = 4809;
const CMYK_BLUE_WEIGHT: i32 = 934;

/// Convert an RGB triple to its gray intensity.
///
/// Uses integer Rec.709 weights: `luma(64, 128, 64) == 109`,
/// `luma(255, 255, 255) == 255`.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * RED_WEIGHT + u32::from(g) * GREEN_WEIGHT + u32::from(b) * BLUE_WEIGHT) >> 13)
        as u8
}

/// Convert a CMYK quadruple to its gray intensity.
///
/// Each channel is composited against the key (black) component and the
/// result weighted with Rec.601 luminance. Channels are clamped to
/// `[0, 255]` before weighting.
#[inline]
pub fn cmyk_to_gray(c: u8, m: u8, y: u8, k: u8) -> u8 {
    let k = i32::from(k);
    let k_diff = 255 - k;
    let composite = |v: u8| -> i32 {
        let v = i32::from(v);
        (((k * v) >> 8) + k_diff - v).clamp(0, 255)
    };
    let r = composite(c);
    let g = composite(m);
    let b = composite(y);
    ((r * CMYK_RED_WEIGHT + g * CMYK_GREEN_WEIGHT + b * CMYK_BLUE_WEIGHT) >> 13) as u8
}

/// Supported source pixel layouts.
///
/// This is a closed set: every decoder output maps onto one of these
/// variants, and each variant has exactly one extraction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// 8-bit grayscale
    Gray8,
    /// 16-bit big-endian grayscale
    Gray16,
    /// 8-bit RGB, 3 bytes per pixel
    Rgb8,
    /// 8-bit RGBA, 4 bytes per pixel
    Rgba8,
    /// 16-bit big-endian RGBA, 8 bytes per pixel
    Rgba16,
    /// 8-bit alpha coverage
    Alpha8,
    /// 16-bit big-endian alpha coverage
    Alpha16,
    /// 8-bit CMYK, 4 bytes per pixel
    Cmyk8,
    /// 8-bit palette indices (palette required for conversion)
    Indexed8,
}

impl PixelLayout {
    /// Get the number of bytes each pixel occupies in the sample buffer.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelLayout::Gray8 | PixelLayout::Alpha8 | PixelLayout::Indexed8 => 1,
            PixelLayout::Gray16 | PixelLayout::Alpha16 => 2,
            PixelLayout::Rgb8 => 3,
            PixelLayout::Rgba8 | PixelLayout::Cmyk8 => 4,
            PixelLayout::Rgba16 => 8,
        }
    }
}

/// Color source image: a raw sample buffer plus its pixel layout.
#[derive(Debug, Clone)]
pub struct ColorImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Bytes per row (>= width * bytes_per_pixel)
    stride: usize,
    /// Sample packing
    layout: PixelLayout,
    /// Raw samples, `stride * height` bytes
    data: Vec<u8>,
    /// RGB palette for `Indexed8` sources
    palette: Option<Vec<[u8; 3]>>,
}

impl ColorImage {
    /// Create a zero-filled image with a tight stride.
    pub fn new(width: u32, height: u32, layout: PixelLayout) -> Self {
        let stride = width as usize * layout.bytes_per_pixel();
        ColorImage {
            width,
            height,
            stride,
            layout,
            data: vec![0; stride * height as usize],
            palette: None,
        }
    }

    /// Build an image over an existing sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::BadStride`] if `stride` cannot hold a row of
    /// the given layout, or [`ColorError::ShortBuffer`] if `data` holds
    /// fewer than `stride * height` bytes.
    pub fn from_raw(
        width: u32,
        height: u32,
        stride: usize,
        layout: PixelLayout,
        data: Vec<u8>,
    ) -> ColorResult<Self> {
        let row_bytes = width as usize * layout.bytes_per_pixel();
        if stride < row_bytes {
            return Err(ColorError::BadStride {
                stride,
                needed: row_bytes,
            });
        }
        let needed = stride * height as usize;
        if data.len() < needed {
            return Err(ColorError::ShortBuffer {
                len: data.len(),
                needed,
            });
        }
        Ok(ColorImage {
            width,
            height,
            stride,
            layout,
            data,
            palette: None,
        })
    }

    /// Attach an RGB palette (for `Indexed8` sources).
    pub fn with_palette(mut self, palette: Vec<[u8; 3]>) -> Self {
        self.palette = Some(palette);
        self
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

    /// Get the pixel layout.
    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Get the raw sample buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the raw sample buffer mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get the attached palette, if any.
    #[inline]
    pub fn palette(&self) -> Option<&[[u8; 3]]> {
        self.palette.as_deref()
    }

    /// Convert to an 8-bit grayscale image.
    ///
    /// The layout is dispatched once; every pixel then runs the same pure
    /// extraction rule. A zero-area source yields an empty `GrayImage`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::MissingPalette`] for an `Indexed8` source
    /// without a palette, or [`ColorError::BadPaletteIndex`] if a pixel
    /// refers past the end of the palette.
    pub fn to_gray(&self) -> ColorResult<GrayImage> {
        let mut gray = GrayImage::new(self.width, self.height);
        if gray.is_empty() {
            return Ok(gray);
        }

        match self.layout {
            PixelLayout::Gray8 => self.extract(&mut gray, |px| px[0]),
            PixelLayout::Gray16 => self.extract(&mut gray, |px| px[0]),
            PixelLayout::Rgb8 => self.extract(&mut gray, |px| luma(px[0], px[1], px[2])),
            PixelLayout::Rgba8 => self.extract(&mut gray, |px| luma(px[0], px[1], px[2])),
            PixelLayout::Rgba16 => self.extract(&mut gray, |px| luma(px[0], px[2], px[4])),
            PixelLayout::Alpha8 => self.extract(&mut gray, |px| 255 - px[0]),
            PixelLayout::Alpha16 => self.extract(&mut gray, |px| 255 - px[0]),
            PixelLayout::Cmyk8 => {
                self.extract(&mut gray, |px| cmyk_to_gray(px[0], px[1], px[2], px[3]))
            }
            PixelLayout::Indexed8 => self.extract_indexed(&mut gray)?,
        }

        Ok(gray)
    }

    /// Run a per-pixel extraction rule over every row.
    fn extract<F: Fn(&[u8]) -> u8>(&self, gray: &mut GrayImage, rule: F) {
        let bpp = self.layout.bytes_per_pixel();
        for y in 0..self.height {
            let src = &self.data[y as usize * self.stride..];
            for (x, out) in gray.row_mut(y).iter_mut().enumerate() {
                *out = rule(&src[x * bpp..(x + 1) * bpp]);
            }
        }
    }

    /// Palette lookup is the one rule that can fail per pixel.
    fn extract_indexed(&self, gray: &mut GrayImage) -> ColorResult<()> {
        let palette = self.palette.as_deref().ok_or(ColorError::MissingPalette)?;
        for y in 0..self.height {
            let src = &self.data[y as usize * self.stride..];
            for (x, out) in gray.row_mut(y).iter_mut().enumerate() {
                let index = src[x] as usize;
                let [r, g, b] = *palette
                    .get(index)
                    .ok_or(ColorError::BadPaletteIndex {
                        index,
                        len: palette.len(),
                    })?;
                *out = luma(r, g, b);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_endpoints_and_weights() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(128, 128, 128), 128);
        assert_eq!(luma(64, 128, 64), 109);
    }

    #[test]
    fn cmyk_reference_values() {
        assert_eq!(cmyk_to_gray(0, 0, 0, 0), 255);
        assert_eq!(cmyk_to_gray(255, 255, 255, 0), 0);
        assert_eq!(cmyk_to_gray(0, 0, 0, 255), 0);
        assert_eq!(cmyk_to_gray(127, 127, 127, 127), 64);
        assert_eq!(cmyk_to_gray(0, 0, 0, 127), 128);
        assert_eq!(cmyk_to_gray(0, 0, 0, 128), 127);
    }

    #[test]
    fn cmyk_saturated_channels_stay_in_range() {
        // k and a color channel both at 255 would composite below zero
        let v = cmyk_to_gray(255, 255, 255, 255);
        assert_eq!(v, 0);
    }

    #[test]
    fn gray8_is_a_copy() {
        let img = ColorImage::from_raw(3, 1, 3, PixelLayout::Gray8, vec![7, 8, 9]).unwrap();
        let gray = img.to_gray().unwrap();
        assert_eq!(gray.row(0), &[7, 8, 9]);
    }

    #[test]
    fn gray16_takes_most_significant_byte() {
        let img =
            ColorImage::from_raw(2, 1, 4, PixelLayout::Gray16, vec![0xAB, 0xCD, 0x01, 0xFF])
                .unwrap();
        let gray = img.to_gray().unwrap();
        assert_eq!(gray.row(0), &[0xAB, 0x01]);
    }

    #[test]
    fn rgba_ignores_alpha() {
        let opaque =
            ColorImage::from_raw(1, 1, 4, PixelLayout::Rgba8, vec![64, 128, 64, 255]).unwrap();
        let transparent =
            ColorImage::from_raw(1, 1, 4, PixelLayout::Rgba8, vec![64, 128, 64, 0]).unwrap();
        assert_eq!(opaque.to_gray().unwrap().get(0, 0), Some(109));
        assert_eq!(transparent.to_gray().unwrap().get(0, 0), Some(109));
    }

    #[test]
    fn rgba16_takes_high_bytes() {
        let px = vec![64, 0xFF, 128, 0xFF, 64, 0xFF, 255, 255];
        let img = ColorImage::from_raw(1, 1, 8, PixelLayout::Rgba16, px).unwrap();
        assert_eq!(img.to_gray().unwrap().get(0, 0), Some(109));
    }

    #[test]
    fn alpha_inverts_coverage() {
        let img = ColorImage::from_raw(3, 1, 3, PixelLayout::Alpha8, vec![0, 55, 255]).unwrap();
        let gray = img.to_gray().unwrap();
        assert_eq!(gray.row(0), &[255, 200, 0]);
    }

    #[test]
    fn indexed_looks_up_palette() {
        let img = ColorImage::from_raw(3, 1, 3, PixelLayout::Indexed8, vec![0, 1, 0])
            .unwrap()
            .with_palette(vec![[0, 0, 0], [255, 255, 255]]);
        let gray = img.to_gray().unwrap();
        assert_eq!(gray.row(0), &[0, 255, 0]);
    }

    #[test]
    fn indexed_without_palette_fails() {
        let img = ColorImage::from_raw(1, 1, 1, PixelLayout::Indexed8, vec![0]).unwrap();
        assert!(matches!(
            img.to_gray().unwrap_err(),
            ColorError::MissingPalette
        ));
    }

    #[test]
    fn indexed_rejects_out_of_range_entries() {
        let img = ColorImage::from_raw(1, 1, 1, PixelLayout::Indexed8, vec![5])
            .unwrap()
            .with_palette(vec![[0, 0, 0]]);
        assert!(matches!(
            img.to_gray().unwrap_err(),
            ColorError::BadPaletteIndex { index: 5, len: 1 }
        ));
    }

    #[test]
    fn stride_padding_is_skipped() {
        // 2 wide, 2 deep, one padding byte per row
        let data = vec![10, 20, 99, 30, 40, 99];
        let img = ColorImage::from_raw(2, 2, 3, PixelLayout::Gray8, data).unwrap();
        let gray = img.to_gray().unwrap();
        assert_eq!(gray.row(0), &[10, 20]);
        assert_eq!(gray.row(1), &[30, 40]);
    }

    #[test]
    fn zero_area_converts_to_empty() {
        let img = ColorImage::new(0, 4, PixelLayout::Rgb8);
        let gray = img.to_gray().unwrap();
        assert!(gray.is_empty());
        assert_eq!(gray.height(), 4);
    }

    #[test]
    fn from_raw_validates_geometry() {
        assert!(matches!(
            ColorImage::from_raw(4, 1, 8, PixelLayout::Rgb8, vec![0; 8]),
            Err(ColorError::BadStride { .. })
        ));
        assert!(matches!(
            ColorImage::from_raw(2, 2, 6, PixelLayout::Rgb8, vec![0; 6]),
            Err(ColorError::ShortBuffer { .. })
        ));
    }
}
