//! grayfilt-test - Synthetic test images
//!
//! Deterministic image builders shared by the integration tests of the
//! member crates. Everything here is a pure function of its arguments,
//! so tests that compare filter outputs across runs get byte-identical
//! inputs without shipping binary fixtures.

use grayfilt_color::{ColorImage, PixelLayout};
use grayfilt_core::GrayImage;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // grayfilt-test is at crates/grayfilt-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regression test output directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// A uniform image of the given intensity.
pub fn uniform(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::filled(width, height, value)
}

/// A deterministic two-axis gradient.
///
/// Pixel (x, y) carries `(7x + 13y) mod 256`, which exercises every
/// intensity on images of any reasonable size.
pub fn ramp(width: u32, height: u32) -> GrayImage {
    let mut img = GrayImage::new(width, height);
    for y in 0..height {
        for (x, v) in img.row_mut(y).iter_mut().enumerate() {
            *v = ((7 * x as u32 + 13 * y) % 256) as u8;
        }
    }
    img
}

/// A mid-gray image with deterministic black and white impulses.
///
/// Every 7th pixel (in scan order) becomes black and every 11th white,
/// approximating salt-and-pepper noise without randomness.
pub fn speckled(width: u32, height: u32) -> GrayImage {
    let mut img = GrayImage::filled(width, height, 128);
    let mut i = 0usize;
    for y in 0..height {
        for v in img.row_mut(y) {
            if i % 7 == 0 {
                *v = 0;
            } else if i % 11 == 0 {
                *v = 255;
            }
            i += 1;
        }
    }
    img
}

/// An RGB gradient suitable for grayscale-conversion pipelines.
pub fn rgb_ramp(width: u32, height: u32) -> ColorImage {
    let mut img = ColorImage::new(width, height, PixelLayout::Rgb8);
    let stride = img.stride();
    for y in 0..height {
        for x in 0..width {
            let off = y as usize * stride + x as usize * 3;
            let data = img.data_mut();
            data[off] = (x % 256) as u8;
            data[off + 1] = (y % 256) as u8;
            data[off + 2] = ((x + y) % 256) as u8;
        }
    }
    img
}
