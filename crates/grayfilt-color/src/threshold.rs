//! Binary thresholding
//!
//! Converts a grayscale image to pure black and white. Higher thresholds
//! produce darker images (more pixels fall below the cut).

use grayfilt_core::{GrayImage, WHITE};

/// Threshold an image to black and white, in place.
///
/// Pixels below `threshold` become 0, all others become 255. A zero-area
/// image is a no-op. Stride padding bytes are left untouched.
pub fn to_monochrome(img: &mut GrayImage, threshold: u8) {
    if img.is_empty() {
        return;
    }
    for y in 0..img.height() {
        for v in img.row_mut(y) {
            *v = if *v < threshold { 0 } else { WHITE };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_threshold() {
        let mut img = GrayImage::from_raw(4, 1, 4, vec![0, 127, 128, 255]).unwrap();
        to_monochrome(&mut img, 128);
        assert_eq!(img.row(0), &[0, 0, 255, 255]);
    }

    #[test]
    fn threshold_zero_turns_everything_white() {
        let mut img = GrayImage::from_raw(3, 1, 3, vec![0, 1, 200]).unwrap();
        to_monochrome(&mut img, 0);
        assert_eq!(img.row(0), &[255, 255, 255]);
    }

    #[test]
    fn zero_area_is_a_no_op() {
        let mut img = GrayImage::new(0, 3);
        to_monochrome(&mut img, 100);
        assert!(img.is_empty());
    }

    #[test]
    fn stride_padding_untouched() {
        let mut img = GrayImage::from_raw(2, 1, 4, vec![10, 200, 42, 42]).unwrap();
        to_monochrome(&mut img, 100);
        assert_eq!(img.data(), &[0, 255, 42, 42]);
    }
}
