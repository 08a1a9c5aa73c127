//! grayfilt-filter - Windowed statistical filters
//!
//! The filtering engine at the heart of grayfilt: a square sliding
//! window passes over a [`GrayImage`] and replaces every pixel with a
//! statistic of its `size x size` neighborhood.
//!
//! - [`median_filter`]: the balance point of the neighborhood histogram
//! - [`average_filter`]: the floor of the neighborhood mean
//!
//! Both share the same machinery: a row-window buffer holding the
//! `size` relevant rows as pre-padded copies (memory stays at
//! `O(size * width)`), and a 256-bin [`Histogram`] rebuilt per output
//! pixel. Every coordinate outside the image, on all four sides, counts
//! as white (255).
//!
//! Filtering is in place, strictly top-to-bottom and left-to-right;
//! the row copies in the window guarantee that already-written output
//! never leaks into a later neighborhood. Degenerate inputs (zero-area
//! image, `size <= 1`) leave the image untouched.

mod histogram;
mod stats;
mod window;

pub use histogram::Histogram;
pub use stats::{average, balance_point};

use grayfilt_core::GrayImage;
use window::RowWindow;

/// Replace each pixel with the balance-point median of its
/// `size x size` neighborhood, in place.
///
/// No-op if the image has zero area or `size <= 1`.
///
/// # Examples
///
/// ```
/// use grayfilt_core::GrayImage;
/// use grayfilt_filter::median_filter;
///
/// let mut img = GrayImage::white(16, 16);
/// median_filter(&mut img, 3);
/// assert!(img.data().iter().all(|&v| v == 255));
/// ```
pub fn median_filter(img: &mut GrayImage, size: u32) {
    apply(img, size, |bins, _| balance_point(bins));
}

/// Replace each pixel with the floor-average of its `size x size`
/// neighborhood, in place.
///
/// No-op if the image has zero area or `size <= 1`.
pub fn average_filter(img: &mut GrayImage, size: u32) {
    apply(img, size, average);
}

/// Shared filter driver: one statistic, one pass.
///
/// Every output row advances the window by one row (the real image row
/// `y + half` while it exists, a synthetic white row once the window
/// hangs past the bottom) and then computes the statistic for every
/// column. Rows near the bottom border go through the same loop as the
/// interior, so there is no separate tail phase.
fn apply<F>(img: &mut GrayImage, size: u32, stat: F)
where
    F: Fn(&[u32], u64) -> u8,
{
    if img.is_empty() || size <= 1 {
        return;
    }

    let size = size as usize;
    let half = size / 2;
    let height = img.height();
    let area = (size * size) as u64;

    let mut window = RowWindow::new(img, size);
    let mut hist = Histogram::new();

    for y in 0..height {
        let incoming = y as usize + half;
        if incoming < height as usize {
            window.advance(Some(img.row(incoming as u32)));
        } else {
            window.advance(None);
        }

        for (x, out) in img.row_mut(y).iter_mut().enumerate() {
            hist.fill(&window, x);
            *out = stat(hist.bins(), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_inputs_are_no_ops() {
        let mut img = GrayImage::from_raw(2, 2, 2, vec![1, 2, 3, 4]).unwrap();
        let before = img.clone();

        median_filter(&mut img, 0);
        assert_eq!(img, before);
        median_filter(&mut img, 1);
        assert_eq!(img, before);
        average_filter(&mut img, 1);
        assert_eq!(img, before);

        let mut empty = GrayImage::new(0, 8);
        median_filter(&mut empty, 5);
        assert!(empty.is_empty());
    }

    #[test]
    fn average_two_pixel_row() {
        // [10, 20] with a size-2 window:
        //   x=0 sees {10, 255, 255, 255} -> floor(775/4) = 193
        //   x=1 sees {10, 20, 255, 255}  -> floor(540/4) = 135
        let mut img = GrayImage::from_raw(2, 1, 2, vec![10, 20]).unwrap();
        average_filter(&mut img, 2);
        assert_eq!(img.row(0), &[193, 135]);
    }

    #[test]
    fn median_white_padding_dominates_a_thin_image() {
        // In a size-2 window on a 2x1 image, white always outweighs the
        // one or two real samples.
        let mut img = GrayImage::from_raw(2, 1, 2, vec![10, 20]).unwrap();
        median_filter(&mut img, 2);
        assert_eq!(img.row(0), &[255, 255]);
    }

    #[test]
    fn median_removes_impulse_noise_at_center() {
        // All 200 with one black impulse in the middle; a 3x3 median
        // restores the center from its eight 200-valued neighbors.
        let mut img = GrayImage::filled(3, 3, 200);
        img.set(1, 1, 0).unwrap();
        median_filter(&mut img, 3);
        assert_eq!(img.get(1, 1), Some(200));
    }

    #[test]
    fn single_pixel_matches_direct_histogram() {
        // A 1x1 image filtered at any size sees {v, 255 x (size^2 - 1)};
        // the output must equal the statistic of that exact histogram.
        for size in [2u32, 3, 4, 7] {
            let v = 40u8;
            let mut bins = [0u32; 256];
            bins[v as usize] = 1;
            bins[255] = size * size - 1;

            let mut med = GrayImage::filled(1, 1, v);
            median_filter(&mut med, size);
            assert_eq!(med.get(0, 0), Some(balance_point(&bins)));

            let mut avg = GrayImage::filled(1, 1, v);
            average_filter(&mut avg, size);
            assert_eq!(avg.get(0, 0), Some(average(&bins, u64::from(size * size))));
        }
    }

    #[test]
    fn window_larger_than_image_does_not_panic() {
        for size in [4u32, 9, 33] {
            let mut img = GrayImage::from_raw(3, 2, 3, vec![0, 50, 100, 150, 200, 250]).unwrap();
            median_filter(&mut img, size);
            let mut img = GrayImage::from_raw(3, 2, 3, vec![0, 50, 100, 150, 200, 250]).unwrap();
            average_filter(&mut img, size);
        }
    }

    #[test]
    fn stride_padding_is_preserved() {
        // 2 visible columns, stride 4: padding bytes must survive and
        // must not contribute to any neighborhood.
        let data = vec![10, 10, 77, 88, 10, 10, 77, 88];
        let mut img = GrayImage::from_raw(2, 2, 4, data.clone()).unwrap();
        let mut reference = GrayImage::from_raw(2, 2, 2, vec![10, 10, 10, 10]).unwrap();

        average_filter(&mut img, 2);
        average_filter(&mut reference, 2);

        assert_eq!(img.data()[2], 77);
        assert_eq!(img.data()[3], 88);
        assert_eq!(img.row(0), reference.row(0));
        assert_eq!(img.row(1), reference.row(1));
    }
}
