//! Per-pixel intensity histogram
//!
//! One 256-bin count array, allocated once per filter invocation and
//! rebuilt from scratch for every output pixel. Rebuilding (rather than
//! incrementally sliding counts across columns) trades O(size²) work per
//! pixel for a loop with no add/remove bookkeeping.

use crate::window::RowWindow;

/// 256-bin occurrence counts for one window neighborhood.
///
/// Bin index is the intensity value; counts are `u32` so a uniform
/// window never overflows a bin (a `size >= 16` window already holds
/// more than 255 samples).
#[derive(Debug, Clone)]
pub struct Histogram {
    bins: [u32; 256],
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Histogram { bins: [0; 256] }
    }

    /// Get the bin counts.
    #[inline]
    pub fn bins(&self) -> &[u32; 256] {
        &self.bins
    }

    /// Get the total sample count across all bins.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&n| u64::from(n)).sum()
    }

    /// Rebuild the histogram for the neighborhood anchored at column `x`.
    ///
    /// Resets the counts with a bulk fill (no reallocation), then counts
    /// `rows[i][x + j]` for every `i, j` in `0..size`. The total is
    /// always exactly `size * size`.
    pub(crate) fn fill(&mut self, window: &RowWindow, x: usize) {
        self.bins.fill(0);
        let size = window.size();
        for row in window.rows() {
            for &v in &row[x..x + size] {
                self.bins[v as usize] += 1;
            }
        }
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grayfilt_core::GrayImage;

    #[test]
    fn total_equals_window_area() {
        let img = GrayImage::from_raw(4, 2, 4, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        for size in [2usize, 3, 5] {
            let mut win = RowWindow::new(&img, size);
            let half = (size / 2) as u32;
            if half < img.height() {
                win.advance(Some(img.row(half)));
            } else {
                win.advance(None);
            }
            let mut hist = Histogram::new();
            for x in 0..img.width() as usize {
                hist.fill(&win, x);
                assert_eq!(hist.total(), (size * size) as u64);
            }
        }
    }

    #[test]
    fn fill_resets_previous_counts() {
        let img = GrayImage::from_raw(2, 1, 2, vec![9, 9]).unwrap();
        let mut win = RowWindow::new(&img, 2);
        win.advance(None);

        let mut hist = Histogram::new();
        hist.fill(&win, 0);
        hist.fill(&win, 0);
        assert_eq!(hist.total(), 4);
    }

    #[test]
    fn counts_real_and_padded_samples() {
        // Single pixel of 9; a size-2 window sees it plus 3 white pads
        let img = GrayImage::from_raw(1, 1, 1, vec![9]).unwrap();
        let mut win = RowWindow::new(&img, 2);
        win.advance(None);

        let mut hist = Histogram::new();
        hist.fill(&win, 0);
        assert_eq!(hist.bins()[9], 1);
        assert_eq!(hist.bins()[255], 3);
    }
}
