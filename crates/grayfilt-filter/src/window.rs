//! Sliding row-window buffer
//!
//! [`RowWindow`] holds the `size` rows the filters currently need, each
//! copied out of the image and pre-padded horizontally with white. The
//! copies are what the per-pixel statistics read, so overwriting the
//! image row-by-row never feeds a filtered value back into a later
//! neighborhood.
//!
//! After the advance for output row `y`, the buffer spans image rows
//! `y + half - size + 1 ..= y + half` (centered for odd sizes,
//! bottom-biased for even ones); rows outside the image are all-white.
//! Advancing rotates the oldest buffer to the back and overwrites only
//! its contents, so a full advance costs one row copy.

use grayfilt_core::{GrayImage, WHITE};
use std::collections::VecDeque;

pub(crate) struct RowWindow {
    /// Oldest row at the front, newest at the back.
    rows: VecDeque<Vec<u8>>,
    /// Window edge length
    size: usize,
    /// Left padding (columns the window extends beyond the anchor)
    half: usize,
}

impl RowWindow {
    /// Seed a window over `img`.
    ///
    /// The buffer initially spans image rows `half - size ..= half - 1`:
    /// real rows are copied in at horizontal offset `half`, everything
    /// else (rows above the image, left/right padding) stays white. The
    /// first [`advance`](Self::advance) then brings in row `half`,
    /// aligning the window on output row 0.
    ///
    /// `img` must have nonzero width; the caller rejects degenerate
    /// images before constructing a window.
    pub(crate) fn new(img: &GrayImage, size: usize) -> Self {
        let half = size / 2;
        let width = img.width() as usize;
        let padded = width + size - 1;
        let mut rows: VecDeque<Vec<u8>> = (0..size).map(|_| vec![WHITE; padded]).collect();

        // Slot i holds image row half - size + i; only the last `half`
        // slots can be real rows (0 ..= half - 1).
        for (i, row) in rows.iter_mut().enumerate() {
            let y = half as i64 - size as i64 + i as i64;
            if (0..i64::from(img.height())).contains(&y) {
                row[half..half + width].copy_from_slice(img.row(y as u32));
            }
        }

        RowWindow { rows, size, half }
    }

    /// Move the window down one row.
    ///
    /// Drops the topmost row and reuses its buffer for the incoming one:
    /// `Some(row)` copies a real image row between the white pads, `None`
    /// inserts an all-white synthetic row.
    pub(crate) fn advance(&mut self, source: Option<&[u8]>) {
        let mut row = self.rows.pop_front().expect("window holds size rows");
        match source {
            Some(src) => row[self.half..self.half + src.len()].copy_from_slice(src),
            None => row.fill(WHITE),
        }
        self.rows.push_back(row);
    }

    /// Get the window edge length.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Iterate the padded rows, top to bottom.
    ///
    /// For output column `x`, the window values are `row[x + j]` for
    /// `j in 0..size`; the pre-padding maps out-of-image columns to
    /// white without any per-access branching.
    #[inline]
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}
