//! Statistic extraction from bin counts
//!
//! Both statistics operate on a plain bin slice so they can be applied
//! to the full 256-bin [`Histogram`](crate::Histogram) or to any shorter
//! count array.

use std::cmp::Ordering;

/// Weighted average of a histogram: `floor(Σ(index * count) / area)`.
///
/// `area` is the sample population (the filters pass `size * size`). The
/// accumulator is `u64`, so `255 * area` never overflows for any window
/// this library can build.
///
/// # Panics
///
/// Panics in debug builds if `area` is 0.
pub fn average(bins: &[u32], area: u64) -> u8 {
    debug_assert!(area > 0, "average over an empty population");
    let sum: u64 = bins
        .iter()
        .enumerate()
        .map(|(value, &count)| value as u64 * u64::from(count))
        .sum();
    (sum / area) as u8
}

/// Balance point of a histogram: the bin index at which the cumulative
/// weight below is as close as possible to the weight at-or-above.
///
/// Bisects the bin domain instead of sorting samples, so the cost is
/// O(n log n) in the bin count and independent of the window size. The
/// tie-break is deliberately asymmetric: when the two halves weigh the
/// same, the search narrows to the right half without banking the left
/// half's weight, which biases every later comparison. That behavior is
/// part of the observable contract and must not be "corrected".
///
/// `bins` must not hold more than 256 entries. An empty slice yields 0.
pub fn balance_point(bins: &[u32]) -> u8 {
    debug_assert!(bins.len() <= 256, "bin domain wider than u8");
    let mut left = 0usize;
    let mut right = bins.len();
    let mut left_sum_prev: u64 = 0;
    let mut right_sum_prev: u64 = 0;

    while left < right {
        let middle = (left + right) / 2;
        if left == middle {
            return left as u8;
        }
        let left_sum: u64 = bins[left..middle].iter().map(|&n| u64::from(n)).sum();
        let right_sum: u64 = bins[middle..right].iter().map(|&n| u64::from(n)).sum();

        match (left_sum_prev + left_sum).cmp(&(right_sum_prev + right_sum)) {
            Ordering::Greater => {
                right = middle;
                right_sum_prev += right_sum;
            }
            Ordering::Less => {
                left = middle;
                left_sum_prev += left_sum;
            }
            // Balanced: narrow right without banking left_sum.
            Ordering::Equal => left = middle,
        }
    }
    0
}
