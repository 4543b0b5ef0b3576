//! Detection of price ranges where a P/L curve reaches a threshold.

use crate::models::ProfitRange;
use ol_core::{Price, Real};

/// Default threshold for a profitable outcome: one cent.
pub const PROFIT_THRESHOLD: Real = 0.01;

/// Maximal runs of consecutive grid points where `curve ≥ threshold`.
///
/// Each range spans the first and last qualifying grid points. A run that
/// starts at the first grid point reports `low = 0.0`, and one that ends at
/// the last grid point reports `high = +∞`. Ranges come out in increasing
/// price order and are disjoint.
pub fn find_ranges(prices: &[Price], curve: &[Real], threshold: Real) -> Vec<ProfitRange> {
    let n = prices.len().min(curve.len());
    let mut ranges = Vec::new();
    let mut start: Option<usize> = None;

    for i in 0..n {
        let above = curve[i] >= threshold;
        match (start, above) {
            (None, true) => start = Some(i),
            (Some(first), false) => {
                ranges.push(bounds(prices, first, i - 1, n));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(first) = start {
        ranges.push(bounds(prices, first, n - 1, n));
    }
    ranges
}

fn bounds(prices: &[Price], first: usize, last: usize, n: usize) -> ProfitRange {
    let low = if first == 0 { 0.0 } else { prices[first] };
    let high = if last == n - 1 { Real::INFINITY } else { prices[last] };
    ProfitRange::new(low, high)
}
