// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Maximum gap: the buy/sell pair maximizing `v[sell] - v[buy]` with `buy < sell`.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: [7, 1, 5, 3, 6, 4]
//!
//!            [0..=5]
//!           /       \
//!      [0..=2]     [3..=5]        split at the midpoint
//!      best 1→2    best 3→4       each half solved independently
//!      min @1      max @4
//!           \       /
//!      crossing: buy at left min (1), sell at right max (4) → diff 5
//!
//! Output: buy 1, sell 4
//! ```
//!
//! Every pair with `buy < sell` either lies entirely in one half or crosses
//! the split. The best crossing pair always buys at the left half's minimum
//! and sells at the right half's maximum, so each merge is O(1) once the
//! halves report their extreme positions.
//!
//! # Complexity
//!
//! - Time: O(n), n - 1 constant-time merges (within the O(n log n) budget)
//! - Space: O(log n) recursion depth

use crate::types::{GapPair, Numeric};
use crate::verify::contracts::check_gap_pair;

/// Partial result for one index range.
#[derive(Debug, Clone, Copy)]
struct RangeSummary<T> {
    /// Best pair strictly inside the range. `None` for single-index ranges,
    /// which have no `buy < sell` pair at all.
    best: Option<GapPair<T>>,
    /// Position of the range maximum (ties resolve to the later position).
    max_idx: usize,
    /// Position of the range minimum (ties resolve to the later position).
    min_idx: usize,
}

/// Find the buy/sell pair with the largest `values[sell] - values[buy]`.
///
/// Returns `None` when fewer than two values are given. For non-increasing
/// input the answer is the least negative (or zero) step, never a self pair.
///
/// Differences must fit in `T`; overflowing integer input is outside the
/// contract.
///
/// # Example
///
/// ```
/// use dncore::max_gap;
///
/// let pair = max_gap(&[7, 1, 5, 3, 6, 4]).unwrap();
/// assert_eq!((pair.buy, pair.sell, pair.diff), (1, 4, 5));
/// ```
pub fn max_gap<T: Numeric>(values: &[T]) -> Option<GapPair<T>> {
    if values.len() < 2 {
        return None;
    }

    let best = solve(values, 0, values.len() - 1).best;

    if let Some(pair) = &best {
        check_gap_pair(values, pair);
    }
    best
}

/// Solve the closed range `[l, r]`.
fn solve<T: Numeric>(values: &[T], l: usize, r: usize) -> RangeSummary<T> {
    if l >= r {
        return RangeSummary {
            best: None,
            max_idx: l,
            min_idx: l,
        };
    }

    let m = l + (r - l) / 2;
    let left = solve(values, l, m);
    let right = solve(values, m + 1, r);

    let max_idx = if values[left.max_idx] > values[right.max_idx] {
        left.max_idx
    } else {
        right.max_idx
    };
    let min_idx = if values[left.min_idx] < values[right.min_idx] {
        left.min_idx
    } else {
        right.min_idx
    };

    let crossing = GapPair {
        buy: left.min_idx,
        sell: right.max_idx,
        diff: values[right.max_idx] - values[left.min_idx],
    };

    let mut best = left.best;
    best = pick_better(best, right.best);
    best = pick_better(best, Some(crossing));

    RangeSummary {
        best,
        max_idx,
        min_idx,
    }
}

/// Keep `current` unless `candidate` is strictly better.
#[inline]
fn pick_better<T: Numeric>(
    current: Option<GapPair<T>>,
    candidate: Option<GapPair<T>>,
) -> Option<GapPair<T>> {
    match (current, candidate) {
        (Some(cur), Some(cand)) if cand.diff > cur.diff => Some(cand),
        (None, cand) => cand,
        (cur, _) => cur,
    }
}
