// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Median of two equal-length sorted sequences without merging them.
//!
//! # Algorithm Overview
//!
//! ```text
//! a = [1, 3]          b = [2, 4]          n = 2
//!
//! Cut a after m1 elements, b after m2 = n - m1 elements:
//!
//!      a: 1 | 3        la = 1, ra = 3
//!      b: 2 | 4        lb = 2, rb = 4
//!
//! The cut is valid when la <= rb and lb <= ra. Then the lower half of the
//! merged order is exactly {1, 2} and the upper half {3, 4}:
//!
//!      median = (max(la, lb) + min(ra, rb)) / 2 = (2 + 3) / 2 = 2.5
//! ```
//!
//! A missing boundary (cut at an array end) acts as -∞ on the left side and
//! +∞ on the right side. If `la > rb` the cut in `a` is too far right,
//! otherwise too far left; binary search on `m1` over `0..=n` converges in
//! O(log n) steps.
//!
//! # Input contract
//!
//! Both inputs must be sorted ascending and of equal length. Sortedness is
//! not checked here (see [`crate::verify::SortedSequence`] for a validated
//! boundary); unsorted input makes the search exhaust and return `None`.

use crate::types::Numeric;
use crate::verify::contracts::check_median_bounds;

/// Median of the union of two equal-length sorted sequences.
///
/// Returns `None` when both are empty, when the lengths differ, or when the
/// partition search finds no valid cut (only possible for unsorted input).
///
/// # Example
///
/// ```
/// use dncore::median_of_sorted_pair;
///
/// assert_eq!(median_of_sorted_pair(&[1, 3], &[2, 4]), Some(2.5));
/// ```
pub fn median_of_sorted_pair<T: Numeric>(a: &[T], b: &[T]) -> Option<f64> {
    let n = a.len();
    if n == 0 || b.len() != n {
        return None;
    }

    let mut l = 0usize;
    let mut r = n;
    while l <= r {
        let m1 = l + (r - l) / 2;
        let m2 = n - m1;

        // None on the left means -∞, None on the right means +∞.
        let la = m1.checked_sub(1).map(|i| a[i]);
        let ra = a.get(m1).copied();
        let lb = m2.checked_sub(1).map(|i| b[i]);
        let rb = b.get(m2).copied();

        if not_above(la, rb) && not_above(lb, ra) {
            let low = larger(la, lb)?;
            let high = smaller(ra, rb)?;
            let median = (low.to_f64() + high.to_f64()) / 2.0;
            check_median_bounds(a, b, median);
            return Some(median);
        }

        if !not_above(la, rb) {
            // la exists here, so m1 >= 1
            r = m1 - 1;
        } else {
            l = m1 + 1;
        }
    }

    None
}

/// `left <= right` with -∞ / +∞ sentinels for missing values.
#[inline]
fn not_above<T: Numeric>(left: Option<T>, right: Option<T>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => l <= r,
        _ => true,
    }
}

/// Larger of two lower boundaries; `None` only if both are -∞.
#[inline]
fn larger<T: Numeric>(x: Option<T>, y: Option<T>) -> Option<T> {
    match (x, y) {
        (Some(x), Some(y)) => Some(if x > y { x } else { y }),
        (x, None) => x,
        (None, y) => y,
    }
}

/// Smaller of two upper boundaries; `None` only if both are +∞.
#[inline]
fn smaller<T: Numeric>(x: Option<T>, y: Option<T>) -> Option<T> {
    match (x, y) {
        (Some(x), Some(y)) => Some(if x < y { x } else { y }),
        (x, None) => x,
        (None, y) => y,
    }
}
