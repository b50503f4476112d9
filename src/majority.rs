// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Strict majority detection by divide and conquer.
//!
//! A value that fills more than half of a range must fill more than half of
//! at least one of its two halves. So each half reports its own majority (if
//! any), and the parent only has to verify those two candidates against the
//! combined range:
//!
//! ```text
//! [3 3 4 2 3 | 3 2 2 3]
//!  majority 3   no majority
//!       \          /
//!   rescan [l..=r] for 3: count 5 of 9 > 4 → majority 3
//! ```
//!
//! When both halves agree the parent inherits the answer without rescanning.
//! The rescan is what makes this O(n log n) rather than O(n).

/// Outcome for one index range: the majority value, if one exists.
///
/// `None` makes no claim about minority values; a parent merge may still
/// find a majority built from two halves that individually had none of it.
type RangeMajority<T> = Option<T>;

/// Value occupying strictly more than half of `values`, if any.
///
/// # Example
///
/// ```
/// use dncore::majority;
///
/// assert_eq!(majority(&[3, 3, 4, 2, 3, 3, 2, 2, 3]), Some(3));
/// assert_eq!(majority(&[1, 2, 3]), None);
/// ```
pub fn majority<T: Copy + PartialEq>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    majority_in(values, 0, values.len() - 1)
}

/// Majority of the closed range `[l, r]`.
///
/// Exposed so callers can query a sub-range without slicing; `l <= r < len`
/// is required.
pub fn majority_in<T: Copy + PartialEq>(values: &[T], l: usize, r: usize) -> Option<T> {
    let result = solve(values, l, r);
    crate::verify::contracts::check_majority(&values[l..=r], result);
    result
}

fn solve<T: Copy + PartialEq>(values: &[T], l: usize, r: usize) -> RangeMajority<T> {
    if l == r {
        return Some(values[l]);
    }

    let m = l + (r - l) / 2;
    let left = solve(values, l, m);
    let right = solve(values, m + 1, r);

    if let (Some(lv), Some(rv)) = (left, right) {
        if lv == rv {
            return Some(lv);
        }
    }

    if left.is_none() && right.is_none() {
        return None;
    }

    // Single pass counting whichever candidates are still live.
    let mut left_count = 0usize;
    let mut right_count = 0usize;
    for v in &values[l..=r] {
        if left.is_some_and(|c| c == *v) {
            left_count += 1;
        }
        if right.is_some_and(|c| c == *v) {
            right_count += 1;
        }
    }

    let half = (r - l + 1) / 2;
    if left_count > half {
        left
    } else if right_count > half {
        right
    } else {
        None
    }
}
