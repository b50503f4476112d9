// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for solver results.
//!
//! Debug-mode assertions that every answer a solver hands back satisfies the
//! property it promises. These contracts:
//!
//! 1. Are **zero-cost in release builds** (bodies compile to nothing under
//!    `debug_assertions = false`)
//! 2. Catch **algorithmic errors** while tests run, at the point of failure
//! 3. Check **results**, never inputs: input preconditions belong to the
//!    wrappers in [`super::types`]
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function      | Property                                         |
//! |------------------------|--------------------------------------------------|
//! | `check_gap_pair`       | `buy < sell`, diff matches, diff is optimal      |
//! | `check_median_bounds`  | median lies within the union's value range       |
//! | `check_majority`       | reported value fills more than half              |
//! | `check_peak`           | `v[m-1] < v[m] > v[m+1]`                         |
//! | `check_tree_balanced`  | height is ⌊log2 n⌋ + 1                           |

use crate::types::{GapPair, Numeric};

/// `v == v`; false only for NaN-like values, on which contracts stay silent.
#[inline]
#[allow(clippy::eq_op)]
fn is_reflexive<T: PartialEq>(v: &T) -> bool {
    v == v
}

// ============================================================================
// MAX GAP CONTRACTS
// ============================================================================

/// Check that a gap pair is well-formed and optimal.
///
/// Optimality is checked in O(n) with a running minimum, so this is cheap
/// enough to run on every debug call.
///
/// # Panics (debug builds only)
/// Panics if `buy >= sell`, if the stored diff is wrong, or if some other
/// pair has a strictly larger diff.
#[inline]
pub fn check_gap_pair<T: Numeric>(values: &[T], pair: &GapPair<T>) {
    if !cfg!(debug_assertions) || !values.iter().all(is_reflexive) {
        return;
    }

    // INVARIANT: buy strictly precedes sell
    debug_assert!(
        pair.buy < pair.sell && pair.sell < values.len(),
        "Contract violation: GapPair.WellFormed - buy {} sell {} len {}",
        pair.buy,
        pair.sell,
        values.len()
    );

    let actual = values[pair.sell] - values[pair.buy];
    debug_assert!(
        actual == pair.diff,
        "Contract violation: GapPair.WellFormed - diff {:?} != v[{}] - v[{}] = {:?}",
        pair.diff,
        pair.sell,
        pair.buy,
        actual
    );

    // INVARIANT: no pair beats the reported one
    let mut min_so_far = values[0];
    for &v in &values[1..] {
        let candidate = v - min_so_far;
        debug_assert!(
            !(candidate > pair.diff),
            "Contract violation: GapPair.Optimal - found diff {:?} > reported {:?}",
            candidate,
            pair.diff
        );
        if v < min_so_far {
            min_so_far = v;
        }
    }
}

// ============================================================================
// MEDIAN CONTRACTS
// ============================================================================

/// Check that a median lies between the smallest and largest input value.
///
/// Scans both inputs rather than trusting their ends, so unsorted input
/// (a precondition violation, not an algorithmic error) never trips it.
#[inline]
pub fn check_median_bounds<T: Numeric>(a: &[T], b: &[T], median: f64) {
    if !cfg!(debug_assertions) || median.is_nan() {
        return;
    }

    let (low, high) = a
        .iter()
        .chain(b)
        .map(|v| v.to_f64())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    // INVARIANT: min(a ∪ b) <= median <= max(a ∪ b)
    debug_assert!(
        low <= median && median <= high,
        "Contract violation: Median.Bounded - {} outside [{}, {}]",
        median,
        low,
        high
    );
}

// ============================================================================
// MAJORITY CONTRACTS
// ============================================================================

/// Check a majority verdict for the whole range.
///
/// A reported value must fill more than half the range. A "no majority"
/// verdict is cross-checked with a Boyer-Moore vote: the vote's survivor is
/// the only possible majority, so counting it once is enough.
#[inline]
pub fn check_majority<T: Copy + PartialEq>(values: &[T], result: Option<T>) {
    if !cfg!(debug_assertions) || values.is_empty() || !values.iter().all(is_reflexive) {
        return;
    }

    let half = values.len() / 2;
    match result {
        Some(v) => {
            let count = values.iter().filter(|&&x| x == v).count();
            // INVARIANT: reported majority fills more than half
            debug_assert!(
                count > half,
                "Contract violation: Majority.Strict - count {} <= {}",
                count,
                half
            );
        }
        None => {
            let mut candidate = values[0];
            let mut votes = 0usize;
            for &x in values {
                if votes == 0 {
                    candidate = x;
                }
                if x == candidate {
                    votes += 1;
                } else {
                    votes -= 1;
                }
            }
            let count = values.iter().filter(|&&x| x == candidate).count();
            // INVARIANT: "no majority" means nothing fills more than half
            debug_assert!(
                count <= half,
                "Contract violation: Majority.Complete - missed value with count {} > {}",
                count,
                half
            );
        }
    }
}

// ============================================================================
// PEAK CONTRACTS
// ============================================================================

/// Check that `m` is a strict local peak.
#[inline]
pub fn check_peak<T: PartialOrd>(values: &[T], m: usize) {
    // INVARIANT: v[m-1] < v[m] > v[m+1]
    debug_assert!(
        m >= 1
            && m + 1 < values.len()
            && values[m - 1] < values[m]
            && values[m] > values[m + 1],
        "Contract violation: Peak.Strict - index {} is not a strict local peak",
        m
    );
}

// ============================================================================
// TREE CONTRACTS
// ============================================================================

/// Check that midpoint splitting produced a minimum-height tree.
///
/// A midpoint split of `n` nodes leaves at most `⌈(n-1)/2⌉` on either side,
/// which gives height exactly `⌊log2 n⌋ + 1`.
#[inline]
pub fn check_tree_balanced(height: usize, len: usize) {
    let expected = if len == 0 {
        0
    } else {
        (usize::BITS - len.leading_zeros()) as usize
    };
    // INVARIANT: height = ⌊log2 n⌋ + 1
    debug_assert_eq!(
        height, expected,
        "Contract violation: Tree.Balanced - height {} for {} nodes (expected {})",
        height, len, expected
    );
}
