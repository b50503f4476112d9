// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the sequence solvers.
//!
//! Arbitrary sequences, no preconditions. Results are checked against
//! brute force; the debug contracts inside each solver run as well.

#![no_main]

use dncore::{find_peak, majority, max_gap, tree_min};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|values: Vec<i16>| {
    let values: Vec<i64> = values.into_iter().map(i64::from).collect();

    // Max gap: defined for n >= 2, and optimal
    match max_gap(&values) {
        Some(pair) => {
            assert!(pair.buy < pair.sell && pair.sell < values.len());
            let mut best = i64::MIN;
            let mut min_so_far = values[0];
            for &v in &values[1..] {
                best = best.max(v - min_so_far);
                min_so_far = min_so_far.min(v);
            }
            assert_eq!(pair.diff, best);
        }
        None => assert!(values.len() < 2),
    }

    // Majority: reported value fills more than half
    if let Some(v) = majority(&values) {
        assert!(values.iter().filter(|&&x| x == v).count() > values.len() / 2);
    }

    // Peak: any reported index is a strict local peak
    if let Some(m) = find_peak(&values) {
        assert!(values[m - 1] < values[m] && values[m] > values[m + 1]);
    }

    // Tree min: always a member; exact on sorted input
    let mut sorted = values.clone();
    sorted.sort_unstable();
    assert_eq!(tree_min(&sorted), sorted.first().copied());
    if let Some(v) = tree_min(&values) {
        assert!(values.contains(&v));
    }
});
