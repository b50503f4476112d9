// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the two-array median.
//!
//! Sorted inputs must match the full merge. Unsorted inputs violate the
//! precondition, but must still terminate without panicking.

#![no_main]

use dncore::median_of_sorted_pair;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<i32>, Vec<i32>)| {
    let (a, b) = data;

    // Property 1: arbitrary input terminates
    let _ = median_of_sorted_pair(&a, &b);

    let n = a.len().min(b.len());
    if n == 0 {
        return;
    }
    let mut a: Vec<i64> = a[..n].iter().map(|&v| i64::from(v)).collect();
    let mut b: Vec<i64> = b[..n].iter().map(|&v| i64::from(v)).collect();
    a.sort_unstable();
    b.sort_unstable();

    // Property 2: sorted input matches the merge
    let mut merged: Vec<i64> = a.iter().chain(&b).copied().collect();
    merged.sort_unstable();
    let expected = (merged[n - 1] as f64 + merged[n] as f64) / 2.0;
    assert_eq!(median_of_sorted_pair(&a, &b), Some(expected));
});
