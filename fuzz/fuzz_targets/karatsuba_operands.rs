// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Karatsuba operand parsing and multiplication.
//!
//! Any string pair must either be rejected with an error or produce a
//! canonical product. Products of values that fit in u64 are checked
//! against native arithmetic.

#![no_main]

use dncore::karatsuba;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (x, y) = data;

    // Property 1: no panic on arbitrary strings
    let Ok(product) = karatsuba(&x, &y) else {
        return;
    };

    // Property 2: canonical decimal
    assert!(product.bytes().all(|b| b.is_ascii_digit()));
    assert!(product == "0" || !product.starts_with('0'));

    // Property 3: commutative
    assert_eq!(karatsuba(&y, &x).ok(), Some(product.clone()));

    // Property 4: matches native arithmetic when it fits
    if let (Ok(a), Ok(b)) = (x.parse::<u64>(), y.parse::<u64>()) {
        assert_eq!(product, (u128::from(a) * u128::from(b)).to_string());
    }
});
