// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the multi-case input reader.
//!
//! Input text comes straight from users. Parsing must return Ok or a typed
//! InputError for every byte string, and parsed cases must solve without
//! panicking in both lenient and strict mode.

#![no_main]

use dncore::batch::{solve_all, SolveOptions};
use dncore::input::{parse_cases, Exercise};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, &[u8])| {
    let (selector, bytes) = data;
    let Ok(text) = std::str::from_utf8(bytes) else {
        return;
    };
    let exercise = Exercise::ALL[selector as usize % Exercise::ALL.len()];

    // Property 1: parsing never panics
    let Ok(cases) = parse_cases(exercise, text) else {
        return;
    };

    // Property 2: every parsed case belongs to the requested exercise
    assert!(cases.iter().all(|c| c.exercise() == exercise));

    // Property 3: solving never panics, and strict mode only adds errors
    let lenient = solve_all(&cases, SolveOptions::default());
    let strict = solve_all(
        &cases,
        SolveOptions {
            strict: true,
            ..SolveOptions::default()
        },
    );
    assert_eq!(lenient.len(), cases.len());
    for (l, s) in lenient.iter().zip(&strict) {
        if let (Ok(l), Ok(s)) = (l, s) {
            assert_eq!(l.answer, s.answer, "strict mode changed a valid answer");
        }
    }
});
