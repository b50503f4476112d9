// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for closest pair.
//!
//! Small integer coordinates give exact distances, many duplicates and many
//! shared x values, which is where split handling goes wrong.

#![no_main]

use dncore::{closest_pair, Point};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|coords: Vec<(i8, i8)>| {
    let points: Vec<Point> = coords
        .iter()
        .map(|&(x, y)| Point::new(f64::from(x), f64::from(y)))
        .collect();

    let Some(best) = closest_pair(&points) else {
        assert!(points.len() < 2);
        return;
    };

    assert!(best.first < best.second && best.second < points.len());
    assert_eq!(points[best.first].distance(&points[best.second]), best.distance);

    if points.len() <= 200 {
        for i in 0..points.len() {
            for j in i + 1..points.len() {
                assert!(points[i].distance(&points[j]) >= best.distance);
            }
        }
    }
});
