// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types shared by the divide-and-conquer solvers.
//!
//! Every solver works on an immutable slice and an index range into it. The
//! composite values each recursion level hands back to its parent live in the
//! solver modules themselves; this file holds only what crosses module and
//! crate boundaries: the numeric bound, answer records, and points.

use serde::Serialize;
use std::fmt;
use std::ops::Sub;

/// Totally-ordered-enough numeric values the solvers accept.
///
/// Integers are totally ordered. Floats are not (NaN), which is why the
/// bound is `PartialOrd`: a NaN in the input is a precondition violation and
/// yields a well-defined but meaningless answer, never a panic.
pub trait Numeric:
    Copy + PartialOrd + Sub<Output = Self> + fmt::Debug + fmt::Display + Send + Sync
{
    /// Lossy widening used when averaging two values.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, isize, f32, f64);

/// Buy/sell index pair with the gap it realizes.
///
/// INVARIANT: `buy < sell`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GapPair<T> {
    pub buy: usize,
    pub sell: usize,
    /// `values[sell] - values[buy]`
    pub diff: T,
}

impl<T> fmt::Display for GapPair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.buy, self.sell)
    }
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance. Exact-input ties give bit-identical results.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Closest pair of input points, by input index.
///
/// INVARIANT: `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClosestPair {
    pub first: usize,
    pub second: usize,
    pub distance: f64,
}

impl ClosestPair {
    /// Build with indices in ascending order.
    pub fn new(a: usize, b: usize, distance: f64) -> Self {
        Self {
            first: a.min(b),
            second: a.max(b),
            distance,
        }
    }
}

impl fmt::Display for ClosestPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.second, self.distance)
    }
}
