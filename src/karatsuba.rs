// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Karatsuba multiplication of arbitrary-length decimal integers.
//!
//! # Algorithm Overview
//!
//! ```text
//! x = 1234, y = 5678, n = 4, m = 2
//!
//!   x = 12|34        y = 56|78            split at m low digits
//!
//!   z0 = 34 · 78                          three recursive products
//!   z1 = (34 + 12) · (78 + 56)            instead of four
//!   z2 = 12 · 56
//!
//!   x·y = z2·10^(2m) + (z1 − z2 − z0)·10^m + z0
//! ```
//!
//! A single-digit operand is multiplied directly. Digits are stored
//! little-endian (`digits[0]` is the ones place), so splitting at `m` low
//! digits is a plain slice split and shifting by `10^k` is a prepend.
//!
//! # Complexity
//!
//! - Time: O(n^log2(3)) ≈ O(n^1.585)
//! - Space: O(n) per recursion level

use std::fmt;
use std::str::FromStr;

use crate::trace::{Trace, TraceEvent};
use crate::verify::InvariantError;

/// Non-negative decimal integer, little-endian digits without leading zeros.
///
/// Zero is the empty digit vector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Digits {
    le: Vec<u8>,
}

impl Digits {
    fn from_le(mut le: Vec<u8>) -> Self {
        while le.last() == Some(&0) {
            le.pop();
        }
        Self { le }
    }

    /// Number of decimal digits; zero has one.
    pub fn width(&self) -> usize {
        self.le.len().max(1)
    }

    pub fn is_zero(&self) -> bool {
        self.le.is_empty()
    }

    /// Product via Karatsuba.
    pub fn multiply(&self, other: &Digits) -> Digits {
        mul(&self.le, &other.le, 0, &mut Trace::disabled())
    }

    /// Product via Karatsuba, recording each step.
    pub fn multiply_traced(&self, other: &Digits, trace: &mut Trace) -> Digits {
        mul(&self.le, &other.le, 0, trace)
    }
}

impl FromStr for Digits {
    type Err = InvariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvariantError::EmptyNumber);
        }
        let mut le = Vec::with_capacity(s.len());
        for (position, c) in s.chars().enumerate() {
            let digit = c
                .to_digit(10)
                .ok_or(InvariantError::NotADigit { position, found: c })?;
            le.push(digit as u8);
        }
        le.reverse();
        Ok(Self::from_le(le))
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.le.is_empty() {
            return f.write_str("0");
        }
        for &d in self.le.iter().rev() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Multiply two decimal strings (leading zeros allowed).
///
/// # Example
///
/// ```
/// use dncore::karatsuba;
///
/// assert_eq!(karatsuba("1234", "5678").unwrap(), "7006652");
/// assert_eq!(karatsuba("000", "42").unwrap(), "0");
/// assert!(karatsuba("12a", "3").is_err());
/// ```
pub fn karatsuba(x: &str, y: &str) -> Result<String, InvariantError> {
    karatsuba_traced(x, y, &mut Trace::disabled())
}

/// [`karatsuba`] recording every call, split, base case and combine.
pub fn karatsuba_traced(x: &str, y: &str, trace: &mut Trace) -> Result<String, InvariantError> {
    let x: Digits = x.parse()?;
    let y: Digits = y.parse()?;
    Ok(x.multiply_traced(&y, trace).to_string())
}

fn mul(x: &[u8], y: &[u8], depth: usize, trace: &mut Trace) -> Digits {
    let x = Digits::from_le(x.to_vec());
    let y = Digits::from_le(y.to_vec());
    trace.record(|| TraceEvent::Call {
        depth,
        x: x.to_string(),
        y: y.to_string(),
    });

    if x.width() == 1 || y.width() == 1 {
        let product = schoolbook(&x.le, &y.le);
        trace.record(|| TraceEvent::Base {
            depth,
            x: x.to_string(),
            y: y.to_string(),
            product: product.to_string(),
        });
        return product;
    }

    let n = x.le.len().max(y.le.len());
    let m = n / 2;
    let (low_x, high_x) = split_low(&x.le, m);
    let (low_y, high_y) = split_low(&y.le, m);
    trace.record(|| TraceEvent::Split {
        depth,
        high_x: Digits::from_le(high_x.to_vec()).to_string(),
        low_x: Digits::from_le(low_x.to_vec()).to_string(),
        high_y: Digits::from_le(high_y.to_vec()).to_string(),
        low_y: Digits::from_le(low_y.to_vec()).to_string(),
        m,
    });

    let z0 = mul(low_x, low_y, depth + 1, trace);
    let z1 = mul(&add(low_x, high_x), &add(low_y, high_y), depth + 1, trace);
    let z2 = mul(high_x, high_y, depth + 1, trace);

    let middle = sub(&sub(&z1.le, &z2.le), &z0.le);
    let result = Digits::from_le(add(
        &add(&shift(&z2.le, 2 * m), &shift(&middle, m)),
        &z0.le,
    ));

    trace.record(|| TraceEvent::Combine {
        depth,
        z0: z0.to_string(),
        z1: z1.to_string(),
        z2: z2.to_string(),
        m,
        result: result.to_string(),
    });
    result
}

/// Split into (low `m` digits, remaining high digits).
fn split_low(le: &[u8], m: usize) -> (&[u8], &[u8]) {
    le.split_at(m.min(le.len()))
}

/// Multiply by `10^k`.
fn shift(le: &[u8], k: usize) -> Vec<u8> {
    if le.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0; k];
    out.extend_from_slice(le);
    out
}

fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u8;
    for i in 0..a.len().max(b.len()) {
        let sum = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// `a - b`; requires `a >= b`.
fn sub(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i8;
    for i in 0..a.len() {
        let mut diff = a[i] as i8 - b.get(i).copied().unwrap_or(0) as i8 - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u8);
    }
    debug_assert!(
        borrow == 0 && b.len() <= a.len(),
        "Contract violation: karatsuba middle term went negative"
    );
    Digits::from_le(out).le
}

/// Direct product, used when one side has a single digit.
fn schoolbook(a: &[u8], b: &[u8]) -> Digits {
    if a.is_empty() || b.is_empty() {
        return Digits::default();
    }
    let mut acc = vec![0u32; a.len() + b.len()];
    for (i, &da) in a.iter().enumerate() {
        for (j, &db) in b.iter().enumerate() {
            acc[i + j] += da as u32 * db as u32;
        }
    }
    let mut carry = 0u32;
    let mut out = Vec::with_capacity(acc.len());
    for v in acc {
        let total = v + carry;
        out.push((total % 10) as u8);
        carry = total / 10;
    }
    while carry > 0 {
        out.push((carry % 10) as u8);
        carry /= 10;
    }
    Digits::from_le(out)
}
