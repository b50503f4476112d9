//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! Generators are deterministic in their seed so failures reproduce.

#![doc(hidden)]

use crate::types::Point;

/// Small xorshift generator. Not for anything but test data.
#[derive(Debug, Clone)]
pub struct SeqRng {
    state: u64,
}

impl SeqRng {
    pub fn new(seed: u64) -> Self {
        // xorshift has a fixed point at zero
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform-ish in `[lo, hi]`.
    pub fn range(&mut self, lo: i64, hi: i64) -> i64 {
        let span = (hi - lo) as u64 + 1;
        lo + (self.next_u64() % span) as i64
    }

    /// Uniform-ish in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// `n` values in `[lo, hi]`.
pub fn random_sequence(n: usize, lo: i64, hi: i64, seed: u64) -> Vec<i64> {
    let mut rng = SeqRng::new(seed);
    (0..n).map(|_| rng.range(lo, hi)).collect()
}

/// `n` non-decreasing values in `[lo, hi]`.
pub fn sorted_sequence(n: usize, lo: i64, hi: i64, seed: u64) -> Vec<i64> {
    let mut values = random_sequence(n, lo, hi, seed);
    values.sort_unstable();
    values
}

/// `n` values where `winner` fills `count` scattered positions.
pub fn with_majority(n: usize, winner: i64, count: usize, seed: u64) -> Vec<i64> {
    let mut rng = SeqRng::new(seed);
    let mut values: Vec<i64> = (0..n)
        .map(|_| {
            let v = rng.range(-1_000, 1_000);
            if v == winner {
                v + 1
            } else {
                v
            }
        })
        .collect();
    // Fisher-Yates prefix picks `count` distinct positions
    let mut positions: Vec<usize> = (0..n).collect();
    for i in 0..count.min(n) {
        let j = i + (rng.next_u64() % (n - i) as u64) as usize;
        positions.swap(i, j);
        values[positions[i]] = winner;
    }
    values
}

/// Strictly rising to index `top`, then strictly falling.
pub fn mountain(n: usize, top: usize) -> Vec<i64> {
    (0..n)
        .map(|i| {
            if i <= top {
                i as i64
            } else {
                top as i64 - (i - top) as i64
            }
        })
        .collect()
}

/// `n` points in the square `[0, side)²`.
pub fn random_points(n: usize, side: f64, seed: u64) -> Vec<Point> {
    let mut rng = SeqRng::new(seed);
    (0..n)
        .map(|_| Point::new(rng.unit() * side, rng.unit() * side))
        .collect()
}

/// Decimal string of `n` digits with a non-zero lead.
pub fn random_digits(n: usize, seed: u64) -> String {
    let mut rng = SeqRng::new(seed);
    (0..n)
        .map(|i| {
            let lo = if i == 0 { 1 } else { 0 };
            char::from(b'0' + rng.range(lo, 9) as u8)
        })
        .collect()
}
