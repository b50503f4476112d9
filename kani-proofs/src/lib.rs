// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the dncore search loops.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Peak search never indexes out of bounds** for any input up to 6 values
//! 2. **Peak answers are strict local peaks** at interior indices
//! 3. **Unimodal inputs always yield their summit**
//! 4. **Median partition search terminates with the merged middle pair**
//!    for any two sorted arrays of equal length up to 3
//! 5. **Balanced tree height equals the bit length of n** for n up to 31

// ============================================================================
// Peak search (copied from src/peak.rs)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slope {
    Rising,
    Falling,
    Peak,
    Other,
}

pub fn slope_at(values: &[i32], m: usize) -> Slope {
    let (prev, cur, next) = (values[m - 1], values[m], values[m + 1]);
    if prev < cur && cur < next {
        Slope::Rising
    } else if prev > cur && cur > next {
        Slope::Falling
    } else if prev < cur && cur > next {
        Slope::Peak
    } else {
        Slope::Other
    }
}

pub fn find_peak(values: &[i32]) -> Option<usize> {
    if values.len() < 3 {
        return None;
    }
    let mut l = 1usize;
    let mut r = values.len() - 2;
    while l <= r {
        let m = l + (r - l) / 2;
        match slope_at(values, m) {
            Slope::Rising => l = m + 1,
            Slope::Falling => r = m - 1,
            Slope::Peak => return Some(m),
            Slope::Other => return None,
        }
    }
    None
}

// ============================================================================
// Median partition search (copied from src/median.rs)
// ============================================================================

fn not_above(left: Option<i32>, right: Option<i32>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => l <= r,
        _ => true,
    }
}

/// Middle pair `(low, high)` of the merged arrays; the median is their mean.
pub fn median_pair(a: &[i32], b: &[i32]) -> Option<(i32, i32)> {
    let n = a.len();
    if n == 0 || b.len() != n {
        return None;
    }
    let mut l = 0usize;
    let mut r = n;
    while l <= r {
        let m1 = l + (r - l) / 2;
        let m2 = n - m1;

        let la = m1.checked_sub(1).map(|i| a[i]);
        let ra = a.get(m1).copied();
        let lb = m2.checked_sub(1).map(|i| b[i]);
        let rb = b.get(m2).copied();

        if not_above(la, rb) && not_above(lb, ra) {
            let low = match (la, lb) {
                (Some(x), Some(y)) => x.max(y),
                (x, None) => x?,
                (None, y) => y?,
            };
            let high = match (ra, rb) {
                (Some(x), Some(y)) => x.min(y),
                (x, None) => x?,
                (None, y) => y?,
            };
            return Some((low, high));
        }

        if !not_above(la, rb) {
            r = m1 - 1;
        } else {
            l = m1 + 1;
        }
    }
    None
}

// ============================================================================
// Balanced tree shape (copied from src/tree.rs)
// ============================================================================

/// Height of the tree built by splitting `[l, r]` at its midpoint.
pub fn build_height(l: usize, r: usize) -> usize {
    if l > r {
        return 0;
    }
    let m = l + (r - l) / 2;
    let left = if m > l { build_height(l, m - 1) } else { 0 };
    let right = build_height(m + 1, r);
    1 + left.max(right)
}

pub fn tree_height(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        build_height(0, n - 1)
    }
}

// ============================================================================
// KANI PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify the peak search stays in bounds and only reports real peaks.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_peak_sound() {
        let values: [i32; 6] = kani::any();
        let len: usize = kani::any_where(|&l: &usize| l <= 6);
        let slice = &values[..len];

        if let Some(m) = find_peak(slice) {
            kani::assert(m >= 1 && m + 1 < len, "Peak must be interior");
            kani::assert(
                slice[m - 1] < slice[m] && slice[m] > slice[m + 1],
                "Reported index must be a strict local peak",
            );
        }
    }

    /// Verify a strictly rising then strictly falling input yields its summit.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_peak_unimodal() {
        const N: usize = 6;
        let top: usize = kani::any_where(|&t: &usize| t >= 1 && t + 1 < N);
        let steps: [u8; N] = kani::any();

        let mut values = [0i32; N];
        for i in 1..N {
            let step = i32::from(steps[i]) + 1;
            values[i] = if i <= top {
                values[i - 1] + step
            } else {
                values[i - 1] - step
            };
        }

        kani::assert(find_peak(&values) == Some(top), "Summit must be found");
    }

    /// Verify the partition search agrees with a full merge.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_median_pair_matches_merge() {
        let a: [i32; 3] = kani::any();
        let b: [i32; 3] = kani::any();
        let n: usize = kani::any_where(|&n: &usize| n >= 1 && n <= 3);
        kani::assume(a[..n].windows(2).all(|w| w[0] <= w[1]));
        kani::assume(b[..n].windows(2).all(|w| w[0] <= w[1]));

        // Two-pointer merge of the sorted prefixes.
        let mut merged = [0i32; 6];
        let (mut i, mut j) = (0usize, 0usize);
        for k in 0..2 * n {
            if j >= n || (i < n && a[i] <= b[j]) {
                merged[k] = a[i];
                i += 1;
            } else {
                merged[k] = b[j];
                j += 1;
            }
        }

        let result = median_pair(&a[..n], &b[..n]);
        kani::assert(result.is_some(), "Sorted equal-length inputs always have a median");
        let (low, high) = result.unwrap();
        kani::assert(low == merged[n - 1], "Low half ends at merged[n-1]");
        kani::assert(high == merged[n], "High half starts at merged[n]");
    }

    /// Verify the midpoint build produces a tree of minimal height.
    #[kani::proof]
    #[kani::unwind(33)]
    fn verify_tree_height_is_bit_length() {
        let n: usize = kani::any_where(|&n: &usize| n <= 31);
        let bits = (usize::BITS - n.leading_zeros()) as usize;
        kani::assert(tree_height(n) == bits, "Height must be ceil(log2(n + 1))");
    }
}
