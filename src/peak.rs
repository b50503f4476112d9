// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Strict local peak search by binary narrowing.
//!
//! ```text
//! [1, 3, 20, 4, 1, 0]      search window [1, n-2] = [1, 4]
//!
//!  m = 2: 3 < 20 > 4       peak → return 2
//! ```
//!
//! At each midpoint the triple `(v[m-1], v[m], v[m+1])` decides the move:
//! rising means a peak lies to the right, falling means one lies to the left.
//! Any other shape (a valley, a plateau) ends the search with no answer.
//! This is deliberately not a general extremum finder: the input is expected
//! to rise from its left edge and fall towards its right edge with distinct
//! neighbours.

use crate::verify::contracts::check_peak;

/// Shape of the triple centred on an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slope {
    Rising,
    Falling,
    Peak,
    /// Valley, plateau, or incomparable values.
    Other,
}

/// Classify the triple centred on `m`; requires `1 <= m <= len - 2`.
pub fn slope_at<T: PartialOrd>(values: &[T], m: usize) -> Slope {
    let (prev, cur, next) = (&values[m - 1], &values[m], &values[m + 1]);
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

/// Index `m` with `values[m-1] < values[m] > values[m+1]`, or `None`.
///
/// `None` is returned for fewer than three values, when the narrowing runs
/// out of window, and when it lands on a triple of any other shape.
///
/// # Example
///
/// ```
/// use dncore::find_peak;
///
/// assert_eq!(find_peak(&[1, 3, 20, 4, 1, 0]), Some(2));
/// assert_eq!(find_peak(&[1, 2, 3]), None);
/// ```
pub fn find_peak<T: PartialOrd>(values: &[T]) -> Option<usize> {
    if values.len() < 3 {
        return None;
    }

    let mut l = 1usize;
    let mut r = values.len() - 2;
    while l <= r {
        let m = l + (r - l) / 2;
        match slope_at(values, m) {
            Slope::Rising => l = m + 1,
            // m >= l >= 1, so this cannot underflow
            Slope::Falling => r = m - 1,
            Slope::Peak => {
                check_peak(values, m);
                return Some(m);
            }
            Slope::Other => return None,
        }
    }

    None
}
