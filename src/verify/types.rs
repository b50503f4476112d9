// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make precondition violations unrepresentable.
//!
//! The solvers themselves never validate: they assume sorted input where
//! they need it, distinct neighbours where they need them, and enough
//! elements to form an answer. Wrap raw input in one of these types at the
//! boundary and the check is paid once, upfront. After that the wrapped
//! slice can be handed to a solver with the precondition guaranteed.
//!
//! | Type             | Guarantees                                     | Feeds            |
//! |------------------|------------------------------------------------|------------------|
//! | `SortedSequence` | non-decreasing, no NaN                         | median, tree-min |
//! | `SortedPair`     | two `SortedSequence`s of equal length          | median           |
//! | `GapSequence`    | at least two values                            | max-gap          |
//! | `PeakSequence`   | at least three values, distinct neighbours     | peak             |
//!
//! # Example
//!
//! ```
//! use dncore::verify::{InvariantError, SortedSequence};
//!
//! assert!(SortedSequence::new(vec![1, 2, 2, 5]).is_ok());
//! assert_eq!(
//!     SortedSequence::new(vec![3, 1]).unwrap_err(),
//!     InvariantError::Unsorted { position: 1 }
//! );
//! ```

use std::fmt;

use crate::types::{GapPair, Numeric};

/// Error type for precondition violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `values[position - 1] > values[position]`.
    Unsorted { position: usize },
    /// Value at `position` is not comparable to itself (NaN).
    Incomparable { position: usize },
    /// Fewer values than the solver needs.
    TooShort { len: usize, min: usize },
    /// Two sequences that must match in length do not.
    LengthMismatch { left: usize, right: usize },
    /// `values[position] == values[position + 1]`.
    EqualNeighbours { position: usize },
    /// Decimal operand contains a non-digit character.
    NotADigit { position: usize, found: char },
    /// Decimal operand is the empty string.
    EmptyNumber,
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::Unsorted { position } => {
                write!(f, "sequence not sorted at position {}", position)
            }
            InvariantError::Incomparable { position } => {
                write!(f, "value at position {} is not comparable (NaN)", position)
            }
            InvariantError::TooShort { len, min } => {
                write!(f, "sequence has {} values, need at least {}", len, min)
            }
            InvariantError::LengthMismatch { left, right } => {
                write!(f, "sequence lengths differ: {} != {}", left, right)
            }
            InvariantError::EqualNeighbours { position } => {
                write!(
                    f,
                    "values at positions {} and {} are equal",
                    position,
                    position + 1
                )
            }
            InvariantError::NotADigit { position, found } => {
                write!(f, "'{}' at position {} is not a decimal digit", found, position)
            }
            InvariantError::EmptyNumber => write!(f, "empty number"),
        }
    }
}

impl std::error::Error for InvariantError {}

/// Reject values that are not comparable to themselves.
fn check_comparable<T: PartialOrd>(values: &[T]) -> Result<(), InvariantError> {
    match values.iter().position(|v| v.partial_cmp(v).is_none()) {
        Some(position) => Err(InvariantError::Incomparable { position }),
        None => Ok(()),
    }
}

/// A non-decreasing sequence with no incomparable values.
///
/// # Invariants (enforced at construction)
/// - For all `i < j`: `values[i] <= values[j]`
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSequence<T> {
    values: Vec<T>,
}

impl<T: PartialOrd> SortedSequence<T> {
    /// Validate an existing vector.
    pub fn new(values: Vec<T>) -> Result<Self, InvariantError> {
        check_comparable(&values)?;
        for i in 1..values.len() {
            if values[i - 1] > values[i] {
                return Err(InvariantError::Unsorted { position: i });
            }
        }
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl<T: Copy + PartialOrd> SortedSequence<T> {
    /// Descent over the balanced tree; exact minimum for sorted input.
    pub fn tree_min(&self) -> Option<T> {
        crate::tree::tree_min(&self.values)
    }
}

/// Two sorted sequences of equal, non-zero length.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedPair<T> {
    a: SortedSequence<T>,
    b: SortedSequence<T>,
}

impl<T: Numeric> SortedPair<T> {
    pub fn new(a: Vec<T>, b: Vec<T>) -> Result<Self, InvariantError> {
        if a.len() != b.len() {
            return Err(InvariantError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        if a.is_empty() {
            return Err(InvariantError::TooShort { len: 0, min: 1 });
        }
        Ok(Self {
            a: SortedSequence::new(a)?,
            b: SortedSequence::new(b)?,
        })
    }

    /// Median of the merged order. Always defined for a validated pair.
    pub fn median(&self) -> f64 {
        crate::median::median_of_sorted_pair(self.a.as_slice(), self.b.as_slice())
            .unwrap_or(f64::NAN)
    }
}

/// A sequence long enough to contain a buy/sell pair.
#[derive(Debug, Clone, PartialEq)]
pub struct GapSequence<T> {
    values: Vec<T>,
}

impl<T: Numeric> GapSequence<T> {
    pub fn new(values: Vec<T>) -> Result<Self, InvariantError> {
        if values.len() < 2 {
            return Err(InvariantError::TooShort {
                len: values.len(),
                min: 2,
            });
        }
        check_comparable(&values)?;
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Best pair. Always defined for a validated sequence.
    pub fn max_gap(&self) -> GapPair<T> {
        match crate::max_gap::max_gap(&self.values) {
            Some(pair) => pair,
            // unreachable: len >= 2 always yields a crossing pair
            None => GapPair {
                buy: 0,
                sell: 1,
                diff: self.values[1] - self.values[0],
            },
        }
    }
}

/// A sequence of at least three values with distinct neighbours.
///
/// Distinct neighbours rule out plateaus; the search may still stop on a
/// valley, which is a property of the data rather than a malformed input.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakSequence<T> {
    values: Vec<T>,
}

impl<T: PartialOrd> PeakSequence<T> {
    pub fn new(values: Vec<T>) -> Result<Self, InvariantError> {
        if values.len() < 3 {
            return Err(InvariantError::TooShort {
                len: values.len(),
                min: 3,
            });
        }
        check_comparable(&values)?;
        if let Some(position) = values.windows(2).position(|w| w[0] == w[1]) {
            return Err(InvariantError::EqualNeighbours { position });
        }
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn find_peak(&self) -> Option<usize> {
        crate::peak::find_peak(&self.values)
    }
}
