// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-case input parsing.
//!
//! Every exercise reads the same outer layout: a case count `T`, then `T`
//! cases in an exercise-specific layout. Tokens are separated by arbitrary
//! whitespace, so line structure does not matter.
//!
//! ```text
//! 2            ← T
//! 6            ← n
//! 7 1 5 3 6 4  ← n values
//! 2
//! 3 9
//! ```
//!
//! | Exercise       | Case layout                          |
//! |----------------|--------------------------------------|
//! | `max-gap`      | `n v1 … vn` (32-bit integers)        |
//! | `median`       | `n a1 … an b1 … bn` (32-bit integers)|
//! | `majority`     | `n v1 … vn` (32-bit integers)        |
//! | `peak`         | `n v1 … vn` (32-bit integers)        |
//! | `tree-min`     | `n v1 … vn` (floats)                 |
//! | `closest-pair` | `n x1 y1 … xn yn` (floats)           |
//! | `karatsuba`    | `x y` (decimal digit strings)        |

use std::fmt;
use std::str::{FromStr, SplitAsciiWhitespace};

use serde::Serialize;

use crate::types::Point;

/// Which exercise a case belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exercise {
    MaxGap,
    Median,
    Majority,
    Peak,
    TreeMin,
    ClosestPair,
    Karatsuba,
}

impl Exercise {
    pub const ALL: [Exercise; 7] = [
        Exercise::MaxGap,
        Exercise::Median,
        Exercise::Majority,
        Exercise::Peak,
        Exercise::TreeMin,
        Exercise::ClosestPair,
        Exercise::Karatsuba,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Exercise::MaxGap => "max-gap",
            Exercise::Median => "median",
            Exercise::Majority => "majority",
            Exercise::Peak => "peak",
            Exercise::TreeMin => "tree-min",
            Exercise::ClosestPair => "closest-pair",
            Exercise::Karatsuba => "karatsuba",
        }
    }

    /// Whether the solver can record a recursion trace.
    pub fn is_traceable(&self) -> bool {
        matches!(self, Exercise::ClosestPair | Exercise::Karatsuba)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One parsed case, ready to solve.
#[derive(Debug, Clone, PartialEq)]
pub enum Case {
    MaxGap(Vec<i64>),
    Median(Vec<i64>, Vec<i64>),
    Majority(Vec<i64>),
    Peak(Vec<i64>),
    TreeMin(Vec<f64>),
    ClosestPair(Vec<Point>),
    Karatsuba(String, String),
}

impl Case {
    pub fn exercise(&self) -> Exercise {
        match self {
            Case::MaxGap(_) => Exercise::MaxGap,
            Case::Median(..) => Exercise::Median,
            Case::Majority(_) => Exercise::Majority,
            Case::Peak(_) => Exercise::Peak,
            Case::TreeMin(_) => Exercise::TreeMin,
            Case::ClosestPair(_) => Exercise::ClosestPair,
            Case::Karatsuba(..) => Exercise::Karatsuba,
        }
    }

    /// Input size, for diagnostics.
    pub fn size(&self) -> usize {
        match self {
            Case::MaxGap(v) | Case::Majority(v) | Case::Peak(v) => v.len(),
            Case::Median(a, b) => a.len() + b.len(),
            Case::TreeMin(v) => v.len(),
            Case::ClosestPair(p) => p.len(),
            Case::Karatsuba(x, y) => x.len().max(y.len()),
        }
    }
}

/// Error type for malformed input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input ended while a token was still expected.
    UnexpectedEnd { expected: &'static str, token: usize },
    /// A token failed to parse as the expected kind.
    InvalidToken {
        token: usize,
        found: String,
        expected: &'static str,
    },
    /// Tokens left over after the last case.
    TrailingInput { token: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnexpectedEnd { expected, token } => {
                write!(f, "input ended at token {}, expected {}", token, expected)
            }
            InputError::InvalidToken {
                token,
                found,
                expected,
            } => write!(f, "token {} '{}' is not {}", token, found, expected),
            InputError::TrailingInput { token } => {
                write!(f, "unexpected trailing input at token {}", token)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Whitespace tokenizer with position tracking for error messages.
pub struct Tokens<'a> {
    iter: SplitAsciiWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            iter: input.split_ascii_whitespace(),
            position: 0,
        }
    }

    /// Next raw token.
    pub fn token(&mut self, expected: &'static str) -> Result<&'a str, InputError> {
        let token = self.iter.next().ok_or(InputError::UnexpectedEnd {
            expected,
            token: self.position,
        })?;
        self.position += 1;
        Ok(token)
    }

    /// Next token parsed as `T`.
    pub fn value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let position = self.position;
        let token = self.token(expected)?;
        token.parse().map_err(|_| InputError::InvalidToken {
            token: position,
            found: token.to_string(),
            expected,
        })
    }

    /// Next `n` tokens parsed as `T`.
    pub fn values<T: FromStr>(
        &mut self,
        n: usize,
        expected: &'static str,
    ) -> Result<Vec<T>, InputError> {
        (0..n).map(|_| self.value(expected)).collect()
    }

    /// Next `n` tokens as 32-bit integers, widened so differences never
    /// overflow.
    pub fn integers(&mut self, n: usize) -> Result<Vec<i64>, InputError> {
        (0..n)
            .map(|_| self.value::<i32>(INTEGER).map(i64::from))
            .collect()
    }

    /// Fail if any token remains.
    pub fn finish(mut self) -> Result<(), InputError> {
        match self.iter.next() {
            Some(_) => Err(InputError::TrailingInput {
                token: self.position,
            }),
            None => Ok(()),
        }
    }
}

const COUNT: &str = "a non-negative count";
const INTEGER: &str = "a 32-bit integer";
const NUMBER: &str = "a number";
const OPERAND: &str = "a decimal operand";

/// Parse `T` followed by `T` cases of `exercise`.
///
/// # Example
///
/// ```
/// use dncore::input::{parse_cases, Case, Exercise};
///
/// let cases = parse_cases(Exercise::Majority, "1\n3\n4 4 1\n").unwrap();
/// assert_eq!(cases, vec![Case::Majority(vec![4, 4, 1])]);
/// ```
pub fn parse_cases(exercise: Exercise, input: &str) -> Result<Vec<Case>, InputError> {
    let mut tokens = Tokens::new(input);
    let count: usize = tokens.value(COUNT)?;
    let cases = (0..count)
        .map(|_| parse_case(exercise, &mut tokens))
        .collect::<Result<Vec<_>, _>>()?;
    tokens.finish()?;
    Ok(cases)
}

/// Parse a single case body.
pub fn parse_case(exercise: Exercise, tokens: &mut Tokens<'_>) -> Result<Case, InputError> {
    let case = match exercise {
        Exercise::MaxGap => {
            let n = tokens.value(COUNT)?;
            Case::MaxGap(tokens.integers(n)?)
        }
        Exercise::Median => {
            let n = tokens.value(COUNT)?;
            let a = tokens.integers(n)?;
            let b = tokens.integers(n)?;
            Case::Median(a, b)
        }
        Exercise::Majority => {
            let n = tokens.value(COUNT)?;
            Case::Majority(tokens.integers(n)?)
        }
        Exercise::Peak => {
            let n = tokens.value(COUNT)?;
            Case::Peak(tokens.integers(n)?)
        }
        Exercise::TreeMin => {
            let n = tokens.value(COUNT)?;
            Case::TreeMin(tokens.values(n, NUMBER)?)
        }
        Exercise::ClosestPair => {
            let n: usize = tokens.value(COUNT)?;
            let points = (0..n)
                .map(|_| Ok(Point::new(tokens.value(NUMBER)?, tokens.value(NUMBER)?)))
                .collect::<Result<Vec<_>, InputError>>()?;
            Case::ClosestPair(points)
        }
        Exercise::Karatsuba => {
            let x = tokens.token(OPERAND)?.to_string();
            let y = tokens.token(OPERAND)?.to_string();
            Case::Karatsuba(x, y)
        }
    };
    Ok(case)
}
