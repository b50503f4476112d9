// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Solving parsed cases and formatting their answers.
//!
//! Cases share no state, so a batch can be solved in parallel; results are
//! always returned in input order regardless.
//!
//! # Output formats
//!
//! | Exercise       | Found              | Not found |
//! |----------------|--------------------|-----------|
//! | `max-gap`      | `buy sell`         | `-1 -1`   |
//! | `median`       | `2.5`              | `NaN`     |
//! | `majority`     | value              | `NO`      |
//! | `peak`         | index              | `-1`      |
//! | `tree-min`     | `1.5`              | `inf`     |
//! | `closest-pair` | `first second d`   | `-1`      |
//! | `karatsuba`    | product            | n/a       |

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::input::{Case, Exercise};
use crate::trace::{Trace, TraceEvent};
use crate::types::{ClosestPair, GapPair};
use crate::verify::{GapSequence, InvariantError, PeakSequence, SortedPair, SortedSequence};

/// Knobs for solving a batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    /// Validate preconditions before solving; violations become errors.
    pub strict: bool,
    /// Record recursion traces for the solvers that support them.
    pub trace: bool,
    /// Solve cases on the rayon pool.
    pub parallel: bool,
}

/// The answer to one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "exercise", rename_all = "kebab-case")]
pub enum Answer {
    MaxGap { pair: Option<GapPair<i64>> },
    Median { median: Option<f64> },
    Majority { value: Option<i64> },
    Peak { index: Option<usize> },
    TreeMin { value: Option<f64> },
    ClosestPair { pair: Option<ClosestPair> },
    Karatsuba { product: String },
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::MaxGap { pair: Some(p) } => write!(f, "{}", p),
            Answer::MaxGap { pair: None } => f.write_str("-1 -1"),
            Answer::Median { median } => write!(f, "{}", median.unwrap_or(f64::NAN)),
            Answer::Majority { value: Some(v) } => write!(f, "{}", v),
            Answer::Majority { value: None } => f.write_str("NO"),
            Answer::Peak { index: Some(i) } => write!(f, "{}", i),
            Answer::Peak { index: None } => f.write_str("-1"),
            Answer::TreeMin { value } => write!(f, "{}", value.unwrap_or(f64::INFINITY)),
            Answer::ClosestPair { pair: Some(p) } => write!(f, "{}", p),
            Answer::ClosestPair { pair: None } => f.write_str("-1"),
            Answer::Karatsuba { product } => f.write_str(product),
        }
    }
}

/// A solved case with its optional recursion trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solved {
    pub case: usize,
    pub exercise: Exercise,
    pub answer: Answer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceEvent>>,
}

/// A case that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseError {
    pub case: usize,
    pub source: InvariantError,
}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case {}: {}", self.case + 1, self.source)
    }
}

impl std::error::Error for CaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Solve one case.
///
/// Only operand parsing (karatsuba) and `strict` validation can fail.
///
/// # Example
///
/// ```
/// use dncore::batch::{solve, SolveOptions};
/// use dncore::input::Case;
///
/// let solved = solve(0, &Case::MaxGap(vec![7, 1, 5, 3, 6, 4]), SolveOptions::default()).unwrap();
/// assert_eq!(solved.answer.to_string(), "1 4");
/// ```
pub fn solve(index: usize, case: &Case, options: SolveOptions) -> Result<Solved, CaseError> {
    let mut trace = if options.trace && case.exercise().is_traceable() {
        Trace::enabled()
    } else {
        Trace::disabled()
    };
    let answer = answer(case, options.strict, &mut trace).map_err(|source| CaseError {
        case: index,
        source,
    })?;
    Ok(Solved {
        case: index,
        exercise: case.exercise(),
        answer,
        trace: trace.is_enabled().then(|| trace.into_events()),
    })
}

fn answer(case: &Case, strict: bool, trace: &mut Trace) -> Result<Answer, InvariantError> {
    let answer = match case {
        Case::MaxGap(values) if strict => Answer::MaxGap {
            pair: Some(GapSequence::new(values.clone())?.max_gap()),
        },
        Case::MaxGap(values) => Answer::MaxGap {
            pair: crate::max_gap::max_gap(values),
        },
        Case::Median(a, b) if strict => Answer::Median {
            median: Some(SortedPair::new(a.clone(), b.clone())?.median()),
        },
        Case::Median(a, b) => Answer::Median {
            median: crate::median::median_of_sorted_pair(a, b),
        },
        Case::Majority(values) => Answer::Majority {
            value: crate::majority::majority(values),
        },
        Case::Peak(values) if strict => Answer::Peak {
            index: PeakSequence::new(values.clone())?.find_peak(),
        },
        Case::Peak(values) => Answer::Peak {
            index: crate::peak::find_peak(values),
        },
        Case::TreeMin(values) if strict => Answer::TreeMin {
            value: SortedSequence::new(values.clone())?.tree_min(),
        },
        Case::TreeMin(values) => Answer::TreeMin {
            value: crate::tree::tree_min(values),
        },
        Case::ClosestPair(points) => Answer::ClosestPair {
            pair: crate::closest_pair::closest_pair_traced(points, trace),
        },
        Case::Karatsuba(x, y) => Answer::Karatsuba {
            product: crate::karatsuba::karatsuba_traced(x, y, trace)?,
        },
    };
    Ok(answer)
}

/// Outcome of one case with its wall-clock solve time.
#[derive(Debug, Clone)]
pub struct Timed {
    pub result: Result<Solved, CaseError>,
    pub elapsed: Duration,
}

fn solve_timed(index: usize, case: &Case, options: SolveOptions) -> Timed {
    let started = Instant::now();
    let result = solve(index, case, options);
    Timed {
        result,
        elapsed: started.elapsed(),
    }
}

/// Solve every case, preserving input order.
///
/// Each case succeeds or fails on its own; one bad case does not stop the
/// batch.
pub fn solve_all(cases: &[Case], options: SolveOptions) -> Vec<Result<Solved, CaseError>> {
    solve_all_timed(cases, options)
        .into_iter()
        .map(|timed| timed.result)
        .collect()
}

/// [`solve_all`] with per-case timings.
pub fn solve_all_timed(cases: &[Case], options: SolveOptions) -> Vec<Timed> {
    #[cfg(feature = "parallel")]
    {
        if options.parallel {
            use rayon::prelude::*;
            return cases
                .par_iter()
                .enumerate()
                .map(|(i, case)| solve_timed(i, case, options))
                .collect();
        }
    }

    cases
        .iter()
        .enumerate()
        .map(|(i, case)| solve_timed(i, case, options))
        .collect()
}
