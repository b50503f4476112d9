// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Closest pair of points in the plane.
//!
//! # Algorithm Overview
//!
//! ```text
//!   ·        ·   |  ·
//!      ·         |      ·        1. sort indices by x and by y once
//!          ·  ┌──┼──┐            2. split the x order at the middle
//!             │· │ ·│  ·         3. solve each side (≤ 3 points: brute force)
//!    ·        │  │  │            4. d = min(left, right)
//!             └──┼──┘            5. scan the strip |x - mid_x| < d in y order,
//!          mid_x ┘                  comparing each point only to successors
//!                                   less than d above it
//! ```
//!
//! The y order is split by side membership rather than by comparing against
//! `mid_x`, so points sharing the median x coordinate land on the same side
//! as in the x split.
//!
//! # Complexity
//!
//! - Time: O(n log n)
//! - Space: O(n) per level for the partitioned y orders

use crate::trace::{Trace, TraceEvent};
use crate::types::{ClosestPair, Point};

/// Closest pair among `points`, or `None` for fewer than two points.
///
/// # Example
///
/// ```
/// use dncore::{closest_pair, Point};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(5.0, 5.0),
///     Point::new(1.0, 1.0),
/// ];
/// let best = closest_pair(&points).unwrap();
/// assert_eq!((best.first, best.second), (0, 2));
/// ```
pub fn closest_pair(points: &[Point]) -> Option<ClosestPair> {
    closest_pair_traced(points, &mut Trace::disabled())
}

/// [`closest_pair`] recording every recursion step into `trace`.
pub fn closest_pair_traced(points: &[Point], trace: &mut Trace) -> Option<ClosestPair> {
    if points.len() < 2 {
        return None;
    }

    let mut by_x: Vec<usize> = (0..points.len()).collect();
    by_x.sort_by(|&a, &b| {
        points[a]
            .x
            .total_cmp(&points[b].x)
            .then(points[a].y.total_cmp(&points[b].y))
    });
    let mut by_y: Vec<usize> = (0..points.len()).collect();
    by_y.sort_by(|&a, &b| points[a].y.total_cmp(&points[b].y));

    let mut on_left = vec![false; points.len()];
    solve(points, &by_x, &by_y, 0, &mut on_left, trace)
}

fn solve(
    points: &[Point],
    px: &[usize],
    py: &[usize],
    depth: usize,
    on_left: &mut [bool],
    trace: &mut Trace,
) -> Option<ClosestPair> {
    trace.record(|| TraceEvent::Enter {
        depth,
        size: px.len(),
    });

    if px.len() <= 3 {
        let best = brute_force(points, px, depth, trace);
        trace.record(|| TraceEvent::Exit {
            depth,
            distance: distance_of(best),
        });
        return best;
    }

    let mid = px.len() / 2;
    let mid_x = points[px[mid]].x;
    let (lx, rx) = px.split_at(mid);

    for &i in lx {
        on_left[i] = true;
    }
    for &i in rx {
        on_left[i] = false;
    }
    let (ly, ry): (Vec<usize>, Vec<usize>) = py.iter().copied().partition(|&i| on_left[i]);

    let left = solve(points, lx, &ly, depth + 1, on_left, trace);
    let right = solve(points, rx, &ry, depth + 1, on_left, trace);

    let mut best = match (left, right) {
        (Some(l), Some(r)) => Some(if l.distance < r.distance { l } else { r }),
        (l, r) => l.or(r),
    };

    trace.record(|| TraceEvent::MergeStart {
        depth,
        mid_x,
        distance: distance_of(best),
    });

    let d = distance_of(best);
    let strip: Vec<usize> = py
        .iter()
        .copied()
        .filter(|&i| (points[i].x - mid_x).abs() < d)
        .collect();
    trace.record(|| TraceEvent::Strip {
        depth,
        size: strip.len(),
    });

    for (k, &a) in strip.iter().enumerate() {
        for &b in &strip[k + 1..] {
            if points[b].y - points[a].y >= distance_of(best) {
                break;
            }
            trace.record(|| TraceEvent::Compare { depth, a, b });
            let d = points[a].distance(&points[b]);
            if d < distance_of(best) {
                let pair = ClosestPair::new(a, b, d);
                best = Some(pair);
                trace.record(|| best_event(depth, &pair));
            }
        }
    }

    trace.record(|| TraceEvent::MergeEnd {
        depth,
        distance: distance_of(best),
    });
    trace.record(|| TraceEvent::Exit {
        depth,
        distance: distance_of(best),
    });
    best
}

fn brute_force(
    points: &[Point],
    ids: &[usize],
    depth: usize,
    trace: &mut Trace,
) -> Option<ClosestPair> {
    let mut best: Option<ClosestPair> = None;
    for (k, &a) in ids.iter().enumerate() {
        for &b in &ids[k + 1..] {
            trace.record(|| TraceEvent::Compare { depth, a, b });
            let d = points[a].distance(&points[b]);
            if d < distance_of(best) {
                let pair = ClosestPair::new(a, b, d);
                best = Some(pair);
                trace.record(|| best_event(depth, &pair));
            }
        }
    }
    best
}

#[inline]
fn distance_of(best: Option<ClosestPair>) -> f64 {
    best.map_or(f64::INFINITY, |p| p.distance)
}

fn best_event(depth: usize, pair: &ClosestPair) -> TraceEvent {
    TraceEvent::Best {
        depth,
        distance: pair.distance,
        a: pair.first,
        b: pair.second,
    }
}
