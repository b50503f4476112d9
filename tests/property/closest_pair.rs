//! Closest pair properties.

use dncore::{closest_pair, closest_pair_traced, Point, Trace};
use proptest::prelude::*;

use crate::oracles::oracle_closest_distance;

/// Integer grid points: exact distances, frequent shared x and duplicates.
fn grid_points_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-30i32..30, -30i32..30), 2..120).prop_map(|coords| {
        coords
            .into_iter()
            .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
            .collect()
    })
}

proptest! {
    /// Property: the reported distance equals the brute-force minimum.
    #[test]
    fn prop_closest_pair_matches_oracle(points in grid_points_strategy()) {
        let best = closest_pair(&points).expect("at least two points");
        prop_assert_eq!(Some(best.distance), oracle_closest_distance(&points));
    }

    /// Property: the reported indices realize the reported distance.
    #[test]
    fn prop_closest_pair_indices_consistent(points in grid_points_strategy()) {
        let best = closest_pair(&points).unwrap();
        prop_assert!(best.first < best.second);
        prop_assert!(best.second < points.len());
        prop_assert_eq!(points[best.first].distance(&points[best.second]), best.distance);
    }

    /// Property: tracing never changes the answer.
    #[test]
    fn prop_trace_is_transparent(points in grid_points_strategy()) {
        let mut trace = Trace::enabled();
        prop_assert_eq!(closest_pair_traced(&points, &mut trace), closest_pair(&points));
        prop_assert!(!trace.is_empty());
    }
}
