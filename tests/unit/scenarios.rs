//! Concrete scenarios for every solver, through the public API.

use dncore::testing::{random_digits, random_points, random_sequence, with_majority};
use dncore::{
    closest_pair, find_peak, karatsuba, majority, max_gap, median_of_sorted_pair, slope_at,
    tree_min, BalancedTree, Point, Slope,
};

use crate::common::{assert_gap_well_formed, assert_is_peak};

// ============================================================================
// MAX GAP
// ============================================================================

#[test]
fn test_max_gap_reference_scenario() {
    let values = [7i64, 1, 5, 3, 6, 4];
    let pair = max_gap(&values).unwrap();
    assert_gap_well_formed(&values, &pair);
    assert_eq!((pair.buy, pair.sell, pair.diff), (1, 4, 5));
    assert_eq!(pair.to_string(), "1 4");
}

#[test]
fn test_max_gap_strictly_falling_prices() {
    let values = [9i64, 7, 4, 1];
    let pair = max_gap(&values).unwrap();
    assert_gap_well_formed(&values, &pair);
    assert_eq!(pair.diff, -2);
}

#[test]
fn test_max_gap_floats() {
    let values = [2.5f64, 1.0, 4.25, 0.5];
    let pair = max_gap(&values).unwrap();
    assert_eq!((pair.buy, pair.sell), (1, 2));
    assert_eq!(pair.diff, 3.25);
}

#[test]
fn test_max_gap_large_input() {
    let values = random_sequence(10_000, -1_000_000, 1_000_000, 11);
    let pair = max_gap(&values).unwrap();
    assert_gap_well_formed(&values, &pair);
}

// ============================================================================
// MEDIAN
// ============================================================================

#[test]
fn test_median_reference_scenario() {
    assert_eq!(median_of_sorted_pair(&[1, 3], &[2, 4]), Some(2.5));
}

#[test]
fn test_median_interleaved_and_disjoint() {
    assert_eq!(median_of_sorted_pair(&[1, 2, 3], &[4, 5, 6]), Some(3.5));
    assert_eq!(median_of_sorted_pair(&[4, 5, 6], &[1, 2, 3]), Some(3.5));
    assert_eq!(median_of_sorted_pair(&[1, 12, 15, 26, 38], &[2, 13, 17, 30, 45]), Some(16.0));
}

#[test]
fn test_median_all_equal() {
    assert_eq!(median_of_sorted_pair(&[5, 5, 5], &[5, 5, 5]), Some(5.0));
}

#[test]
fn test_median_negative_floats() {
    assert_eq!(median_of_sorted_pair(&[-3.5, -1.0], &[-2.0, 0.5]), Some(-1.5));
}

// ============================================================================
// MAJORITY
// ============================================================================

#[test]
fn test_majority_reference_scenario() {
    assert_eq!(majority(&[3, 3, 4, 2, 3, 3, 2, 2, 3]), Some(3));
}

#[test]
fn test_majority_none() {
    assert_eq!(majority(&[3, 3, 4, 2, 4, 4, 2, 4]), None);
    assert_eq!(majority::<i64>(&[]), None);
}

#[test]
fn test_majority_single_and_pair() {
    assert_eq!(majority(&[8]), Some(8));
    assert_eq!(majority(&[8, 8]), Some(8));
    assert_eq!(majority(&[8, 9]), None);
}

#[test]
fn test_majority_generated() {
    assert_eq!(majority(&with_majority(1001, 77, 501, 5)), Some(77));
    assert_eq!(majority(&with_majority(1000, 77, 500, 5)), None);
}

// ============================================================================
// PEAK
// ============================================================================

#[test]
fn test_peak_reference_scenario() {
    let values = [1i64, 3, 20, 4, 1, 0];
    let m = find_peak(&values).unwrap();
    assert_is_peak(&values, m);
    assert_eq!(m, 2);
}

#[test]
fn test_peak_multiple_peaks() {
    // Peaks at 1 and 6; the search walks right from the midpoint.
    let values = [0i64, 9, 1, 2, 3, 4, 7, 5, 0];
    let m = find_peak(&values).unwrap();
    assert_is_peak(&values, m);
    assert_eq!(m, 6);
}

#[test]
fn test_peak_plateau_is_not_found() {
    assert_eq!(find_peak(&[1, 2, 2, 2, 1]), None);
}

#[test]
fn test_peak_valley_at_midpoint_is_not_found() {
    assert_eq!(slope_at(&[5, 1, 7], 1), Slope::Other);
    assert_eq!(find_peak(&[0, 5, 1, 7, 2]), None);
}

#[test]
fn test_slope_classification() {
    assert_eq!(slope_at(&[1, 2, 3], 1), Slope::Rising);
    assert_eq!(slope_at(&[3, 2, 1], 1), Slope::Falling);
    assert_eq!(slope_at(&[1, 3, 2], 1), Slope::Peak);
}

// ============================================================================
// TREE MIN
// ============================================================================

#[test]
fn test_tree_min_sorted_floats() {
    assert_eq!(tree_min(&[0.5, 1.5, 2.5, 3.5, 4.5]), Some(0.5));
}

#[test]
fn test_tree_min_empty() {
    assert_eq!(tree_min::<f64>(&[]), None);
    assert!(BalancedTree::<f64>::from_sorted(&[]).is_empty());
}

#[test]
fn test_tree_structure_of_seven() {
    let tree = BalancedTree::from_sorted(&[1, 2, 3, 4, 5, 6, 7]);
    let root = tree.root().unwrap();
    assert_eq!(root.value, 4);
    assert_eq!(root.left.as_ref().unwrap().value, 2);
    assert_eq!(root.right.as_ref().unwrap().value, 6);
    assert_eq!(tree.height(), 3);
}

#[test]
fn test_tree_is_deterministic() {
    let values: Vec<f64> = (0..100).map(f64::from).collect();
    assert_eq!(
        BalancedTree::from_sorted(&values),
        BalancedTree::from_sorted(&values)
    );
}

// ============================================================================
// CLOSEST PAIR
// ============================================================================

#[test]
fn test_closest_pair_classic_set() {
    let points = [
        Point::new(2.0, 3.0),
        Point::new(12.0, 30.0),
        Point::new(40.0, 50.0),
        Point::new(5.0, 1.0),
        Point::new(12.0, 10.0),
        Point::new(3.0, 4.0),
    ];
    let best = closest_pair(&points).unwrap();
    assert_eq!((best.first, best.second), (0, 5));
    assert!((best.distance - 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_closest_pair_random_cloud() {
    let points = random_points(2_000, 1_000.0, 21);
    let best = closest_pair(&points).unwrap();
    let check = points[best.first].distance(&points[best.second]);
    assert_eq!(check, best.distance);
    // Spot check against a handful of pairs.
    for i in 0..50 {
        for j in i + 1..50 {
            assert!(points[i].distance(&points[j]) >= best.distance);
        }
    }
}

// ============================================================================
// KARATSUBA
// ============================================================================

#[test]
fn test_karatsuba_powers_of_ten() {
    assert_eq!(karatsuba("1000", "1000").unwrap(), "1000000");
    assert_eq!(karatsuba("1", "1").unwrap(), "1");
}

#[test]
fn test_karatsuba_long_operands() {
    let x = random_digits(300, 1);
    let y = random_digits(257, 2);
    let product = karatsuba(&x, &y).unwrap();
    // A 300-digit by 257-digit product has 556 or 557 digits.
    assert!(product.len() == 556 || product.len() == 557);
    assert_eq!(product, karatsuba(&y, &x).unwrap());
}

#[test]
fn test_karatsuba_squares_of_repunits() {
    assert_eq!(karatsuba("111111111", "111111111").unwrap(), "12345678987654321");
}
