//! Balanced tree properties.

use dncore::{tree_min, BalancedTree};
use proptest::prelude::*;

/// ⌊log2 n⌋ + 1, or 0 for n = 0.
fn min_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

proptest! {
    /// Property: sorted input yields its first element.
    #[test]
    fn prop_tree_min_of_sorted(mut values in prop::collection::vec(-1000i64..1000, 1..200)) {
        values.sort_unstable();
        prop_assert_eq!(tree_min(&values), Some(values[0]));
    }

    /// Property: the tree keeps every element, in order, at minimum height.
    #[test]
    fn prop_tree_shape(mut values in prop::collection::vec(-1000i64..1000, 0..200)) {
        values.sort_unstable();
        let tree = BalancedTree::from_sorted(&values);
        prop_assert_eq!(tree.len(), values.len());
        prop_assert_eq!(tree.in_order(), values.clone());
        prop_assert_eq!(tree.height(), min_height(values.len()));
        prop_assert_eq!(tree, BalancedTree::from_sorted(&values));
    }

    /// Property: on any input the descent returns one of the input values.
    #[test]
    fn prop_tree_min_returns_member(values in prop::collection::vec(-50i64..50, 1..100)) {
        let found = tree_min(&values).expect("non-empty input");
        prop_assert!(values.contains(&found));
    }

    /// Property: float input works the same as integer input.
    #[test]
    fn prop_tree_min_floats(mut values in prop::collection::vec(-1e6f64..1e6, 1..100)) {
        values.sort_by(f64::total_cmp);
        prop_assert_eq!(tree_min(&values), Some(values[0]));
    }
}
