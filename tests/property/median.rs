//! Two-array median properties.

use dncore::median_of_sorted_pair;
use proptest::prelude::*;

use crate::oracles::oracle_median;

/// Two sorted sequences of the same length.
fn sorted_pair_strategy() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    (1usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec(-500i64..500, n),
            prop::collection::vec(-500i64..500, n),
        )
            .prop_map(|(mut a, mut b)| {
                a.sort_unstable();
                b.sort_unstable();
                (a, b)
            })
    })
}

proptest! {
    /// Property: partition search equals the median of the full merge.
    #[test]
    fn prop_median_matches_merge((a, b) in sorted_pair_strategy()) {
        prop_assert_eq!(median_of_sorted_pair(&a, &b), Some(oracle_median(&a, &b)));
    }

    /// Property: argument order does not matter.
    #[test]
    fn prop_median_symmetric((a, b) in sorted_pair_strategy()) {
        prop_assert_eq!(median_of_sorted_pair(&a, &b), median_of_sorted_pair(&b, &a));
    }

    /// Property: disjoint ranges put the median between them.
    #[test]
    fn prop_median_of_disjoint_ranges((a, _) in sorted_pair_strategy()) {
        let shifted: Vec<i64> = a.iter().map(|v| v + 10_000).collect();
        let expected = (a[a.len() - 1] as f64 + shifted[0] as f64) / 2.0;
        prop_assert_eq!(median_of_sorted_pair(&a, &shifted), Some(expected));
    }

    /// Property: mismatched lengths are rejected.
    #[test]
    fn prop_median_length_mismatch(
        a in prop::collection::vec(0i64..10, 1..10),
        extra in 1usize..5,
    ) {
        let b = vec![0i64; a.len() + extra];
        prop_assert_eq!(median_of_sorted_pair(&a, &b), None);
    }
}
