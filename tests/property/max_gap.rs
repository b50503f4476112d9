//! Max-gap properties.

use dncore::max_gap;
use proptest::prelude::*;

use crate::common::assert_gap_well_formed;
use crate::oracles::oracle_max_gap;

proptest! {
    /// Property: the reported diff equals the brute-force optimum.
    #[test]
    fn prop_max_gap_matches_oracle(values in prop::collection::vec(-1000i64..1000, 2..80)) {
        let pair = max_gap(&values).expect("len >= 2 always has a pair");
        assert_gap_well_formed(&values, &pair);
        prop_assert_eq!(Some(pair.diff), oracle_max_gap(&values));
    }

    /// Property: non-increasing input still yields buy < sell.
    #[test]
    fn prop_max_gap_on_non_increasing(mut values in prop::collection::vec(-50i64..50, 2..40)) {
        values.sort_unstable_by(|a, b| b.cmp(a));
        let pair = max_gap(&values).unwrap();
        assert_gap_well_formed(&values, &pair);
        prop_assert!(pair.diff <= 0);
        prop_assert_eq!(Some(pair.diff), oracle_max_gap(&values));
    }

    /// Property: fewer than two values never produce a pair.
    #[test]
    fn prop_max_gap_short_input(values in prop::collection::vec(any::<i32>(), 0..2)) {
        prop_assert!(max_gap(&values).is_none());
    }

    /// Property: the solver is a pure function of its input.
    #[test]
    fn prop_max_gap_deterministic(values in prop::collection::vec(-5i64..5, 2..30)) {
        prop_assert_eq!(max_gap(&values), max_gap(&values));
    }
}
