//! Boundary validation properties.

use dncore::verify::{GapSequence, InvariantError, PeakSequence, SortedPair, SortedSequence};
use proptest::prelude::*;

use crate::oracles::{oracle_max_gap, oracle_median};

proptest! {
    /// Property: sorted input is accepted, and any descent is reported at
    /// its first position.
    #[test]
    fn prop_sorted_sequence_validation(values in prop::collection::vec(-100i64..100, 0..50)) {
        let first_descent = (1..values.len()).find(|&i| values[i - 1] > values[i]);
        match SortedSequence::new(values.clone()) {
            Ok(seq) => {
                prop_assert!(first_descent.is_none());
                prop_assert_eq!(seq.as_slice(), values.as_slice());
            }
            Err(e) => prop_assert_eq!(
                e,
                InvariantError::Unsorted { position: first_descent.unwrap() }
            ),
        }
    }

    /// Property: validated pairs always have a median.
    #[test]
    fn prop_sorted_pair_median(
        mut a in prop::collection::vec(-100i64..100, 1..20),
        seed in prop::collection::vec(-100i64..100, 20),
    ) {
        a.sort_unstable();
        let mut b = seed[..a.len()].to_vec();
        b.sort_unstable();
        let expected = oracle_median(&a, &b);
        let pair = SortedPair::new(a, b).unwrap();
        prop_assert_eq!(pair.median(), expected);
    }

    /// Property: validated gap sequences always have an optimal pair.
    #[test]
    fn prop_gap_sequence(values in prop::collection::vec(-100i64..100, 2..50)) {
        let seq = GapSequence::new(values.clone()).unwrap();
        prop_assert_eq!(Some(seq.max_gap().diff), oracle_max_gap(&values));
    }

    /// Property: equal neighbours are always rejected.
    #[test]
    fn prop_peak_sequence_rejects_plateaus(
        mut values in prop::collection::vec(-100i64..100, 3..40),
        at in any::<prop::sample::Index>(),
    ) {
        let i = at.index(values.len() - 1);
        values[i + 1] = values[i];
        prop_assert!(PeakSequence::new(values).is_err());
    }
}
