//! Majority properties.

use dncore::{majority, majority_in};
use proptest::prelude::*;

use crate::oracles::oracle_majority;

proptest! {
    /// Property: small alphabets produce both verdicts; both must match.
    #[test]
    fn prop_majority_matches_counting(values in prop::collection::vec(0i64..3, 1..100)) {
        prop_assert_eq!(majority(&values), oracle_majority(&values));
    }

    /// Property: a planted strict majority is always found.
    #[test]
    fn prop_planted_majority_found(
        noise in prop::collection::vec(0i64..1000, 0..40),
        extra in 1usize..10,
    ) {
        let winner = -7i64;
        let mut values = noise.clone();
        values.extend(std::iter::repeat(winner).take(noise.len() + extra));
        prop_assert_eq!(majority(&values), Some(winner));

        // Order must not matter.
        values.reverse();
        prop_assert_eq!(majority(&values), Some(winner));
    }

    /// Property: exactly half is not a majority.
    #[test]
    fn prop_exact_half_is_not_majority(half in 1usize..30) {
        let mut values = vec![1i64; half];
        values.extend((0..half).map(|i| 100 + i as i64));
        prop_assert_eq!(majority(&values), None);
    }

    /// Property: sub-range queries agree with slicing.
    #[test]
    fn prop_majority_in_matches_slice(
        values in prop::collection::vec(0i64..2, 1..60),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (i, j) = (a.index(values.len()), b.index(values.len()));
        let (l, r) = (i.min(j), i.max(j));
        prop_assert_eq!(majority_in(&values, l, r), oracle_majority(&values[l..=r]));
    }
}
