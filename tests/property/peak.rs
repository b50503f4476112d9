//! Local peak properties.

use dncore::find_peak;
use proptest::prelude::*;

use crate::common::{assert_is_peak, mountain};

proptest! {
    /// Property: any reported index is a strict local peak.
    #[test]
    fn prop_reported_index_is_peak(values in prop::collection::vec(-20i64..20, 0..60)) {
        if let Some(m) = find_peak(&values) {
            assert_is_peak(&values, m);
        }
    }

    /// Property: a single interior summit is always found.
    #[test]
    fn prop_mountain_summit_found((n, top) in (3usize..200).prop_flat_map(|n| (Just(n), 1..n - 1))) {
        let values = mountain(n, top);
        prop_assert_eq!(find_peak(&values), Some(top));
    }

    /// Property: monotone sequences have no peak.
    #[test]
    fn prop_monotone_has_no_peak(n in 0usize..100) {
        let rising: Vec<i64> = (0..n as i64).collect();
        let falling: Vec<i64> = rising.iter().rev().copied().collect();
        prop_assert_eq!(find_peak(&rising), None);
        prop_assert_eq!(find_peak(&falling), None);
    }
}
