//! Karatsuba properties.

use dncore::karatsuba;
use proptest::prelude::*;

use crate::oracles::oracle_multiply;

fn digits_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,60}").unwrap()
}

proptest! {
    /// Property: product equals long multiplication.
    #[test]
    fn prop_karatsuba_matches_long_multiplication(x in digits_strategy(), y in digits_strategy()) {
        prop_assert_eq!(karatsuba(&x, &y).unwrap(), oracle_multiply(&x, &y));
    }

    /// Property: multiplication commutes.
    #[test]
    fn prop_karatsuba_commutes(x in digits_strategy(), y in digits_strategy()) {
        prop_assert_eq!(karatsuba(&x, &y).unwrap(), karatsuba(&y, &x).unwrap());
    }

    /// Property: agrees with native arithmetic where it fits.
    #[test]
    fn prop_karatsuba_matches_u128(x in any::<u64>(), y in any::<u64>()) {
        let expected = (u128::from(x) * u128::from(y)).to_string();
        prop_assert_eq!(karatsuba(&x.to_string(), &y.to_string()).unwrap(), expected);
    }

    /// Property: products are canonical (no leading zeros).
    #[test]
    fn prop_karatsuba_canonical(x in digits_strategy(), y in digits_strategy()) {
        let product = karatsuba(&x, &y).unwrap();
        prop_assert!(product == "0" || !product.starts_with('0'));
    }
}
