//! Saturating counter property tests.
//!
//! The boundary cases live next to the implementation; these properties
//! check that no operation sequence can push a counter out of bounds.

use proptest::prelude::*;
use shipd_core::common::SatCounter;

proptest! {
    /// Property: any mix of increments and decrements stays in `[0, max]`.
    #[test]
    fn prop_value_stays_in_bounds(
        initial in 0u8..=10,
        max in 1u8..=10,
        ops in prop::collection::vec(any::<bool>(), 0..64),
    ) {
        let mut counter = SatCounter::new(initial, max);
        for up in ops {
            if up {
                counter.increment();
            } else {
                counter.decrement();
            }
            prop_assert!(counter.get() <= max);
        }
    }

    /// Property: `set` clamps every value to the counter's limit.
    #[test]
    fn prop_set_never_exceeds_limit(value in any::<u8>(), max in 0u8..=20) {
        let mut counter = SatCounter::new(0, max);
        counter.set(value);
        prop_assert!(counter.get() <= counter.limit());
    }

    /// Property: `at_least` agrees with a plain comparison on `get`.
    #[test]
    fn prop_at_least_matches_get(
        initial in 0u8..=7,
        threshold in 0u8..=7,
    ) {
        let counter = SatCounter::new(initial, 7);
        prop_assert_eq!(counter.at_least(threshold), counter.get() >= threshold);
    }
}
