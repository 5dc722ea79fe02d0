//! Insertion tier selection tests.

use rstest::rstest;
use shipd_core::policy::insertion::{choose_tier, InsertionTier};

#[rstest]
#[case(true, false, InsertionTier::Hot)]
#[case(true, true, InsertionTier::Hot)]
#[case(false, true, InsertionTier::Streaming)]
#[case(false, false, InsertionTier::Cold)]
fn tier_follows_predictor_priority(
    #[case] predicts_reuse: bool,
    #[case] streaming: bool,
    #[case] expected: InsertionTier,
) {
    assert_eq!(choose_tier(predicts_reuse, streaming), expected);
}

#[test]
fn tiers_map_onto_recency_positions() {
    assert_eq!(InsertionTier::Hot.initial_recency(3), 0);
    assert_eq!(InsertionTier::Streaming.initial_recency(3), 1);
    assert_eq!(InsertionTier::Cold.initial_recency(3), 3);
}

#[test]
fn cold_tier_tracks_the_configured_bound() {
    assert_eq!(InsertionTier::Cold.initial_recency(7), 7);
}
