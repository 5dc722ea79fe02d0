//! End-to-end tests for the adaptive policy behind the seam.

use shipd_core::{
    build_policy, AdaptiveConfig, AdaptiveShipPolicy, PolicyConfig, PolicyKind, ReplacementPolicy,
};

use crate::common::{load, run_miss, small_config, PC_A, PC_B};

fn small_policy() -> AdaptiveShipPolicy {
    AdaptiveShipPolicy::new(&small_config())
}

/// One set, one way: every fill evicts the previous line.
fn single_slot_policy() -> AdaptiveShipPolicy {
    AdaptiveShipPolicy::new(&PolicyConfig {
        sets: 1,
        ways: 1,
        ..small_config()
    })
}

// ══════════════════════════════════════════════════════════
// 1. Fills and victim order
// ══════════════════════════════════════════════════════════

#[test]
fn fresh_set_fills_ways_in_order() {
    let mut policy = AdaptiveShipPolicy::new(&PolicyConfig {
        ways: 2,
        ..small_config()
    });
    assert_eq!(run_miss(&mut policy, 0, &load(PC_A, 0x0)), 0);
    assert_eq!(run_miss(&mut policy, 0, &load(PC_B, 0x10_000)), 1);
}

#[test]
fn fresh_signature_installs_protected() {
    let mut policy = small_policy();
    let way = policy.select_victim(0, &load(PC_A, 0x40));
    let slot = policy.line(0, way);
    assert!(slot.is_valid());
    assert_eq!(slot.recency(), 0);
    assert!(!slot.was_reused());
}

// ══════════════════════════════════════════════════════════
// 2. Predictor training
// ══════════════════════════════════════════════════════════

#[test]
fn hit_promotes_and_rewards_the_installing_signature() {
    let mut policy = small_policy();
    let way = run_miss(&mut policy, 0, &load(PC_A, 0x40));

    // A different PC touches the same line; credit goes to the
    // signature stored at install time.
    policy.record_access(0, way, &load(PC_B, 0x40), true);

    let slot = policy.line(0, way);
    assert!(slot.was_reused());
    assert_eq!(slot.recency(), 0);
    assert_eq!(policy.reuse_confidence(PC_A), 3);
    assert_eq!(policy.reuse_confidence(PC_B), 2);
}

#[test]
fn dead_evictions_cool_a_signature_to_the_cold_tier() {
    let mut policy = single_slot_policy();
    let _ = run_miss(&mut policy, 0, &load(PC_A, 0x0));
    assert_eq!(policy.reuse_confidence(PC_A), 2);

    // PC_A's line dies without a hit.
    let _ = run_miss(&mut policy, 0, &load(PC_B, 0x40_000));
    assert_eq!(policy.reuse_confidence(PC_A), 1);

    // Its next fill lands at the eviction boundary.
    let way = policy.select_victim(0, &load(PC_A, 0x80_000));
    let slot = policy.line(0, way);
    assert!(!slot.is_streaming());
    assert_eq!(slot.recency(), 3);
}

#[test]
fn reused_evictions_spare_the_signature() {
    let mut policy = single_slot_policy();
    let way = run_miss(&mut policy, 0, &load(PC_A, 0x0));
    policy.record_access(0, way, &load(PC_A, 0x0), true);

    let _ = run_miss(&mut policy, 0, &load(PC_B, 0x40_000));
    assert_eq!(policy.reuse_confidence(PC_A), 3);
}

// ══════════════════════════════════════════════════════════
// 3. Stream classification
// ══════════════════════════════════════════════════════════

#[test]
fn sequential_scanner_demotes_to_the_streaming_tier() {
    let mut policy = single_slot_policy();
    let _ = run_miss(&mut policy, 0, &load(PC_A, 100 << 6));

    let way = policy.select_victim(0, &load(PC_A, 101 << 6));
    let slot = policy.line(0, way);
    assert!(slot.is_streaming());
    assert_eq!(slot.recency(), 1);
    assert_eq!(policy.stream_confidence(PC_A), 2);
}

#[test]
fn dead_streaming_lines_feed_the_window_accumulator() {
    let mut policy = single_slot_policy();
    for block in 100..103u64 {
        let _ = run_miss(&mut policy, 0, &load(PC_A, block << 6));
    }

    // The second fill was classified streaming and died unreused on the
    // third; the first was not yet classified, so only one counts.
    let report = policy.report();
    assert!(report.contains(&format!("{:<25}{}", "window_stream_installs", 2)));
    assert!(report.contains(&format!("{:<25}{}", "window_stream_misses", 1)));
}

#[test]
fn reuse_history_outranks_stream_classification() {
    let mut policy = single_slot_policy();
    let way = run_miss(&mut policy, 0, &load(PC_A, 100 << 6));
    policy.record_access(0, way, &load(PC_A, 100 << 6), true);

    // The stride looks sequential, but the signature has proven reuse.
    let way = policy.select_victim(0, &load(PC_A, 101 << 6));
    let slot = policy.line(0, way);
    assert!(slot.is_streaming());
    assert_eq!(slot.recency(), 0);
}

// ══════════════════════════════════════════════════════════
// 4. Phase adaptation
// ══════════════════════════════════════════════════════════

#[test]
fn phase_shift_resets_stream_learning() {
    let mut policy = AdaptiveShipPolicy::new(&PolicyConfig {
        sets: 1,
        ways: 1,
        adaptive: AdaptiveConfig {
            epoch_length: 4,
            ..AdaptiveConfig::default()
        },
        ..small_config()
    });
    for block in 100..103u64 {
        let _ = run_miss(&mut policy, 0, &load(PC_A, block << 6));
    }
    assert_eq!(policy.stream_confidence(PC_A), 3);
    assert_eq!(policy.stream_threshold(), 2);

    // The fourth miss closes the window: an all-miss epoch against a
    // clean history is a phase change, and no stream-classified line
    // hit, so classification also gets stricter.
    let _ = run_miss(&mut policy, 0, &load(PC_A, 103 << 6));
    assert_eq!(policy.stream_confidence(PC_A), 1);
    assert_eq!(policy.stream_threshold(), 3);
}

// ══════════════════════════════════════════════════════════
// 5. Reporting and the seam
// ══════════════════════════════════════════════════════════

#[test]
fn report_renders_counters_and_the_threshold() {
    let mut policy = small_policy();
    let way = run_miss(&mut policy, 0, &load(PC_A, 0x40));
    policy.record_access(0, way, &load(PC_A, 0x40), true);

    let report = policy.report();
    assert!(report.contains("REPLACEMENT POLICY STATISTICS"));
    assert!(report.contains("ADAPTIVE CONTROLLER"));
    assert!(report.contains(&format!("{:<25}{:.2} %", "hit_rate", 50.0)));
    assert!(report.contains(&format!("{:<25}{}", "stream_threshold", 2)));
    assert!(report.contains(&format!("{:<25}{}", "window_accesses", 2)));
}

#[test]
fn heartbeat_is_a_quiet_default() {
    let policy = build_policy(&small_config());
    policy.heartbeat();
    assert_eq!(policy.stats().accesses(), 0);
}

#[test]
fn factory_builds_the_configured_kind() {
    let adaptive = build_policy(&small_config());
    assert!(adaptive.report().contains("ADAPTIVE CONTROLLER"));

    let baseline = build_policy(&PolicyConfig {
        kind: PolicyKind::Srrip,
        ..small_config()
    });
    assert!(!baseline.report().contains("ADAPTIVE CONTROLLER"));
}
