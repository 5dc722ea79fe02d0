//! Static RRIP baseline tests.

use shipd_core::{PolicyConfig, ReplacementPolicy, SrripPolicy};

use crate::common::{load, small_config, PC_A, PC_B};

fn two_way_policy() -> SrripPolicy {
    SrripPolicy::new(&PolicyConfig {
        sets: 1,
        ways: 2,
        ..small_config()
    })
}

#[test]
fn fills_sit_at_the_distant_position() {
    let mut policy = two_way_policy();
    let way = policy.select_victim(0, &load(PC_A, 0x0));
    assert_eq!(way, 0);
    assert_eq!(policy.line(0, way).recency(), 2);
}

#[test]
fn hit_promotes_to_the_protected_position() {
    let mut policy = two_way_policy();
    let way = policy.select_victim(0, &load(PC_A, 0x0));
    policy.record_access(0, way, &load(PC_A, 0x0), false);

    policy.record_access(0, way, &load(PC_A, 0x0), true);
    let slot = policy.line(0, way);
    assert_eq!(slot.recency(), 0);
    assert!(slot.was_reused());
}

#[test]
fn eviction_follows_recency_order() {
    let mut policy = two_way_policy();
    let first = policy.select_victim(0, &load(PC_A, 0x0));
    policy.record_access(0, first, &load(PC_A, 0x0), false);
    let second = policy.select_victim(0, &load(PC_B, 0x40_000));
    policy.record_access(0, second, &load(PC_B, 0x40_000), false);

    // Only the first line is promoted; the second stays distant and
    // loses the next scan.
    policy.record_access(0, first, &load(PC_A, 0x0), true);
    assert_eq!(policy.select_victim(0, &load(PC_A, 0x80_000)), second);
}

#[test]
fn report_has_no_controller_section() {
    let policy = two_way_policy();
    let report = policy.report();
    assert!(report.contains("REPLACEMENT POLICY STATISTICS"));
    assert!(!report.contains("ADAPTIVE CONTROLLER"));
}
