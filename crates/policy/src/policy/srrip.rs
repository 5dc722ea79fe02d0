//! Static RRIP baseline policy.
//!
//! # Performance
//!
//! - **Time Complexity:** Same victim scan as the adaptive policy, with
//!   no predictor lookups.
//! - **Space Complexity:** `O(sets * ways)` line slots and nothing else.
//! - **Hardware Cost:** Per-line RRIP state only.
//!
//! ## Characteristics
//!
//! - **Best Case:** Reuse within the distant-insertion window; behaves
//!   like scan-resistant LRU.
//! - **Worst Case:** Streams larger than the set; every fill evicts a
//!   line that would have hit.

use crate::common::Access;
use crate::config::PolicyConfig;
use crate::policy::recency::{LineSlot, LineTable};
use crate::policy::signature::Signature;
use crate::policy::ReplacementPolicy;
use crate::stats::PolicyStats;

/// Static RRIP: insert one step shy of the eviction boundary, promote to
/// most-protected on hit.
#[derive(Debug)]
pub struct SrripPolicy {
    lines: LineTable,
    stats: PolicyStats,
    insert_at: u8,
}

impl SrripPolicy {
    /// Builds a baseline instance from a validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation.
    pub fn new(config: &PolicyConfig) -> Self {
        config
            .validate()
            .unwrap_or_else(|err| panic!("invalid replacement policy configuration: {err}"));
        Self {
            lines: LineTable::new(config.sets, config.ways, config.max_recency),
            stats: PolicyStats::default(),
            insert_at: config.max_recency.saturating_sub(1),
        }
    }

    /// Borrows one line's replacement metadata.
    ///
    /// # Panics
    ///
    /// Panics if `set` or `way` is out of range.
    pub fn line(&self, set: usize, way: usize) -> &LineSlot {
        self.lines.slot(set, way)
    }
}

impl ReplacementPolicy for SrripPolicy {
    fn select_victim(&mut self, set: usize, _access: &Access) -> usize {
        let way = self.lines.find_victim(set);
        self.lines
            .install(set, way, Signature(0), false, self.insert_at);
        way
    }

    fn record_access(&mut self, set: usize, way: usize, access: &Access, hit: bool) {
        self.stats.record(access.kind, hit);
        if hit {
            self.lines.promote(set, way);
        }
    }

    fn stats(&self) -> &PolicyStats {
        &self.stats
    }

    fn report(&self) -> String {
        self.stats.summary()
    }
}
