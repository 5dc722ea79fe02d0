//! Per-signature reuse history.
//!
//! # Performance
//!
//! - **Time Complexity:** `O(1)` per train or lookup.
//! - **Space Complexity:** `O(table_size)` saturating counters.
//! - **Hardware Cost:** Models a direct-mapped SHCT-style table of 2-bit
//!   counters indexed by folded PC.

use crate::common::SatCounter;
use crate::config::SignatureConfig;
use crate::policy::signature::Signature;

/// Direct-mapped table of per-signature reuse counters.
///
/// Rewarded when a line installed under the signature hits, penalized
/// when one dies without reuse. Signatures that collide share an entry.
#[derive(Debug)]
pub struct ReuseHistory {
    counters: Vec<SatCounter>,
    threshold: u8,
}

impl ReuseHistory {
    /// Builds a table with every counter at the configured initial value.
    pub fn new(config: &SignatureConfig) -> Self {
        Self {
            counters: vec![
                SatCounter::new(config.reuse_init, config.reuse_max);
                config.table_size
            ],
            threshold: config.reuse_threshold,
        }
    }

    /// Credits the signature with a demonstrated reuse.
    pub fn reward(&mut self, signature: Signature) {
        self.counters[signature.0].increment();
    }

    /// Debits the signature for a line that died without reuse.
    pub fn penalize(&mut self, signature: Signature) {
        self.counters[signature.0].decrement();
    }

    /// Whether the signature's history predicts reuse.
    pub fn predicts_reuse(&self, signature: Signature) -> bool {
        self.counters[signature.0].at_least(self.threshold)
    }

    /// Raw counter value for inspection.
    pub fn confidence(&self, signature: Signature) -> u8 {
        self.counters[signature.0].get()
    }
}
