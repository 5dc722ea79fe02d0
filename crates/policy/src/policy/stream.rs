//! Per-signature stride-based stream detection.
//!
//! # Performance
//!
//! - **Time Complexity:** `O(1)` per observation or lookup.
//! - **Space Complexity:** `O(table_size)` counters plus last-block anchors.
//! - **Hardware Cost:** Models a direct-mapped table of 2-bit confidence
//!   counters, each paired with a block-address register and valid bit.

use crate::common::SatCounter;
use crate::config::SignatureConfig;
use crate::policy::signature::Signature;

/// Direct-mapped stride detector indexed by folded PC.
///
/// Each entry remembers the last block address a signature touched; a
/// follow-up exactly one block away (either direction) raises confidence,
/// anything else lowers it. The first observation only anchors the entry.
#[derive(Debug)]
pub struct StreamDetector {
    counters: Vec<SatCounter>,
    last_block: Vec<Option<u64>>,
    init: u8,
}

impl StreamDetector {
    /// Builds a detector with every entry at the configured initial value
    /// and no anchors.
    pub fn new(config: &SignatureConfig) -> Self {
        Self {
            counters: vec![
                SatCounter::new(config.stream_init, config.stream_max);
                config.table_size
            ],
            last_block: vec![None; config.table_size],
            init: config.stream_init,
        }
    }

    /// Trains the entry for `signature` with the block it just touched.
    pub fn observe(&mut self, signature: Signature, block: u64) {
        let index = signature.0;
        if let Some(previous) = self.last_block[index] {
            let delta = block as i64 - previous as i64;
            if delta.abs() == 1 {
                self.counters[index].increment();
            } else {
                self.counters[index].decrement();
            }
        }
        self.last_block[index] = Some(block);
    }

    /// Whether the signature's confidence has reached `threshold`.
    pub fn is_streaming(&self, signature: Signature, threshold: u8) -> bool {
        self.counters[signature.0].at_least(threshold)
    }

    /// Raw confidence value for inspection.
    pub fn confidence(&self, signature: Signature) -> u8 {
        self.counters[signature.0].get()
    }

    /// Drops all learned strides after a phase change.
    ///
    /// Counters return to the initial value and every anchor is cleared,
    /// so each signature re-learns from its next two observations.
    pub fn reset(&mut self) {
        for counter in &mut self.counters {
            counter.set(self.init);
        }
        self.last_block.fill(None);
    }
}
