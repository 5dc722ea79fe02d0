//! Adaptive signature-based replacement policy.

use crate::common::Access;
use crate::config::PolicyConfig;
use crate::policy::adaptive::EpochController;
use crate::policy::insertion::choose_tier;
use crate::policy::recency::{LineSlot, LineTable};
use crate::policy::reuse::ReuseHistory;
use crate::policy::signature::fold_pc;
use crate::policy::stream::StreamDetector;
use crate::policy::ReplacementPolicy;
use crate::stats::PolicyStats;

/// Signature-indexed insertion policy with stride detection and a
/// feedback-controlled stream threshold.
///
/// Every fill consults two predictors keyed by the folded PC: reuse
/// history decides whether the line installs protected, and the stream
/// detector demotes sequential fills that history has not vouched for.
/// An epoch controller watches how stream-classified lines actually
/// behave and retunes the classification threshold, resetting learned
/// strides when the miss rate swings between windows.
#[derive(Debug)]
pub struct AdaptiveShipPolicy {
    lines: LineTable,
    reuse: ReuseHistory,
    streams: StreamDetector,
    controller: EpochController,
    stats: PolicyStats,
    sig_mask: usize,
    block_shift: u32,
}

impl AdaptiveShipPolicy {
    /// Builds a policy instance from a validated configuration.
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
            reuse: ReuseHistory::new(&config.signature),
            streams: StreamDetector::new(&config.signature),
            controller: EpochController::new(&config.adaptive, &config.signature),
            stats: PolicyStats::default(),
            sig_mask: config.signature.table_size - 1,
            block_shift: config.line_bytes.trailing_zeros(),
        }
    }

    /// Current stream classification threshold.
    pub const fn stream_threshold(&self) -> u8 {
        self.controller.threshold()
    }

    /// Borrows one line's replacement metadata.
    ///
    /// # Panics
    ///
    /// Panics if `set` or `way` is out of range.
    pub fn line(&self, set: usize, way: usize) -> &LineSlot {
        self.lines.slot(set, way)
    }

    /// Stream confidence learned for `pc`'s signature.
    pub fn stream_confidence(&self, pc: u64) -> u8 {
        self.streams.confidence(fold_pc(pc, self.sig_mask))
    }

    /// Reuse confidence learned for `pc`'s signature.
    pub fn reuse_confidence(&self, pc: u64) -> u8 {
        self.reuse.confidence(fold_pc(pc, self.sig_mask))
    }
}

impl ReplacementPolicy for AdaptiveShipPolicy {
    fn select_victim(&mut self, set: usize, access: &Access) -> usize {
        let signature = fold_pc(access.pc, self.sig_mask);
        let block = access.paddr >> self.block_shift;
        self.streams.observe(signature, block);

        let way = self.lines.find_victim(set);

        let victim = self.lines.slot(set, way);
        let victim_signature = victim.signature();
        let victim_streaming = victim.is_streaming();
        let victim_dead = victim.is_valid() && !victim.was_reused();
        if victim_dead {
            self.reuse.penalize(victim_signature);
            if victim_streaming {
                self.controller.note_stream_miss();
            }
        }

        let streaming = self
            .streams
            .is_streaming(signature, self.controller.threshold());
        if streaming {
            self.controller.note_stream_install();
        }
        let tier = choose_tier(self.reuse.predicts_reuse(signature), streaming);
        self.lines.install(
            set,
            way,
            signature,
            streaming,
            tier.initial_recency(self.lines.max_recency()),
        );
        way
    }

    fn record_access(&mut self, set: usize, way: usize, access: &Access, hit: bool) {
        self.stats.record(access.kind, hit);
        self.controller.note_access(hit);
        if hit {
            let slot = self.lines.slot(set, way);
            let signature = slot.signature();
            let streaming = slot.is_streaming();
            self.lines.promote(set, way);
            self.reuse.reward(signature);
            if streaming {
                self.controller.note_stream_hit();
            }
        }
        if let Some(decision) = self.controller.roll_window() {
            if decision.reset_streams {
                self.streams.reset();
            }
        }
    }

    fn stats(&self) -> &PolicyStats {
        &self.stats
    }

    fn report(&self) -> String {
        let window = self.controller.window();
        let mut out = self.stats.summary();
        out.push_str("-----------------------------------------\n");
        out.push_str("          ADAPTIVE CONTROLLER\n");
        out.push_str("-----------------------------------------\n");
        out.push_str(&format!(
            "{:<25}{}\n",
            "stream_threshold",
            self.controller.threshold()
        ));
        out.push_str(&format!("{:<25}{}\n", "window_accesses", window.accesses));
        out.push_str(&format!(
            "{:<25}{}\n",
            "window_stream_installs", window.stream_installs
        ));
        out.push_str(&format!(
            "{:<25}{}\n",
            "window_stream_misses", window.stream_misses
        ));
        out
    }
}
