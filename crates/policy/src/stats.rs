//! Lifetime and per-window statistics for a policy instance.

use crate::common::AccessKind;

/// Lifetime counters for one policy instance.
#[derive(Debug, Clone, Default)]
pub struct PolicyStats {
    /// Accesses that found their line resident.
    pub hits: u64,
    /// Accesses that required a fill.
    pub misses: u64,
    /// Demand loads observed.
    pub loads: u64,
    /// Read-for-ownership requests observed.
    pub rfos: u64,
    /// Prefetch requests observed.
    pub prefetches: u64,
    /// Writebacks observed.
    pub writebacks: u64,
}

impl PolicyStats {
    /// Records one access outcome.
    pub fn record(&mut self, kind: AccessKind, hit: bool) {
        match kind {
            AccessKind::Load => self.loads += 1,
            AccessKind::Rfo => self.rfos += 1,
            AccessKind::Prefetch => self.prefetches += 1,
            AccessKind::Writeback => self.writebacks += 1,
        }
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    /// Total accesses observed.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate in percent, or zero when nothing was observed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            return 0.0;
        }
        100.0 * self.hits as f64 / total as f64
    }

    /// Renders the lifetime counters as a report block.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("=========================================\n");
        out.push_str("     REPLACEMENT POLICY STATISTICS\n");
        out.push_str("=========================================\n");
        out.push_str(&format!("{:<25}{}\n", "accesses", self.accesses()));
        out.push_str(&format!("{:<25}{}\n", "hits", self.hits));
        out.push_str(&format!("{:<25}{}\n", "misses", self.misses));
        out.push_str(&format!("{:<25}{:.2} %\n", "hit_rate", self.hit_rate()));
        out.push_str("-----------------------------------------\n");
        out.push_str("              ACCESS MIX\n");
        out.push_str("-----------------------------------------\n");
        out.push_str(&format!("{:<25}{}\n", "loads", self.loads));
        out.push_str(&format!("{:<25}{}\n", "rfos", self.rfos));
        out.push_str(&format!("{:<25}{}\n", "prefetches", self.prefetches));
        out.push_str(&format!("{:<25}{}\n", "writebacks", self.writebacks));
        out
    }
}

/// Counters accumulated over one adaptive controller window.
///
/// The controller resets the window after every decision; lifetime
/// counters live in [`PolicyStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EpochWindow {
    /// Accesses observed this window.
    pub accesses: u64,
    /// Hits observed this window.
    pub hits: u64,
    /// Misses observed this window.
    pub misses: u64,
    /// Lines installed while classified streaming this window.
    pub stream_installs: u64,
    /// Hits to stream-classified lines this window.
    pub stream_hits: u64,
    /// Dead evictions of stream-classified lines this window.
    pub stream_misses: u64,
}

impl EpochWindow {
    /// Miss rate over the window, or zero when empty.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            return 0.0;
        }
        self.misses as f64 / self.accesses as f64
    }

    /// Hits per stream install over the window, or zero when nothing streamed.
    pub fn stream_hit_ratio(&self) -> f64 {
        if self.stream_installs == 0 {
            return 0.0;
        }
        self.stream_hits as f64 / self.stream_installs as f64
    }

    /// Clears every counter for the next window.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
