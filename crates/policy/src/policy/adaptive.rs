//! Windowed feedback controller for the stream classification threshold.

use tracing::{debug, trace};

use crate::config::{AdaptiveConfig, SignatureConfig};
use crate::stats::EpochWindow;

/// Outcome of evaluating one closed window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochDecision {
    /// Miss rate over the closed window.
    pub miss_rate: f64,
    /// Hits per stream install over the closed window.
    pub stream_hit_ratio: f64,
    /// Whether the miss-rate swing demands a stream detector reset.
    pub reset_streams: bool,
    /// Signed threshold adjustment, one of -1, 0, or +1.
    pub threshold_step: i8,
}

/// Accumulates a window of outcomes and retunes the stream threshold.
///
/// Every `epoch_length` accesses the controller compares the window's
/// miss rate against the previous window's and checks how often lines it
/// classified streaming actually hit. A large miss-rate swing marks a
/// phase change; a starved or thriving stream population moves the
/// classification threshold one step.
#[derive(Debug)]
pub struct EpochController {
    epoch_length: u64,
    phase_delta: f64,
    low_ratio: f64,
    high_ratio: f64,
    threshold: u8,
    threshold_max: u8,
    prev_miss_rate: f64,
    window: EpochWindow,
}

impl EpochController {
    /// Builds a controller with the threshold one step above the stream
    /// counters' initial value, clamped to `[1, stream_max]`.
    pub fn new(adaptive: &AdaptiveConfig, signature: &SignatureConfig) -> Self {
        Self {
            epoch_length: adaptive.epoch_length,
            phase_delta: adaptive.phase_delta,
            low_ratio: adaptive.stream_low_ratio,
            high_ratio: adaptive.stream_high_ratio,
            threshold: signature
                .stream_init
                .saturating_add(1)
                .clamp(1, signature.stream_max),
            threshold_max: signature.stream_max,
            prev_miss_rate: 0.0,
            window: EpochWindow::default(),
        }
    }

    /// Current stream classification threshold.
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Borrows the open window's counters.
    pub const fn window(&self) -> &EpochWindow {
        &self.window
    }

    /// Counts one access into the open window.
    pub fn note_access(&mut self, hit: bool) {
        self.window.accesses += 1;
        if hit {
            self.window.hits += 1;
        } else {
            self.window.misses += 1;
        }
    }

    /// Counts a fill that was classified streaming.
    pub fn note_stream_install(&mut self) {
        self.window.stream_installs += 1;
    }

    /// Counts a hit to a stream-classified line.
    pub fn note_stream_hit(&mut self) {
        self.window.stream_hits += 1;
    }

    /// Counts a stream-classified line that died without reuse.
    pub fn note_stream_miss(&mut self) {
        self.window.stream_misses += 1;
    }

    /// Evaluates a window without touching controller state.
    pub fn decide(&self, window: &EpochWindow) -> EpochDecision {
        let miss_rate = window.miss_rate();
        let stream_hit_ratio = window.stream_hit_ratio();
        let reset_streams = (miss_rate - self.prev_miss_rate).abs() >= self.phase_delta;
        let threshold_step = if stream_hit_ratio < self.low_ratio
            && self.threshold < self.threshold_max
        {
            1
        } else if stream_hit_ratio > self.high_ratio && self.threshold > 1 {
            -1
        } else {
            0
        };
        EpochDecision {
            miss_rate,
            stream_hit_ratio,
            reset_streams,
            threshold_step,
        }
    }

    /// Closes the window if it has run its full length.
    ///
    /// Returns the decision applied, or `None` while the window is still
    /// open. The caller owns the stream detector and performs the reset
    /// the decision asks for.
    pub fn roll_window(&mut self) -> Option<EpochDecision> {
        if self.window.accesses < self.epoch_length {
            return None;
        }
        let decision = self.decide(&self.window);
        if decision.reset_streams {
            debug!(
                miss_rate = decision.miss_rate,
                prev_miss_rate = self.prev_miss_rate,
                "phase change, resetting stream detector"
            );
        }
        if decision.threshold_step != 0 {
            let retuned = self
                .threshold
                .saturating_add_signed(decision.threshold_step)
                .clamp(1, self.threshold_max);
            debug!(
                stream_hit_ratio = decision.stream_hit_ratio,
                from = self.threshold,
                to = retuned,
                "retuning stream threshold"
            );
            self.threshold = retuned;
        }
        trace!(
            accesses = self.window.accesses,
            misses = self.window.misses,
            stream_installs = self.window.stream_installs,
            "window closed"
        );
        self.prev_miss_rate = decision.miss_rate;
        self.window.reset();
        Some(decision)
    }
}
