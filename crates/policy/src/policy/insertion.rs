//! Insertion tier selection for fills.

/// Protection tier a fill lands in.
///
/// Reuse prediction outranks stream classification: a signature with hot
/// history installs protected even while its stride looks sequential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionTier {
    /// History predicts reuse; install most-protected.
    Hot,
    /// Sequential stride with no reuse history; install one step shy of
    /// the most-protected position.
    Streaming,
    /// No evidence either way; install at the eviction boundary.
    Cold,
}

impl InsertionTier {
    /// Recency value a fill in this tier starts at.
    pub const fn initial_recency(self, max_recency: u8) -> u8 {
        match self {
            Self::Hot => 0,
            Self::Streaming => 1,
            Self::Cold => max_recency,
        }
    }
}

/// Maps the two predictor verdicts onto a tier.
pub const fn choose_tier(predicts_reuse: bool, streaming: bool) -> InsertionTier {
    if predicts_reuse {
        InsertionTier::Hot
    } else if streaming {
        InsertionTier::Streaming
    } else {
        InsertionTier::Cold
    }
}
