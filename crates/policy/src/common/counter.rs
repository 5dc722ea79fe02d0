//! Saturating counter primitive shared by the prediction tables.
//!
//! Every learned quantity in this crate (per-line recency, per-signature
//! reuse and stride confidence) is a small saturating counter. Wrapping one
//! of these counters would silently invert a prediction, so the clamping
//! lives here instead of at every update site.

/// A saturating counter bounded to `[0, max]`.
///
/// Increment and decrement clamp instead of wrapping. The bound is fixed at
/// construction; the default tables are built from 2-bit counters
/// (`max = 3`), but any bound up to `u8::MAX` works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatCounter {
    /// Current value, always within the bound.
    value: u8,
    /// Inclusive upper bound.
    max: u8,
}

impl SatCounter {
    /// Creates a counter at `value`, bounded to `[0, max]`.
    ///
    /// An initial value above `max` is clamped to `max`.
    pub const fn new(value: u8, max: u8) -> Self {
        Self {
            value: if value > max { max } else { value },
            max,
        }
    }

    /// Current value.
    #[inline(always)]
    pub const fn get(self) -> u8 {
        self.value
    }

    /// Inclusive upper bound.
    pub const fn limit(self) -> u8 {
        self.max
    }

    /// Adds one, clamping at the bound.
    #[inline(always)]
    pub const fn increment(&mut self) {
        if self.value < self.max {
            self.value += 1;
        }
    }

    /// Subtracts one, clamping at zero.
    #[inline(always)]
    pub const fn decrement(&mut self) {
        if self.value > 0 {
            self.value -= 1;
        }
    }

    /// Forces the value, clamped to the bound.
    pub const fn set(&mut self, value: u8) {
        self.value = if value > self.max { self.max } else { value };
    }

    /// True when the counter sits at its bound.
    pub const fn is_max(self) -> bool {
        self.value == self.max
    }

    /// True when the value is at least `threshold`.
    pub const fn at_least(self, threshold: u8) -> bool {
        self.value >= threshold
    }
}
