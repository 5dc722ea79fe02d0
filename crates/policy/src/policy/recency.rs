//! Per-line recency tracking and victim scanning.
//!
//! # Performance
//!
//! - **Time Complexity:** `O(ways)` per victim scan iteration; the aging
//!   loop terminates because every pass moves each line one step toward
//!   the bound.
//! - **Space Complexity:** `O(sets * ways)` line slots.
//! - **Hardware Cost:** Models per-line RRIP state, a valid bit, a reuse
//!   bit, a stream bit, and a stored signature.
//!
//! ## Characteristics
//!
//! - **Best Case:** An invalid or already-distant line exists; one scan.
//! - **Worst Case:** All lines recently promoted; `max_recency` aging
//!   passes before a victim appears.

use crate::common::SatCounter;
use crate::policy::signature::Signature;

/// Replacement metadata for one cache line.
#[derive(Debug, Clone)]
pub struct LineSlot {
    valid: bool,
    recency: SatCounter,
    signature: Signature,
    reused: bool,
    streaming: bool,
}

impl LineSlot {
    /// Returns an invalid slot parked at the recency bound.
    fn empty(max_recency: u8) -> Self {
        Self {
            valid: false,
            recency: SatCounter::new(max_recency, max_recency),
            signature: Signature(0),
            reused: false,
            streaming: false,
        }
    }

    /// Whether the slot holds a live line.
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Current recency value; higher means closer to eviction.
    pub const fn recency(&self) -> u8 {
        self.recency.get()
    }

    /// Signature of the access that installed the line.
    pub const fn signature(&self) -> Signature {
        self.signature
    }

    /// Whether the line has hit since it was installed.
    pub const fn was_reused(&self) -> bool {
        self.reused
    }

    /// Whether the line was classified streaming at install time.
    pub const fn is_streaming(&self) -> bool {
        self.streaming
    }
}

/// Flat `sets * ways` table of line slots.
#[derive(Debug)]
pub struct LineTable {
    slots: Vec<LineSlot>,
    sets: usize,
    ways: usize,
    max_recency: u8,
}

impl LineTable {
    /// Builds a table of invalid slots parked at the recency bound.
    ///
    /// # Panics
    ///
    /// Panics if `sets` or `ways` is zero.
    pub fn new(sets: usize, ways: usize, max_recency: u8) -> Self {
        assert!(sets > 0, "line table needs at least one set");
        assert!(ways > 0, "line table needs at least one way");
        Self {
            slots: vec![LineSlot::empty(max_recency); sets * ways],
            sets,
            ways,
            max_recency,
        }
    }

    /// Number of sets.
    pub const fn sets(&self) -> usize {
        self.sets
    }

    /// Number of ways per set.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Inclusive recency bound lines age toward.
    pub const fn max_recency(&self) -> u8 {
        self.max_recency
    }

    /// Borrows one slot for inspection.
    ///
    /// # Panics
    ///
    /// Panics if `set` or `way` is out of range.
    pub fn slot(&self, set: usize, way: usize) -> &LineSlot {
        &self.slots[self.index(set, way)]
    }

    fn slot_mut(&mut self, set: usize, way: usize) -> &mut LineSlot {
        let index = self.index(set, way);
        &mut self.slots[index]
    }

    fn index(&self, set: usize, way: usize) -> usize {
        debug_assert!(set < self.sets, "set {set} out of range");
        debug_assert!(way < self.ways, "way {way} out of range");
        set * self.ways + way
    }

    /// Picks the way to evict from `set`.
    ///
    /// Invalid slots win immediately. Otherwise the set is scanned for a
    /// line at the recency bound, aging every line by one step between
    /// scans until one reaches it. Ties go to the lowest way.
    pub fn find_victim(&mut self, set: usize) -> usize {
        for way in 0..self.ways {
            if !self.slot(set, way).valid {
                return way;
            }
        }
        loop {
            for way in 0..self.ways {
                if self.slot(set, way).recency.is_max() {
                    return way;
                }
            }
            for way in 0..self.ways {
                self.slot_mut(set, way).recency.increment();
            }
        }
    }

    /// Fills a slot with a freshly installed line.
    pub fn install(
        &mut self,
        set: usize,
        way: usize,
        signature: Signature,
        streaming: bool,
        initial_recency: u8,
    ) {
        let slot = self.slot_mut(set, way);
        slot.valid = true;
        slot.signature = signature;
        slot.reused = false;
        slot.streaming = streaming;
        slot.recency.set(initial_recency);
    }

    /// Marks a line reused and moves it to the most-protected position.
    pub fn promote(&mut self, set: usize, way: usize) {
        let slot = self.slot_mut(set, way);
        slot.recency.set(0);
        slot.reused = true;
    }
}
