//! Memory reference descriptors handed to the policy by the host simulator.

/// The kind of request reaching the last-level cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Demand load.
    Load,
    /// Read-for-ownership (a store that missed above).
    Rfo,
    /// Hardware or software prefetch.
    Prefetch,
    /// Dirty writeback arriving from the level above.
    Writeback,
}

/// One reference as seen by the replacement policy.
///
/// The policy never dereferences anything: `pc` is opaque beyond hashing and
/// `paddr` is only read at cache-line granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// Program counter of the instruction that issued the reference.
    pub pc: u64,
    /// Physical byte address of the reference.
    pub paddr: u64,
    /// Request kind.
    pub kind: AccessKind,
}

impl Access {
    /// Creates a reference descriptor.
    pub const fn new(pc: u64, paddr: u64, kind: AccessKind) -> Self {
        Self { pc, paddr, kind }
    }
}
