//! Common types used throughout the replacement policy engine.
//!
//! This module provides the building blocks shared by every policy
//! implementation. It includes:
//! 1. **Memory Access:** Descriptors for the references the host hands in.
//! 2. **Saturating Counters:** The bounded counter all prediction state is built from.

/// Memory reference descriptors (kind, PC, physical address).
pub mod access;

/// Saturating counter primitive.
pub mod counter;

pub use access::{Access, AccessKind};
pub use counter::SatCounter;
