//! Unit tests for the replacement policies and their components.

/// Tests for insertion tier selection.
pub mod insertion;
/// End-to-end tests for the adaptive policy behind the seam.
pub mod ship;
/// Tests for the static RRIP baseline.
pub mod srrip;
