//! # Unit Components
//!
//! Central hub for the policy engine's unit tests, organized to mirror
//! the crate's module tree.



/// Unit tests for the replacement policies and their components.
///
/// This module aggregates tests for:
/// - Signature folding and the predictor tables it indexes.
/// - The victim scan and per-line recency state.
/// - The adaptive controller's windowed feedback.
/// - The composed policies behind the host-facing seam.
pub mod policy;
