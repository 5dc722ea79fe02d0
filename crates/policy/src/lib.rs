//! An adaptive signature-based replacement policy engine for
//! set-associative last-level cache simulation.
//!
//! The engine decides which line to evict and how protected each fill
//! starts out, using PC-signature predictors instead of pure recency:
//! 1. **Recency tracking:** RRIP-style per-line aging and victim scans.
//! 2. **Reuse history:** Per-signature counters trained by hits and
//!    dead evictions.
//! 3. **Stream detection:** Per-signature stride confidence that demotes
//!    sequential fills.
//! 4. **Adaptive control:** A windowed feedback loop retuning the stream
//!    threshold and resetting learned strides on phase changes.
//! 5. **Statistics:** Lifetime and per-window counters with a rendered
//!    report.
//!
//! # Examples
//!
//! ```
//! use shipd_core::{build_policy, Access, AccessKind, PolicyConfig, ReplacementPolicy};
//!
//! let config = PolicyConfig {
//!     sets: 64,
//!     ways: 4,
//!     ..PolicyConfig::default()
//! };
//! let mut policy = build_policy(&config);
//!
//! let access = Access::new(0x4010, 0x8000, AccessKind::Load);
//! let way = policy.select_victim(5, &access);
//! policy.record_access(5, way, &access, false);
//!
//! assert_eq!(policy.stats().misses, 1);
//! ```

/// Shared building blocks: access descriptors and saturating counters.
pub mod common;
/// Configuration structures, defaults, and validation.
pub mod config;
/// Replacement policy implementations and their shared seam.
pub mod policy;
/// Lifetime and per-window statistics.
pub mod stats;

/// Access descriptor handed in by the host simulator.
pub use common::{Access, AccessKind};
/// Configuration surface.
pub use config::{AdaptiveConfig, ConfigError, PolicyConfig, PolicyKind, SignatureConfig};
/// Policy seam, factory, and the concrete implementations.
pub use policy::{build_policy, AdaptiveShipPolicy, ReplacementPolicy, SrripPolicy};
/// Lifetime counters exposed through the seam.
pub use stats::{EpochWindow, PolicyStats};
