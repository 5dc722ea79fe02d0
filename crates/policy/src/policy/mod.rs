//! Replacement policy implementations and their shared seam.
//!
//! The building blocks compose bottom-up:
//! 1. **Signature:** Folds PCs into predictor table indices.
//! 2. **Recency:** Per-line state and the shared victim scan.
//! 3. **Reuse:** Per-signature hit/death history.
//! 4. **Stream:** Per-signature stride detection.
//! 5. **Insertion:** Maps predictor verdicts onto insertion tiers.
//! 6. **Adaptive:** Windowed feedback retuning the stream threshold.
//!
//! The [`ReplacementPolicy`] trait is the host-facing seam; the policies
//! behind it are [`AdaptiveShipPolicy`] and the [`SrripPolicy`] baseline.

/// Windowed feedback controller.
pub mod adaptive;
/// Insertion tier selection.
pub mod insertion;
/// Per-line recency state and victim scanning.
pub mod recency;
/// Per-signature reuse history.
pub mod reuse;
/// The adaptive signature-based policy.
pub mod ship;
/// PC signature folding.
pub mod signature;
/// The static RRIP baseline.
pub mod srrip;
/// Per-signature stride detection.
pub mod stream;

pub use self::ship::AdaptiveShipPolicy;
pub use self::srrip::SrripPolicy;

use crate::common::Access;
use crate::config::{PolicyConfig, PolicyKind};
use crate::stats::PolicyStats;

/// Host-facing seam every replacement policy implements.
///
/// The host calls [`select_victim`](Self::select_victim) once per fill
/// and [`record_access`](Self::record_access) once per access, hit or
/// miss. Implementations own all replacement state; the host never
/// mutates it directly.
pub trait ReplacementPolicy: Send + Sync {
    /// Picks the way to evict from `set` and installs `access`'s line
    /// in its place.
    ///
    /// Returns the chosen way. Predictor training for the eviction and
    /// the install happen here, so the host must call this exactly once
    /// per fill.
    ///
    /// # Panics
    ///
    /// May panic if `set` is out of range.
    fn select_victim(&mut self, set: usize, access: &Access) -> usize;

    /// Records the outcome of one access.
    ///
    /// On a hit, `way` names the resident line. On a miss, `way` is the
    /// way [`select_victim`](Self::select_victim) returned for the fill.
    ///
    /// # Panics
    ///
    /// May panic if `set` or `way` is out of range.
    fn record_access(&mut self, set: usize, way: usize, access: &Access, hit: bool);

    /// Borrows the lifetime counters.
    fn stats(&self) -> &PolicyStats;

    /// Renders the end-of-run report.
    fn report(&self) -> String;

    /// Periodic host callback between report intervals.
    ///
    /// The default is a no-op; policies that sample mid-run state can
    /// override it.
    fn heartbeat(&self) {}
}

/// Builds the configured policy behind the shared seam.
///
/// # Panics
///
/// Panics if `config` fails validation.
pub fn build_policy(config: &PolicyConfig) -> Box<dyn ReplacementPolicy + Send + Sync> {
    match config.kind {
        PolicyKind::AdaptiveShip => Box::new(AdaptiveShipPolicy::new(config)),
        PolicyKind::Srrip => Box::new(SrripPolicy::new(config)),
    }
}
