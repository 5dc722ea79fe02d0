//! Configuration system for the replacement policy engine.
//!
//! This module defines all configuration structures and enums used to
//! parameterize a policy instance. It provides:
//! 1. **Defaults:** Baseline geometry and tuning constants (LLC shape, table sizes, window tuning).
//! 2. **Structures:** Hierarchical config for geometry, signature tables, and the adaptive controller.
//! 3. **Enums:** Selectable policy implementations.
//! 4. **Validation:** Domain checks producing [`ConfigError`] before an instance is built.
//!
//! Configuration is supplied via JSON from the host simulator, or use
//! `PolicyConfig::default()` for the reference LLC shape.

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants for the policy engine.
///
/// These values reproduce the reference last-level cache when not
/// explicitly overridden by the host.
mod defaults {
    /// Number of sets in the last-level cache.
    ///
    /// With the default associativity and line size this models a 2 MiB LLC
    /// (2048 sets x 16 ways x 64 B).
    pub const SETS: usize = 2048;

    /// Associativity (ways per set) of the last-level cache.
    pub const WAYS: usize = 16;

    /// Cache line size in bytes.
    ///
    /// Block addresses are byte addresses divided by the line size; stride
    /// detection compares consecutive block addresses per signature.
    pub const LINE_BYTES: usize = 64;

    /// Inclusive per-line recency bound (2-bit RRIP-style recency).
    pub const MAX_RECENCY: u8 = 3;

    /// Number of signature table entries, shared by the reuse and stream tables.
    ///
    /// Must be a power of two: signatures are folded PCs masked to this size.
    pub const SIGNATURE_TABLE_SIZE: usize = 2048;

    /// Initial per-signature reuse counter value.
    ///
    /// Starts at the hot threshold, so an unseen signature installs
    /// protected until an eviction proves otherwise.
    pub const REUSE_INIT: u8 = 2;

    /// Inclusive reuse counter bound (2-bit).
    pub const REUSE_MAX: u8 = 3;

    /// Reuse counter value at or above which a signature predicts reuse.
    pub const REUSE_THRESHOLD: u8 = 2;

    /// Initial per-signature stream counter value.
    pub const STREAM_INIT: u8 = 1;

    /// Inclusive stream counter bound (2-bit).
    ///
    /// Also the ceiling for the adaptive classification threshold.
    pub const STREAM_MAX: u8 = 3;

    /// Accesses per adaptive controller window.
    pub const EPOCH_LENGTH: u64 = 100_000;

    /// Miss-rate swing between consecutive windows that declares a phase change.
    pub const PHASE_DELTA: f64 = 0.05;

    /// Stream hit ratio below which the classification threshold rises.
    pub const STREAM_LOW_RATIO: f64 = 0.10;

    /// Stream hit ratio above which the classification threshold falls.
    pub const STREAM_HIGH_RATIO: f64 = 0.70;
}

/// Selectable replacement policy implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Adaptive signature-based policy.
    ///
    /// Reuse history plus stream detection, with a feedback-controlled
    /// classification threshold.
    #[default]
    #[serde(alias = "ship")]
    AdaptiveShip,
    /// Static RRIP baseline.
    ///
    /// Inserts distant, promotes on hit, keeps no predictor state.
    Srrip,
}

/// Root configuration for one policy instance.
///
/// # Examples
///
/// ```
/// use shipd_core::PolicyConfig;
///
/// let config: PolicyConfig = serde_json::from_str(
///     r#"{ "sets": 64, "ways": 4, "signature": { "table_size": 256 } }"#,
/// )?;
/// assert_eq!(config.sets, 64);
/// assert_eq!(config.ways, 4);
/// assert_eq!(config.signature.table_size, 256);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Policy implementation to build.
    #[serde(default)]
    pub kind: PolicyKind,

    /// Number of sets.
    #[serde(default = "PolicyConfig::default_sets")]
    pub sets: usize,

    /// Associativity (number of ways).
    #[serde(default = "PolicyConfig::default_ways")]
    pub ways: usize,

    /// Cache line size in bytes (power of two).
    #[serde(default = "PolicyConfig::default_line_bytes")]
    pub line_bytes: usize,

    /// Inclusive per-line recency bound.
    #[serde(default = "PolicyConfig::default_max_recency")]
    pub max_recency: u8,

    /// Signature table shape and counter tuning.
    #[serde(default)]
    pub signature: SignatureConfig,

    /// Adaptive controller tuning.
    #[serde(default)]
    pub adaptive: AdaptiveConfig,
}

impl PolicyConfig {
    /// Parses a configuration from JSON, then validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or the first
    /// validation error the parsed configuration fails with.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every parameter against its documented domain.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sets == 0 {
            return Err(ConfigError::ZeroGeometry("sets"));
        }
        if self.ways == 0 {
            return Err(ConfigError::ZeroGeometry("ways"));
        }
        if !self.line_bytes.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "line_bytes",
                value: self.line_bytes,
            });
        }
        if self.max_recency == 0 {
            return Err(ConfigError::ZeroGeometry("max_recency"));
        }
        self.signature.validate()?;
        self.adaptive.validate()
    }

    /// Returns the default set count.
    fn default_sets() -> usize {
        defaults::SETS
    }

    /// Returns the default associativity.
    fn default_ways() -> usize {
        defaults::WAYS
    }

    /// Returns the default cache line size in bytes.
    fn default_line_bytes() -> usize {
        defaults::LINE_BYTES
    }

    /// Returns the default recency bound.
    fn default_max_recency() -> u8 {
        defaults::MAX_RECENCY
    }
}

impl Default for PolicyConfig {
    /// Returns the reference LLC configuration.
    fn default() -> Self {
        Self {
            kind: PolicyKind::default(),
            sets: defaults::SETS,
            ways: defaults::WAYS,
            line_bytes: defaults::LINE_BYTES,
            max_recency: defaults::MAX_RECENCY,
            signature: SignatureConfig::default(),
            adaptive: AdaptiveConfig::default(),
        }
    }
}

/// Signature table configuration, shared by the reuse and stream tables.
#[derive(Debug, Clone, Deserialize)]
pub struct SignatureConfig {
    /// Number of table entries (power of two).
    #[serde(default = "SignatureConfig::default_table_size")]
    pub table_size: usize,

    /// Initial reuse counter value.
    #[serde(default = "SignatureConfig::default_reuse_init")]
    pub reuse_init: u8,

    /// Inclusive reuse counter bound.
    #[serde(default = "SignatureConfig::default_reuse_max")]
    pub reuse_max: u8,

    /// Reuse counter value at or above which a signature predicts reuse.
    #[serde(default = "SignatureConfig::default_reuse_threshold")]
    pub reuse_threshold: u8,

    /// Initial stream counter value.
    #[serde(default = "SignatureConfig::default_stream_init")]
    pub stream_init: u8,

    /// Inclusive stream counter bound and classification threshold ceiling.
    #[serde(default = "SignatureConfig::default_stream_max")]
    pub stream_max: u8,
}

impl SignatureConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.table_size.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "signature.table_size",
                value: self.table_size,
            });
        }
        if self.reuse_init > self.reuse_max {
            return Err(ConfigError::CounterAboveMax {
                field: "signature.reuse_init",
                value: self.reuse_init,
                max: self.reuse_max,
            });
        }
        if self.reuse_threshold > self.reuse_max {
            return Err(ConfigError::CounterAboveMax {
                field: "signature.reuse_threshold",
                value: self.reuse_threshold,
                max: self.reuse_max,
            });
        }
        if self.stream_max == 0 {
            return Err(ConfigError::ZeroGeometry("signature.stream_max"));
        }
        if self.stream_init > self.stream_max {
            return Err(ConfigError::CounterAboveMax {
                field: "signature.stream_init",
                value: self.stream_init,
                max: self.stream_max,
            });
        }
        Ok(())
    }

    /// Returns the default signature table entry count.
    fn default_table_size() -> usize {
        defaults::SIGNATURE_TABLE_SIZE
    }

    /// Returns the default initial reuse counter value.
    fn default_reuse_init() -> u8 {
        defaults::REUSE_INIT
    }

    /// Returns the default reuse counter bound.
    fn default_reuse_max() -> u8 {
        defaults::REUSE_MAX
    }

    /// Returns the default hot-prediction threshold.
    fn default_reuse_threshold() -> u8 {
        defaults::REUSE_THRESHOLD
    }

    /// Returns the default initial stream counter value.
    fn default_stream_init() -> u8 {
        defaults::STREAM_INIT
    }

    /// Returns the default stream counter bound.
    fn default_stream_max() -> u8 {
        defaults::STREAM_MAX
    }
}

impl Default for SignatureConfig {
    /// Returns the reference signature table tuning.
    fn default() -> Self {
        Self {
            table_size: defaults::SIGNATURE_TABLE_SIZE,
            reuse_init: defaults::REUSE_INIT,
            reuse_max: defaults::REUSE_MAX,
            reuse_threshold: defaults::REUSE_THRESHOLD,
            stream_init: defaults::STREAM_INIT,
            stream_max: defaults::STREAM_MAX,
        }
    }
}

/// Adaptive controller configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdaptiveConfig {
    /// Accesses per controller window.
    #[serde(default = "AdaptiveConfig::default_epoch_length")]
    pub epoch_length: u64,

    /// Miss-rate swing between consecutive windows that declares a phase change.
    #[serde(default = "AdaptiveConfig::default_phase_delta")]
    pub phase_delta: f64,

    /// Stream hit ratio below which the classification threshold rises.
    #[serde(default = "AdaptiveConfig::default_stream_low_ratio")]
    pub stream_low_ratio: f64,

    /// Stream hit ratio above which the classification threshold falls.
    #[serde(default = "AdaptiveConfig::default_stream_high_ratio")]
    pub stream_high_ratio: f64,
}

impl AdaptiveConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.epoch_length == 0 {
            return Err(ConfigError::ZeroGeometry("adaptive.epoch_length"));
        }
        if !(self.phase_delta > 0.0 && self.phase_delta <= 1.0) {
            return Err(ConfigError::RatioOutOfRange {
                field: "adaptive.phase_delta",
                range: "(0, 1]",
                value: self.phase_delta,
            });
        }
        if !(0.0..=1.0).contains(&self.stream_low_ratio) {
            return Err(ConfigError::RatioOutOfRange {
                field: "adaptive.stream_low_ratio",
                range: "[0, 1]",
                value: self.stream_low_ratio,
            });
        }
        if !(0.0..=1.0).contains(&self.stream_high_ratio) {
            return Err(ConfigError::RatioOutOfRange {
                field: "adaptive.stream_high_ratio",
                range: "[0, 1]",
                value: self.stream_high_ratio,
            });
        }
        if self.stream_low_ratio >= self.stream_high_ratio {
            return Err(ConfigError::InvertedRatios {
                low: self.stream_low_ratio,
                high: self.stream_high_ratio,
            });
        }
        Ok(())
    }

    /// Returns the default window length in accesses.
    fn default_epoch_length() -> u64 {
        defaults::EPOCH_LENGTH
    }

    /// Returns the default phase-change miss-rate swing.
    fn default_phase_delta() -> f64 {
        defaults::PHASE_DELTA
    }

    /// Returns the default lower stream-ratio feedback bound.
    fn default_stream_low_ratio() -> f64 {
        defaults::STREAM_LOW_RATIO
    }

    /// Returns the default upper stream-ratio feedback bound.
    fn default_stream_high_ratio() -> f64 {
        defaults::STREAM_HIGH_RATIO
    }
}

impl Default for AdaptiveConfig {
    /// Returns the reference controller tuning.
    fn default() -> Self {
        Self {
            epoch_length: defaults::EPOCH_LENGTH,
            phase_delta: defaults::PHASE_DELTA,
            stream_low_ratio: defaults::STREAM_LOW_RATIO,
            stream_high_ratio: defaults::STREAM_HIGH_RATIO,
        }
    }
}

/// Reasons a configuration is rejected before an instance is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A JSON document failed to parse.
    #[error("malformed configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A structural parameter that must be non-zero was zero.
    #[error("{0} must be non-zero")]
    ZeroGeometry(&'static str),

    /// A mask-indexed size was not a power of two.
    #[error("{field} must be a power of two, got {value}")]
    NotPowerOfTwo {
        /// Offending parameter.
        field: &'static str,
        /// Supplied value.
        value: usize,
    },

    /// A counter's initial value or threshold exceeded its bound.
    #[error("{field} is {value} but the counter saturates at {max}")]
    CounterAboveMax {
        /// Offending parameter.
        field: &'static str,
        /// Supplied value.
        value: u8,
        /// Inclusive counter bound.
        max: u8,
    },

    /// A ratio or delta left its documented interval.
    #[error("{field} must lie in {range}, got {value}")]
    RatioOutOfRange {
        /// Offending parameter.
        field: &'static str,
        /// Expected interval.
        range: &'static str,
        /// Supplied value.
        value: f64,
    },

    /// The lower stream-ratio bound met or exceeded the upper one.
    #[error("stream ratio bounds inverted: low {low} >= high {high}")]
    InvertedRatios {
        /// Lower feedback bound.
        low: f64,
        /// Upper feedback bound.
        high: f64,
    },
}
