//! Configuration system for the branch predictor simulator.
//!
//! This module defines the configuration structures and enums used to
//! parameterize the predictors. It provides:
//! 1. **Defaults:** Baseline hardware constants (history, counter, and
//!    address-index widths).
//! 2. **Structures:** The root config selecting a prediction scheme and its
//!    register sizing.
//! 3. **Validation:** Fail-fast rejection of degenerate widths before any
//!    predictor state is created.
//!
//! Configuration is supplied via JSON from an external driver, or use
//! `Config::default()` directly.

use serde::Deserialize;

use crate::common::error::PredictorError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline predictor sizing when not explicitly
/// overridden.
mod defaults {
    /// Default branch history register width (4 bits).
    ///
    /// Sixteen distinct history patterns per register, the classic two-level
    /// adaptive baseline.
    pub const BHR_SIZE: usize = 4;

    /// Default saturating counter width (2 bits).
    ///
    /// Two-bit counters tolerate a single anomalous outcome without flipping
    /// the prediction.
    pub const COUNTER_SIZE: usize = 2;

    /// Default address-index width (8 bits).
    ///
    /// Bounds per-address structures to 256 slots; addresses sharing the
    /// same truncated index alias to the same slot.
    pub const ADDRESS_INDEX_BITS: usize = 8;
}

/// Branch prediction scheme types.
///
/// Specifies which two-level adaptive composition the simulator builds:
/// how history registers are partitioned and how they index the pattern
/// history table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PredictorKind {
    /// Global history, global table.
    ///
    /// One BHR and one table shared by all instructions.
    #[default]
    GAg,
    /// Per-address history, global table.
    ///
    /// One BHR per truncated instruction address, one shared table.
    PAg,
    /// Per-address history, per-address table.
    ///
    /// Both history and counters partitioned by address.
    PAp,
}

/// Root configuration structure containing all predictor settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use bpsim_core::config::{Config, PredictorKind};
///
/// let config = Config::default();
/// assert_eq!(config.predictor, PredictorKind::GAg);
/// assert_eq!(config.bhr_size, 4);
/// ```
///
/// Deserializing from JSON (typical driver usage):
///
/// ```
/// use bpsim_core::config::{Config, PredictorKind};
///
/// let config = Config::from_json(r#"{"predictor": "PAp", "bhr_size": 6}"#).unwrap();
/// assert_eq!(config.predictor, PredictorKind::PAp);
/// assert_eq!(config.bhr_size, 6);
/// assert_eq!(config.counter_size, 2);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Prediction scheme to build.
    #[serde(default)]
    pub predictor: PredictorKind,

    /// Branch history register width in bits.
    #[serde(default = "Config::default_bhr_size")]
    pub bhr_size: usize,

    /// Saturating counter width in bits.
    #[serde(default = "Config::default_counter_size")]
    pub counter_size: usize,

    /// Address-truncation width in bits (PAg/PAp only).
    ///
    /// Sizes the register bank's address space to `2^address_index_bits`
    /// slots and, for PAp, the address component of the composite table key.
    #[serde(default = "Config::default_address_index_bits")]
    pub address_index_bits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predictor: PredictorKind::default(),
            bhr_size: defaults::BHR_SIZE,
            counter_size: defaults::COUNTER_SIZE,
            address_index_bits: defaults::ADDRESS_INDEX_BITS,
        }
    }
}

impl Config {
    /// Returns the default branch history register width.
    fn default_bhr_size() -> usize {
        defaults::BHR_SIZE
    }

    /// Returns the default saturating counter width.
    fn default_counter_size() -> usize {
        defaults::COUNTER_SIZE
    }

    /// Returns the default address-index width.
    fn default_address_index_bits() -> usize {
        defaults::ADDRESS_INDEX_BITS
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// Absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::MalformedConfig`] if the JSON does not parse
    /// and [`PredictorError::InvalidConfiguration`] if a width is zero.
    pub fn from_json(json: &str) -> Result<Self, PredictorError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the width parameters for the selected scheme.
    ///
    /// The address-index width is only consulted by the per-address schemes
    /// and is not validated for GAg.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::InvalidConfiguration`] naming the first
    /// zero width found.
    pub fn validate(&self) -> Result<(), PredictorError> {
        if self.bhr_size == 0 {
            return Err(PredictorError::InvalidConfiguration(
                "BHR width must be at least one bit".into(),
            ));
        }
        if self.counter_size == 0 {
            return Err(PredictorError::InvalidConfiguration(
                "counter width must be at least one bit".into(),
            ));
        }
        if self.predictor != PredictorKind::GAg && self.address_index_bits == 0 {
            return Err(PredictorError::InvalidConfiguration(
                "address index width must be at least one bit".into(),
            ));
        }
        Ok(())
    }
}
