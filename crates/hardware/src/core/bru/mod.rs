//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the two-level adaptive prediction schemes: GAg
//! (global history, global table), PAg (per-address history, global table),
//! and PAp (per-address history, per-address table), together with the
//! common predictor trait.

pub use self::branch_predictor::BranchPredictor;

/// Branch predictor trait and common functionality.
pub mod branch_predictor;

/// Global history, global table predictor.
pub mod gag;

/// Per-address history, global table predictor.
pub mod pag;

/// Per-address history, per-address table predictor.
pub mod pap;

use tracing::debug;

use self::{gag::GagPredictor, pag::PagPredictor, pap::PapPredictor};
use crate::common::bit::{BranchInstruction, BranchResult};
use crate::common::error::PredictorError;
use crate::config::{Config, PredictorKind};

/// Enum wrapper for static dispatch of branch predictors.
/// This avoids vtable lookups when replaying long branch traces.
#[derive(Clone, Debug)]
pub enum BranchPredictorWrapper {
    /// Global history, global table.
    GAg(GagPredictor),
    /// Per-address history, global table.
    PAg(PagPredictor),
    /// Per-address history, per-address table.
    PAp(PapPredictor),
}

impl BranchPredictorWrapper {
    /// Creates a new branch predictor wrapper based on configuration.
    ///
    /// Selects the prediction scheme from `config.predictor` and initializes
    /// it with the configured register and counter widths.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::InvalidConfiguration`] if the configuration
    /// fails validation.
    pub fn new(config: &Config) -> Result<Self, PredictorError> {
        config.validate()?;
        debug!(kind = ?config.predictor, bhr = config.bhr_size, counter = config.counter_size, "constructing predictor");

        match config.predictor {
            PredictorKind::GAg => Ok(Self::GAg(GagPredictor::new(
                config.bhr_size,
                config.counter_size,
            )?)),
            PredictorKind::PAg => Ok(Self::PAg(PagPredictor::new(
                config.bhr_size,
                config.counter_size,
                config.address_index_bits,
            )?)),
            PredictorKind::PAp => Ok(Self::PAp(PapPredictor::new(
                config.bhr_size,
                config.counter_size,
                config.address_index_bits,
            )?)),
        }
    }
}

impl BranchPredictor for BranchPredictorWrapper {
    /// Predicts the outcome of a branch using the configured scheme.
    #[inline]
    fn predict(&mut self, instruction: &BranchInstruction) -> BranchResult {
        match self {
            Self::GAg(bp) => bp.predict(instruction),
            Self::PAg(bp) => bp.predict(instruction),
            Self::PAp(bp) => bp.predict(instruction),
        }
    }

    /// Trains the configured scheme with the actual branch outcome.
    #[inline]
    fn update(
        &mut self,
        instruction: &BranchInstruction,
        actual: BranchResult,
    ) -> Result<(), PredictorError> {
        match self {
            Self::GAg(bp) => bp.update(instruction, actual),
            Self::PAg(bp) => bp.update(instruction, actual),
            Self::PAp(bp) => bp.update(instruction, actual),
        }
    }

    /// Dumps the live state of the configured scheme.
    fn monitor(&self) -> String {
        match self {
            Self::GAg(bp) => bp.monitor(),
            Self::PAg(bp) => bp.monitor(),
            Self::PAp(bp) => bp.monitor(),
        }
    }
}
