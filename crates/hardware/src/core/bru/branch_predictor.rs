//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that all prediction
//! schemes implement. It provides a common interface for predicting a
//! conditional branch, training on the resolved outcome, and dumping live
//! predictor state.

use crate::common::bit::{BranchInstruction, BranchResult};
use crate::common::error::PredictorError;

/// Trait for branch prediction schemes.
///
/// A predictor is driven in predict/update pairs: call [`Self::predict`] once
/// for a branch occurrence, then [`Self::update`] exactly once with the real
/// outcome. Both operations derive their table key from the history state
/// current at the time of the call, so an `update` trains the entry the
/// preceding `predict` consulted.
///
/// Prediction and update are plain deterministic computations with no I/O;
/// a predictor owns all of its state and needs no coordination with other
/// predictor instances.
pub trait BranchPredictor {
    /// Predicts the outcome of a branch instruction.
    ///
    /// Read-only with respect to counters and history, aside from lazily
    /// inserting default table entries (itself idempotent): repeated calls
    /// without an intervening update return the same result.
    fn predict(&mut self, instruction: &BranchInstruction) -> BranchResult;

    /// Trains the predictor with the resolved outcome of a branch.
    ///
    /// Recomputes the saturating counter for the branch's current table key,
    /// stores it back, and shifts the outcome bit into the relevant history
    /// register(s).
    ///
    /// # Errors
    ///
    /// Propagates device errors from internal register writes. These do not
    /// occur when construction parameters are respected.
    fn update(
        &mut self,
        instruction: &BranchInstruction,
        actual: BranchResult,
    ) -> Result<(), PredictorError>;

    /// Returns a diagnostic dump of all live predictor state.
    ///
    /// Register contents are rendered in bit form and table entries in
    /// key-to-counter form, deterministically ordered. The exact formatting
    /// is not a compatibility contract.
    fn monitor(&self) -> String;
}
