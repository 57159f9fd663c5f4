//! Predictor core (counter logic, pattern history tables, prediction schemes).
//!
//! This module houses the machinery the predictors are assembled from:
//! 1. **Counter Logic:** Pure saturating/wrapping advancement of counter
//!    blocks and the taken/not-taken decision rule.
//! 2. **Pattern History Tables:** Lazy associative counter storage with
//!    direct and composite key derivation.
//! 3. **Branch Prediction Unit:** The GAg/PAg/PAp state machines behind the
//!    common `BranchPredictor` trait.

/// Branch prediction unit (predictor trait and the three schemes).
pub mod bru;

/// Counter combinational logic.
pub mod counter;

/// Pattern history table and key derivation.
pub mod pht;
