//! Branch predictor simulator library.
//!
//! This crate implements bit-accurate two-level adaptive branch predictors
//! with the following:
//! 1. **Devices:** Single-bit values, fixed-width shift registers, and
//!    per-address register banks.
//! 2. **Core:** Saturating-counter logic, lazily populated pattern history
//!    tables, and the GAg/PAg/PAp prediction schemes behind one trait.
//! 3. **Configuration:** Scheme selection and register sizing, deserializable
//!    from JSON with validated defaults.
//!
//! A predictor is driven in predict/update pairs by an external trace
//! driver: `predict` derives a table key from the current history state and
//! decodes the selected counter's top bit, and `update` trains that counter
//! and shifts the real outcome into the history register(s).

/// Common types and devices (bits, branch values, registers, errors).
pub mod common;
/// Simulator configuration (defaults, scheme selection, validation).
pub mod config;
/// Predictor core (counter logic, history tables, prediction schemes).
pub mod core;

/// Crate-wide error type for register, table, and configuration failures.
pub use crate::common::error::PredictorError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Common interface implemented by every prediction scheme.
pub use crate::core::bru::BranchPredictor;
/// Configuration-driven predictor; construct with `BranchPredictorWrapper::new`.
pub use crate::core::bru::BranchPredictorWrapper;
