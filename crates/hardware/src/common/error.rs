//! Predictor error definitions.
//!
//! This module defines the error type shared by every fallible operation in
//! the crate. It provides:
//! 1. **Register Errors:** Width violations on bulk register loads.
//! 2. **Construction Errors:** Rejection of degenerate width parameters
//!    before any predictor state is created.
//! 3. **Table Errors:** Lookup misses on untouched table keys (an internal
//!    invariant; the prediction path always guards with a default insertion).
//! 4. **Configuration Errors:** Malformed JSON configuration input.
//!
//! Errors are surfaced synchronously to the caller of the offending
//! operation and are never retried internally. Each operation either fully
//! applies or rejects before mutating predictor state.

use thiserror::Error;

/// Errors produced by predictor construction and device operations.
#[derive(Debug, Error)]
pub enum PredictorError {
    /// A bulk load or write supplied a bit-vector whose length does not match
    /// the target register's fixed width.
    ///
    /// Non-recoverable for that call; retry with a correctly sized value.
    /// Internal operations never produce this when construction parameters
    /// are respected.
    #[error("register holds {expected} bits but was given {actual}")]
    SizeMismatch {
        /// The register's fixed width.
        expected: usize,
        /// The length of the supplied bit-vector.
        actual: usize,
    },

    /// A width parameter at construction time was zero.
    ///
    /// Raised before any state is created.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A table lookup on a key that was never inserted.
    ///
    /// Callers on the prediction path guard every lookup with a default
    /// insertion, so this indicates a violated internal invariant rather
    /// than a user-facing condition.
    #[error("no table entry for key {0}")]
    KeyNotFound(String),

    /// The supplied JSON did not parse into a configuration.
    #[error("malformed configuration: {0}")]
    MalformedConfig(#[from] serde_json::Error),
}
