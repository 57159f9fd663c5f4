//! Pattern history table.
//!
//! This module provides the counter store shared by the predictor variants.
//! It provides:
//! 1. **Lazy Associative Storage:** A map from bit-vector keys to fixed-width
//!    counter blocks where a key is present iff it has been touched; absent
//!    keys read as the all-zero default without mutating the table.
//! 2. **Key Derivation:** Direct keying by a history register snapshot, and
//!    the composite address-then-history keying used by per-address tables.
//! 3. **Observability:** A deterministic `Display` rendering of every live
//!    entry for predictor snapshots.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::common::bit::{self, Bit};
use crate::common::error::PredictorError;

/// A map from bit-vector keys to saturating-counter blocks.
///
/// Every block has the same fixed width, set at construction. Entries are
/// created only by explicit insertion; the read path supplies the all-zero
/// default (counter value 0, strongly not taken) for untouched keys.
#[derive(Clone, Debug)]
pub struct PatternHistoryTable {
    block_width: usize,
    blocks: BTreeMap<Vec<Bit>, Vec<Bit>>,
}

impl PatternHistoryTable {
    /// Creates an empty table whose blocks are `block_width` bits wide.
    ///
    /// Callers validate the width before construction.
    pub const fn new(block_width: usize) -> Self {
        Self {
            block_width,
            blocks: BTreeMap::new(),
        }
    }

    /// Returns the fixed width of every counter block.
    pub const fn block_width(&self) -> usize {
        self.block_width
    }

    /// Returns the all-zero default block.
    pub fn default_block(&self) -> Vec<Bit> {
        vec![Bit::Zero; self.block_width]
    }

    /// Returns the block stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::KeyNotFound`] if `key` was never inserted.
    /// The prediction path guards every lookup with [`Self::put_if_absent`],
    /// so a miss here is an internal invariant violation, not a user-facing
    /// condition.
    pub fn get(&self, key: &[Bit]) -> Result<&[Bit], PredictorError> {
        self.blocks
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| PredictorError::KeyNotFound(bit::render(key)))
    }

    /// Returns a copy of the block under `key`, or the all-zero default if
    /// the key was never inserted.
    ///
    /// Read-only: an absent key does not create an entry.
    pub fn get_or_default(&self, key: &[Bit]) -> Vec<Bit> {
        self.blocks
            .get(key)
            .cloned()
            .unwrap_or_else(|| self.default_block())
    }

    /// Stores `block` under `key`, overwriting any previous value.
    pub fn put(&mut self, key: Vec<Bit>, block: Vec<Bit>) {
        debug_assert_eq!(block.len(), self.block_width);
        let _ = self.blocks.insert(key, block);
    }

    /// Stores `default` under `key` only if the key is absent. Idempotent.
    pub fn put_if_absent(&mut self, key: &[Bit], default: Vec<Bit>) {
        if !self.blocks.contains_key(key) {
            debug!(key = %bit::render(key), "table entry allocated");
            let _ = self.blocks.insert(key.to_vec(), default);
        }
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if no key has been touched yet.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl fmt::Display for PatternHistoryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, block) in &self.blocks {
            writeln!(f, "  {} -> {}", bit::render(key), bit::render(block))?;
        }
        Ok(())
    }
}

/// Builds the composite key used by per-address tables.
///
/// The key is the branch address truncated to `index_bits` low-order bits,
/// concatenated with the history snapshot — address bits first. The ordering
/// is a contract: it defines how the table partitions between addresses.
pub fn composite_key(address: &[Bit], index_bits: usize, history: &[Bit]) -> Vec<Bit> {
    let mut key = bit::low_bits(address, index_bits);
    key.extend_from_slice(history);
    key
}
