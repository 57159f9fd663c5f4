//! History register devices.
//!
//! This module provides the two register devices the predictors are built
//! from. It provides:
//! 1. **Shift Register:** A fixed-width serial-in register holding the most
//!    recent branch outcomes, with snapshot reads and bulk loads.
//! 2. **Register Bank:** A lazily populated map from truncated instruction
//!    addresses to independent shift registers, one per monitored address.
//! 3. **Observability:** `Display` renderings of live register state for
//!    predictor snapshots.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use super::bit::{self, Bit};
use super::error::PredictorError;

/// A fixed-width ordered bit sequence with serial insert and bulk load.
///
/// The width is fixed at construction and never changes. Index 0 of a
/// snapshot is the most recently inserted bit; inserting shifts every bit one
/// position toward the evicted end and discards the oldest bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftRegister {
    bits: Vec<Bit>,
}

impl ShiftRegister {
    /// Creates a register of `width` bits, all zero.
    ///
    /// Callers validate widths before construction; predictor constructors
    /// reject zero widths with `InvalidConfiguration`.
    pub fn new(width: usize) -> Self {
        Self {
            bits: vec![Bit::Zero; width],
        }
    }

    /// Returns the register's fixed width.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Returns a non-destructive snapshot of the register contents.
    ///
    /// The most recently inserted bit occupies index 0.
    pub fn read(&self) -> &[Bit] {
        &self.bits
    }

    /// Shifts in `bit` at the newest position, evicting the oldest bit.
    ///
    /// Always succeeds; a zero-width register ignores the insert.
    pub fn insert(&mut self, bit: Bit) {
        if self.bits.is_empty() {
            return;
        }
        let _ = self.bits.pop();
        self.bits.insert(0, bit);
    }

    /// Replaces the entire register content.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::SizeMismatch`] unless `bits` has exactly the
    /// register's width. The register is untouched on failure.
    pub fn load(&mut self, bits: &[Bit]) -> Result<(), PredictorError> {
        if bits.len() != self.bits.len() {
            return Err(PredictorError::SizeMismatch {
                expected: self.bits.len(),
                actual: bits.len(),
            });
        }
        self.bits.copy_from_slice(bits);
        Ok(())
    }
}

impl fmt::Display for ShiftRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bit::render(&self.bits))
    }
}

/// A bank of independent shift registers indexed by truncated address.
///
/// Models one history register per monitored instruction address, bounded by
/// a fixed index width: lookups truncate the address to its low `index_bits`
/// bits, so addresses sharing a truncated index alias to the same register,
/// matching real hardware table sizing.
///
/// Registers are created zero-filled on first access and never removed.
#[derive(Clone, Debug)]
pub struct RegisterBank {
    index_bits: usize,
    register_width: usize,
    slots: BTreeMap<Vec<Bit>, ShiftRegister>,
}

impl RegisterBank {
    /// Creates an empty bank.
    ///
    /// `index_bits` bounds the address space to `2^index_bits` slots;
    /// `register_width` is the width of every slot register. Callers validate
    /// both widths before construction.
    pub const fn new(index_bits: usize, register_width: usize) -> Self {
        Self {
            index_bits,
            register_width,
            slots: BTreeMap::new(),
        }
    }

    /// Returns the address-truncation width in bits.
    pub const fn index_bits(&self) -> usize {
        self.index_bits
    }

    /// Returns the width of each slot register.
    pub const fn register_width(&self) -> usize {
        self.register_width
    }

    /// Returns the register for `address`, creating it zero-filled on first
    /// access.
    ///
    /// The address is truncated to the bank's index width before lookup. The
    /// returned reference allows further `insert`/`load` against that slot.
    pub fn read(&mut self, address: &[Bit]) -> &mut ShiftRegister {
        let index = bit::low_bits(address, self.index_bits);
        let width = self.register_width;
        self.slots.entry(index).or_insert_with_key(|key| {
            debug!(slot = %bit::render(key), width, "register bank slot allocated");
            ShiftRegister::new(width)
        })
    }

    /// Loads `bits` into the register selected by `address`.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::SizeMismatch`] unless `bits` has exactly the
    /// bank's register width, as with [`ShiftRegister::load`].
    pub fn write(&mut self, address: &[Bit], bits: &[Bit]) -> Result<(), PredictorError> {
        self.read(address).load(bits)
    }
}

impl fmt::Display for RegisterBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in &self.slots {
            writeln!(f, "  {} -> {slot}", bit::render(index))?;
        }
        Ok(())
    }
}
