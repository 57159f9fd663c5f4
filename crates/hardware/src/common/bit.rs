//! Bit-level primitives for predictor state.
//!
//! This module defines the single-bit value type and the branch-level data
//! carried through the predictors. It provides:
//! 1. **Bit:** A two-state value with boolean conversions, ordered and hashable
//!    so bit-vectors can key associative tables.
//! 2. **Branch Values:** The branch outcome type and the immutable branch
//!    instruction record.
//! 3. **Bit-Vector Helpers:** Conversions between bit-vectors and unsigned
//!    integers, low-order truncation, and rendering for diagnostics.
//!
//! Throughout the crate, index 0 of a bit slice is the most significant
//! position: the most recently inserted bit of a shift register and the top
//! bit of a counter block.

use std::fmt;

/// A single binary value.
///
/// `Bit` is copied by value and carries no ownership; sequences of bits model
/// register contents and table keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    /// The cleared state.
    Zero,
    /// The set state.
    One,
}

impl Bit {
    /// Creates a bit from a boolean (`true` maps to [`Bit::One`]).
    #[inline]
    pub const fn of(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }

    /// Returns the bit as a boolean (`true` for [`Bit::One`]).
    #[inline]
    pub const fn value(self) -> bool {
        matches!(self, Self::One)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Self::of(value)
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.value()
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "0"),
            Self::One => write!(f, "1"),
        }
    }
}

/// Resolved direction of a conditional branch.
///
/// Convertible to and from a single [`Bit`] (one means taken), both as the
/// outcome bit shifted into history registers and as the decision derived
/// from a counter's top bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchResult {
    /// The branch was (or is predicted to be) taken.
    Taken,
    /// The branch was (or is predicted to be) not taken.
    NotTaken,
}

impl BranchResult {
    /// Creates a result from a boolean (`true` maps to [`BranchResult::Taken`]).
    #[inline]
    pub const fn of(taken: bool) -> Self {
        if taken { Self::Taken } else { Self::NotTaken }
    }

    /// Returns `true` if the branch is taken.
    #[inline]
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken)
    }
}

impl From<Bit> for BranchResult {
    fn from(bit: Bit) -> Self {
        Self::of(bit.value())
    }
}

impl From<BranchResult> for Bit {
    fn from(result: BranchResult) -> Self {
        Self::of(result.is_taken())
    }
}

impl fmt::Display for BranchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Taken => write!(f, "taken"),
            Self::NotTaken => write!(f, "not taken"),
        }
    }
}

/// An immutable branch instruction record.
///
/// Carries the instruction's address as a bit-vector (index 0 = MSB). The
/// predictors derive register-bank indices and table keys from the low-order
/// address bits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BranchInstruction {
    address: Vec<Bit>,
}

impl BranchInstruction {
    /// Creates an instruction from an explicit address bit-vector.
    pub fn new(address: Vec<Bit>) -> Self {
        Self { address }
    }

    /// Creates an instruction from a program counter value.
    ///
    /// The address is encoded as `width` bits, most significant first; only
    /// the low `width` bits of `pc` are kept.
    pub fn from_pc(pc: u64, width: usize) -> Self {
        Self {
            address: from_value(pc, width),
        }
    }

    /// Returns the instruction address bits.
    pub fn address(&self) -> &[Bit] {
        &self.address
    }
}

impl fmt::Display for BranchInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(&self.address))
    }
}

/// Interprets a bit-vector as an unsigned integer (index 0 = MSB).
///
/// Vectors wider than 64 bits keep only the low 64 bits of the value; the
/// register widths this crate works with are far below that.
pub fn to_value(bits: &[Bit]) -> u64 {
    bits.iter()
        .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit.value()))
}

/// Encodes the low `width` bits of `value` as a bit-vector (index 0 = MSB).
pub fn from_value(value: u64, width: usize) -> Vec<Bit> {
    (0..width)
        .rev()
        .map(|pos| {
            if pos >= 64 {
                Bit::Zero
            } else {
                Bit::of((value >> pos) & 1 == 1)
            }
        })
        .collect()
}

/// Returns the low-order `width` bits of `bits`, zero-extending on the most
/// significant side when the source is narrower.
pub fn low_bits(bits: &[Bit], width: usize) -> Vec<Bit> {
    if bits.len() >= width {
        bits[bits.len() - width..].to_vec()
    } else {
        let mut out = vec![Bit::Zero; width - bits.len()];
        out.extend_from_slice(bits);
        out
    }
}

/// Renders a bit-vector as a string of `0`/`1` characters, MSB first.
pub fn render(bits: &[Bit]) -> String {
    bits.iter()
        .map(|bit| if bit.value() { '1' } else { '0' })
        .collect()
}
