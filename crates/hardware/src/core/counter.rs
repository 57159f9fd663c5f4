//! Counter combinational logic.
//!
//! Pure bit-vector arithmetic for the prediction counters stored in the
//! pattern history tables. The only mode the predictors use is the
//! saturating one; wrapping arithmetic is kept as the extension point for
//! other counting disciplines.

use crate::common::bit::{self, Bit};

/// Counting discipline applied when a counter advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountMode {
    /// Clamp at the minimum and maximum instead of wrapping.
    ///
    /// The mode used by every predictor in this crate.
    Saturating,
    /// Wrap around modulo the counter's range.
    Wrapping,
}

/// Advances an n-bit counter one step up or down.
///
/// The block is interpreted as an unsigned integer of its own width (index 0
/// = MSB): `taken` counts up, otherwise down, clamped or wrapped per `mode`.
/// The result is re-encoded at the same width and bit ordering. Pure; the
/// input block is untouched.
pub fn advance(counter: &[Bit], taken: bool, mode: CountMode) -> Vec<Bit> {
    let width = counter.len();
    let ceiling = max_value(width);
    let value = bit::to_value(counter);

    let next = match (mode, taken) {
        (CountMode::Saturating, true) => {
            if value < ceiling {
                value + 1
            } else {
                ceiling
            }
        }
        (CountMode::Saturating, false) => value.saturating_sub(1),
        (CountMode::Wrapping, true) => {
            if value < ceiling {
                value + 1
            } else {
                0
            }
        }
        (CountMode::Wrapping, false) => {
            if value > 0 {
                value - 1
            } else {
                ceiling
            }
        }
    };

    bit::from_value(next, width)
}

/// Returns `2^width - 1`, the largest value a `width`-bit counter can hold.
pub const fn max_value(width: usize) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1 << width) - 1
    }
}

/// Returns the outcome a counter block decodes to.
///
/// A counter predicts taken iff its most significant stored bit (snapshot
/// index 0) is one, i.e. the value occupies the upper half of its range. An
/// empty block decodes to not taken.
pub fn decision(counter: &[Bit]) -> bool {
    counter.first().is_some_and(|bit| bit.value())
}
