//! # Register Device Tests
//!
//! Tests for the shift register and the per-address register bank.

use bpsim_core::common::bit::{self, Bit};
use bpsim_core::common::error::PredictorError;
use bpsim_core::common::reg::{RegisterBank, ShiftRegister};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_shift_register_new_is_zeroed() {
    let reg = ShiftRegister::new(4);
    assert_eq!(reg.width(), 4);
    assert_eq!(reg.read(), vec![Bit::Zero; 4].as_slice());
}

#[test]
fn test_shift_register_insert_places_newest_at_index_zero() {
    let mut reg = ShiftRegister::new(3);
    reg.insert(Bit::One);
    assert_eq!(reg.read(), vec![Bit::One, Bit::Zero, Bit::Zero].as_slice());
    reg.insert(Bit::Zero);
    assert_eq!(reg.read(), vec![Bit::Zero, Bit::One, Bit::Zero].as_slice());
}

#[test]
fn test_shift_register_evicts_oldest_bit() {
    let mut reg = ShiftRegister::new(3);
    reg.insert(Bit::One);
    // Three more inserts push the original bit out of a width-3 register.
    reg.insert(Bit::Zero);
    reg.insert(Bit::Zero);
    reg.insert(Bit::Zero);
    assert_eq!(reg.read(), vec![Bit::Zero; 3].as_slice());
}

#[test]
fn test_shift_register_load_round_trip() {
    let bits = bit::from_value(0b1010, 4);
    let mut reg = ShiftRegister::new(4);
    reg.load(&bits).unwrap();
    assert_eq!(reg.read(), bits.as_slice());
}

#[test]
fn test_shift_register_load_rejects_wrong_width() {
    let mut reg = ShiftRegister::new(4);
    let err = reg.load(&bit::from_value(0b101, 3)).unwrap_err();
    assert!(matches!(
        err,
        PredictorError::SizeMismatch {
            expected: 4,
            actual: 3
        }
    ));
    // The register is untouched on failure.
    assert_eq!(reg.read(), vec![Bit::Zero; 4].as_slice());
}

#[test]
fn test_shift_register_display() {
    let mut reg = ShiftRegister::new(4);
    reg.load(&bit::from_value(0b0110, 4)).unwrap();
    assert_eq!(reg.to_string(), "0110");
}

#[test]
fn test_register_bank_creates_zeroed_slot_on_first_access() {
    let mut bank = RegisterBank::new(4, 3);
    assert_eq!(bank.index_bits(), 4);
    assert_eq!(bank.register_width(), 3);
    let slot = bank.read(&bit::from_value(7, 8));
    assert_eq!(slot.read(), vec![Bit::Zero; 3].as_slice());
}

#[test]
fn test_register_bank_slots_are_independent() {
    let mut bank = RegisterBank::new(4, 4);
    let addr_a = bit::from_value(3, 8);
    let addr_b = bit::from_value(12, 8);

    bank.read(&addr_a).insert(Bit::One);
    assert_eq!(bank.read(&addr_a).read()[0], Bit::One);
    assert_eq!(bank.read(&addr_b).read(), vec![Bit::Zero; 4].as_slice());
}

#[test]
fn test_register_bank_aliases_shared_truncated_index() {
    let mut bank = RegisterBank::new(2, 4);
    // 0b0101 and 0b1101 share the low two bits, so they select one slot.
    let addr_a = bit::from_value(0b0101, 4);
    let addr_b = bit::from_value(0b1101, 4);

    bank.read(&addr_a).insert(Bit::One);
    assert_eq!(bank.read(&addr_b).read()[0], Bit::One);
}

#[test]
fn test_register_bank_zero_extends_short_addresses() {
    let mut bank = RegisterBank::new(4, 2);
    bank.read(&bit::from_value(1, 1)).insert(Bit::One);
    // The same address expressed at a wider width selects the same slot.
    assert_eq!(bank.read(&bit::from_value(1, 8)).read()[0], Bit::One);
}

#[test]
fn test_register_bank_write_loads_selected_slot() {
    let mut bank = RegisterBank::new(4, 4);
    let addr = bit::from_value(9, 8);
    let bits = bit::from_value(0b1001, 4);

    bank.write(&addr, &bits).unwrap();
    assert_eq!(bank.read(&addr).read(), bits.as_slice());
}

#[test]
fn test_register_bank_write_rejects_wrong_width() {
    let mut bank = RegisterBank::new(4, 4);
    let err = bank
        .write(&bit::from_value(9, 8), &bit::from_value(1, 2))
        .unwrap_err();
    assert!(matches!(
        err,
        PredictorError::SizeMismatch {
            expected: 4,
            actual: 2
        }
    ));
}

#[test]
fn test_register_bank_display_lists_slots() {
    let mut bank = RegisterBank::new(2, 3);
    bank.read(&bit::from_value(0b01, 2)).insert(Bit::One);
    let rendered = bank.to_string();
    assert_eq!(rendered, "  01 -> 100\n");
}

proptest! {
    #[test]
    fn load_read_round_trips(raw in proptest::collection::vec(any::<bool>(), 1..=16)) {
        let bits: Vec<Bit> = raw.into_iter().map(Bit::of).collect();
        let mut reg = ShiftRegister::new(bits.len());
        reg.load(&bits).unwrap();
        prop_assert_eq!(reg.read(), bits.as_slice());
    }
}
