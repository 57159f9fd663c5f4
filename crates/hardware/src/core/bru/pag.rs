//! PAg Branch Predictor.
//!
//! Per-address history, global table: one branch history register per
//! truncated instruction address, all indexing a single shared pattern
//! history table. Branches keep private histories but compete for the same
//! counters.

use tracing::trace;

use super::BranchPredictor;
use crate::common::bit::{self, BranchInstruction, BranchResult};
use crate::common::error::PredictorError;
use crate::common::reg::RegisterBank;
use crate::config::Config;
use crate::core::counter::{self, CountMode};
use crate::core::pht::PatternHistoryTable;

/// PAg predictor structure.
#[derive(Clone, Debug)]
pub struct PagPredictor {
    /// Per-address branch history registers.
    pabhr: RegisterBank,
    /// Pattern history table shared by every address.
    pht: PatternHistoryTable,
}

impl PagPredictor {
    /// Creates a new PAg predictor.
    ///
    /// `bhr_size` is the width of each per-address history register,
    /// `counter_size` the width of each saturating counter, and
    /// `address_index_bits` the address-truncation width sizing the bank to
    /// `2^address_index_bits` slots.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::InvalidConfiguration`] if any width is zero;
    /// no state is created in that case.
    pub fn new(
        bhr_size: usize,
        counter_size: usize,
        address_index_bits: usize,
    ) -> Result<Self, PredictorError> {
        if bhr_size == 0 {
            return Err(PredictorError::InvalidConfiguration(
                "BHR width must be at least one bit".into(),
            ));
        }
        if counter_size == 0 {
            return Err(PredictorError::InvalidConfiguration(
                "counter width must be at least one bit".into(),
            ));
        }
        if address_index_bits == 0 {
            return Err(PredictorError::InvalidConfiguration(
                "address index width must be at least one bit".into(),
            ));
        }
        Ok(Self {
            pabhr: RegisterBank::new(address_index_bits, bhr_size),
            pht: PatternHistoryTable::new(counter_size),
        })
    }
}

impl Default for PagPredictor {
    /// Returns a predictor with the default widths (4-bit BHRs, 2-bit
    /// counters, 8-bit address index).
    fn default() -> Self {
        let config = Config::default();
        Self {
            pabhr: RegisterBank::new(config.address_index_bits, config.bhr_size),
            pht: PatternHistoryTable::new(config.counter_size),
        }
    }
}

impl BranchPredictor for PagPredictor {
    /// Predicts from the counter selected by this address's history.
    fn predict(&mut self, instruction: &BranchInstruction) -> BranchResult {
        let key = self.pabhr.read(instruction.address()).read().to_vec();
        let default = self.pht.default_block();
        self.pht.put_if_absent(&key, default);

        let block = self.pht.get_or_default(&key);
        let result = BranchResult::of(counter::decision(&block));
        trace!(address = %instruction, key = %bit::render(&key), %result, "PAg predict");
        result
    }

    /// Trains the shared table, shifts the outcome into this address's
    /// history, then mirrors the counter value back into the bank slot.
    ///
    /// The write ordering is a contract observable through [`Self::monitor`]:
    /// table write first, history insert second, bank write-back last. The
    /// slot ends up holding the new counter value rather than the shifted
    /// history (contrast with PAp); the value is resized to the slot width
    /// so the write is total for every valid configuration.
    fn update(
        &mut self,
        instruction: &BranchInstruction,
        actual: BranchResult,
    ) -> Result<(), PredictorError> {
        let address = instruction.address();
        let key = self.pabhr.read(address).read().to_vec();
        let block = self.pht.get_or_default(&key);
        let trained = counter::advance(&block, actual.is_taken(), CountMode::Saturating);
        trace!(address = %instruction, key = %bit::render(&key), %actual, counter = %bit::render(&trained), "PAg update");

        self.pht.put(key, trained.clone());
        self.pabhr.read(address).insert(actual.into());

        let mirrored = bit::low_bits(&trained, self.pabhr.register_width());
        self.pabhr.write(address, &mirrored)?;
        Ok(())
    }

    fn monitor(&self) -> String {
        format!(
            "PAg predictor snapshot:\nPABHR:\n{}PHT:\n{}",
            self.pabhr, self.pht
        )
    }
}
