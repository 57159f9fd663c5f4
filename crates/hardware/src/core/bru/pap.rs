//! PAp Branch Predictor.
//!
//! Per-address history, per-address table: both the history registers and
//! the counters are partitioned by truncated instruction address. The table
//! key concatenates the address bits with the history snapshot, address bits
//! first, so each address owns a private slice of the table.

use tracing::trace;

use super::BranchPredictor;
use crate::common::bit::{self, BranchInstruction, BranchResult};
use crate::common::error::PredictorError;
use crate::common::reg::RegisterBank;
use crate::config::Config;
use crate::core::counter::{self, CountMode};
use crate::core::pht::{self, PatternHistoryTable};

/// PAp predictor structure.
#[derive(Clone, Debug)]
pub struct PapPredictor {
    /// Per-address branch history registers.
    pabhr: RegisterBank,
    /// Per-address pattern history table, compositely keyed.
    papht: PatternHistoryTable,
}

impl PapPredictor {
    /// Creates a new PAp predictor.
    ///
    /// `bhr_size` is the width of each per-address history register,
    /// `counter_size` the width of each saturating counter, and
    /// `address_index_bits` the address-truncation width used both to size
    /// the bank and as the address component of the composite table key.
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
            papht: PatternHistoryTable::new(counter_size),
        })
    }
}

impl Default for PapPredictor {
    /// Returns a predictor with the default widths (4-bit BHRs, 2-bit
    /// counters, 8-bit address index).
    fn default() -> Self {
        let config = Config::default();
        Self {
            pabhr: RegisterBank::new(config.address_index_bits, config.bhr_size),
            papht: PatternHistoryTable::new(config.counter_size),
        }
    }
}

impl BranchPredictor for PapPredictor {
    /// Predicts from the counter selected by this address and its history.
    fn predict(&mut self, instruction: &BranchInstruction) -> BranchResult {
        let address = instruction.address();
        let history = self.pabhr.read(address).read().to_vec();
        let key = pht::composite_key(address, self.pabhr.index_bits(), &history);
        let default = self.papht.default_block();
        self.papht.put_if_absent(&key, default);

        let block = self.papht.get_or_default(&key);
        let result = BranchResult::of(counter::decision(&block));
        trace!(address = %instruction, key = %bit::render(&key), %result, "PAp predict");
        result
    }

    /// Trains this address's counter, shifts the outcome into its history,
    /// then writes the shifted history back into the bank slot.
    ///
    /// The composite key is built from the pre-insert history, matching the
    /// key the preceding predict consulted. Unlike PAg, the bank write-back
    /// carries the post-insert history value, not the counter.
    fn update(
        &mut self,
        instruction: &BranchInstruction,
        actual: BranchResult,
    ) -> Result<(), PredictorError> {
        let address = instruction.address();
        let history = self.pabhr.read(address).read().to_vec();
        let key = pht::composite_key(address, self.pabhr.index_bits(), &history);
        let block = self.papht.get_or_default(&key);
        let trained = counter::advance(&block, actual.is_taken(), CountMode::Saturating);
        trace!(address = %instruction, key = %bit::render(&key), %actual, counter = %bit::render(&trained), "PAp update");

        self.papht.put(key, trained);

        let slot = self.pabhr.read(address);
        slot.insert(actual.into());
        let shifted = slot.read().to_vec();
        self.pabhr.write(address, &shifted)?;
        Ok(())
    }

    fn monitor(&self) -> String {
        format!(
            "PAp predictor snapshot:\nPABHR:\n{}PAPHT:\n{}",
            self.pabhr, self.papht
        )
    }
}
