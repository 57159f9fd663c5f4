//! GAg Branch Predictor.
//!
//! Global history, global table: one branch history register and one pattern
//! history table shared by every instruction. The BHR snapshot indexes the
//! table directly, so the predictor learns correlations across all branches
//! at the cost of interference between unrelated ones.

use tracing::trace;

use super::BranchPredictor;
use crate::common::bit::{self, BranchInstruction, BranchResult};
use crate::common::error::PredictorError;
use crate::common::reg::ShiftRegister;
use crate::config::Config;
use crate::core::counter::{self, CountMode};
use crate::core::pht::PatternHistoryTable;

/// GAg predictor structure.
#[derive(Clone, Debug)]
pub struct GagPredictor {
    /// Global branch history register.
    bhr: ShiftRegister,
    /// Pattern history table keyed directly by the BHR snapshot.
    pht: PatternHistoryTable,
}

impl GagPredictor {
    /// Creates a new GAg predictor.
    ///
    /// `bhr_size` is the history register width and `counter_size` the width
    /// of each saturating counter.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::InvalidConfiguration`] if either width is
    /// zero; no state is created in that case.
    pub fn new(bhr_size: usize, counter_size: usize) -> Result<Self, PredictorError> {
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
        Ok(Self {
            bhr: ShiftRegister::new(bhr_size),
            pht: PatternHistoryTable::new(counter_size),
        })
    }
}

impl Default for GagPredictor {
    /// Returns a predictor with the default widths (4-bit BHR, 2-bit counters).
    fn default() -> Self {
        let config = Config::default();
        Self {
            bhr: ShiftRegister::new(config.bhr_size),
            pht: PatternHistoryTable::new(config.counter_size),
        }
    }
}

impl BranchPredictor for GagPredictor {
    /// Predicts from the counter selected by the current global history.
    fn predict(&mut self, _instruction: &BranchInstruction) -> BranchResult {
        let key = self.bhr.read().to_vec();
        let default = self.pht.default_block();
        self.pht.put_if_absent(&key, default);

        let block = self.pht.get_or_default(&key);
        let result = BranchResult::of(counter::decision(&block));
        trace!(key = %bit::render(&key), %result, "GAg predict");
        result
    }

    /// Trains the counter for the current history, then shifts the outcome in.
    ///
    /// The table write is keyed by the pre-insert BHR value, so the entry the
    /// preceding predict consulted is the one that trains.
    fn update(
        &mut self,
        _instruction: &BranchInstruction,
        actual: BranchResult,
    ) -> Result<(), PredictorError> {
        let key = self.bhr.read().to_vec();
        let block = self.pht.get_or_default(&key);
        let trained = counter::advance(&block, actual.is_taken(), CountMode::Saturating);
        trace!(key = %bit::render(&key), %actual, counter = %bit::render(&trained), "GAg update");

        self.pht.put(key, trained);
        self.bhr.insert(actual.into());
        Ok(())
    }

    fn monitor(&self) -> String {
        format!(
            "GAg predictor snapshot:\nBHR: {}\nPHT:\n{}",
            self.bhr, self.pht
        )
    }
}
