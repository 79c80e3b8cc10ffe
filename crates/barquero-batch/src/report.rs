//! Batch outcome accounting.

use std::path::PathBuf;

use barquero_types::{Asset, BarqueroError};

/// The result of one asset's download-and-export attempt.
#[derive(Debug)]
pub enum Outcome {
    /// The asset was fetched and exported.
    Success {
        /// Number of records written.
        records: usize,
        /// The output artifact path.
        path: PathBuf,
    },
    /// The asset failed at some stage; the rest of the batch continued.
    Failed(BarqueroError),
}

/// One asset's entry in the batch report.
#[derive(Debug)]
pub struct AssetOutcome {
    /// The asset that was attempted.
    pub asset: Asset,
    /// What happened.
    pub outcome: Outcome,
}

impl AssetOutcome {
    /// Returns true if this asset succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }
}

/// Accumulated outcomes for a whole batch run, in attempt order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-asset outcomes.
    pub outcomes: Vec<AssetOutcome>,
}

impl BatchReport {
    /// Appends an outcome.
    pub fn push(&mut self, outcome: AssetOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of assets that succeeded.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of assets attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if every attempted asset succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.success_count() == self.total()
    }

    /// The summary line, e.g. `2/3 successful`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}/{} successful", self.success_count(), self.total())
    }
}
