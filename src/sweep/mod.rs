//! Threshold sensitivity sweep: the same model evaluated across many viability limits.

mod reporter;
mod row;
mod runner;

use {
    crate::models::SelectorKind,
    serde::{Deserialize, Serialize},
};

pub use {
    reporter::SweepReporter,
    row::SweepRow,
    runner::{SweepOptions, run_sweep},
};

/// Rows in input (increasing threshold) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub selector: SelectorKind,
    pub rows: Vec<SweepRow>,
}

impl SweepReport {
    pub fn failed_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_failed()).count()
    }

    pub fn solved(&self) -> impl Iterator<Item = &crate::models::ResultRow> {
        self.rows.iter().filter_map(SweepRow::result)
    }
}
