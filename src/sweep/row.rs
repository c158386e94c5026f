use {
    crate::{config::Hours, models::ResultRow},
    serde::{Deserialize, Serialize},
};

/// One threshold's outcome. Failed rows keep their place in the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SweepRow {
    Solved(ResultRow),
    Failed {
        threshold: Hours,
        kind: String,
        reason: String,
    },
}

impl SweepRow {
    pub fn threshold(&self) -> Hours {
        match self {
            SweepRow::Solved(row) => row.threshold,
            SweepRow::Failed { threshold, .. } => *threshold,
        }
    }

    pub fn result(&self) -> Option<&ResultRow> {
        match self {
            SweepRow::Solved(row) => Some(row),
            SweepRow::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SweepRow::Failed { .. })
    }
}
