//! Numeric constants for validation and solving.

/// Allowed deviation of a probability distribution's sum from 1.
pub const PROB_SUM_TOLERANCE: f64 = 1e-6;

/// Max disagreement between a solver objective and the closed-form re-evaluation
/// of the facility it selected before a warning is logged.
pub const OBJECTIVE_CROSS_CHECK_TOLERANCE: f64 = 1e-6;

/// Slack used by the branch and bound when testing linear constraints.
pub const CONSTRAINT_EPSILON: f64 = 1e-9;

/// Viability threshold (hours) used when none is given.
pub const DEFAULT_VIABILITY_HOURS: f64 = 8.0;

/// Largest number of thresholds a `start:end:step` range may expand to.
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// Nodes the branch and bound may visit before giving up.
pub const DEFAULT_NODE_LIMIT: usize = 1_000_000;
