//! Error types for organ-dispatch.
//!
//! Input problems are fatal and raised before any computation. Solver failures are
//! recoverable at the sweep level. Negative EVPI/VSS values point at a defect and are
//! never clamped.

use thiserror::Error;

/// Violations of the instance invariants, detected at load or call time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Instance has no facilities")]
    NoFacilities,

    #[error("Instance has no scenarios")]
    NoScenarios,

    #[error("Facility id cannot be empty")]
    EmptyFacilityId,

    #[error("Scenario id cannot be empty")]
    EmptyScenarioId,

    #[error("Duplicate facility id '{id}'")]
    DuplicateFacility { id: String },

    #[error("Duplicate scenario id '{id}'")]
    DuplicateScenario { id: String },

    #[error("Facility '{id}' has invalid value {value} (must be finite and >= 0)")]
    InvalidFacilityValue { id: String, value: f64 },

    #[error("Scenario '{id}' has probability {probability} outside (0, 1]")]
    ProbabilityOutOfRange { id: String, probability: f64 },

    #[error("{distribution} probabilities sum to {sum}, expected 1 (tolerance {tolerance})")]
    ProbabilitySum {
        distribution: &'static str,
        sum: f64,
        tolerance: f64,
    },

    #[error("Planning distribution has no entry for scenario '{scenario}'")]
    MissingPlanningProbability { scenario: String },

    #[error("Planning distribution references unknown scenario '{scenario}'")]
    UnknownPlanningScenario { scenario: String },

    #[error("Missing travel time for scenario '{scenario}', facility '{facility}'")]
    MissingTravelTime { scenario: String, facility: String },

    #[error("Travel table references unknown scenario '{scenario}'")]
    UnknownScenario { scenario: String },

    #[error("Travel table references unknown facility '{facility}' (scenario '{scenario}')")]
    UnknownFacility { scenario: String, facility: String },

    #[error("Invalid travel time {hours}h for scenario '{scenario}', facility '{facility}'")]
    InvalidTravelTime {
        scenario: String,
        facility: String,
        hours: f64,
    },

    #[error("Invalid viability threshold {hours}h (must be finite and >= 0)")]
    InvalidThreshold { hours: f64 },

    #[error("Sweep needs at least one threshold")]
    EmptyThresholds,

    #[error("Sweep thresholds must be strictly increasing: {previous}h is followed by {next}h")]
    UnorderedThresholds { previous: f64, next: f64 },
}

/// Failures reported by a binary program solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("Binary program is infeasible")]
    Infeasible,

    #[error("Branch and bound exceeded its node limit of {limit}")]
    NodeLimitExceeded { limit: usize },

    #[error("Solver assignment selects {selected} facilities, expected exactly 1")]
    MalformedAssignment { selected: usize },
}

/// EVPI or VSS came out negative: a defect in selector logic or input data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("Negative EVPI {evpi} (WS {ws} < RP {rp}) at threshold {threshold}h")]
    NegativeEvpi {
        threshold: f64,
        ws: f64,
        rp: f64,
        evpi: f64,
    },

    #[error("Negative VSS {vss} (RP {rp} < EEV {eev}) at threshold {threshold}h")]
    NegativeVss {
        threshold: f64,
        rp: f64,
        eev: f64,
        vss: f64,
    },
}

/// Top-level error for a single evaluation or a sweep.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Input invariant violation: {0}")]
    Input(#[from] InputError),

    #[error("Solver failure: {0}")]
    Solver(#[from] SolverError),

    #[error("Metric inconsistency: {0}")]
    Metric(#[from] MetricError),
}

impl EvaluationError {
    /// Short name of the failure category, used in reports.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Input(_) => "InputInvariantViolation",
            Self::Solver(_) => "SolverFailure",
            Self::Metric(_) => "MetricInconsistency",
        }
    }

    /// Only solver failures may be isolated to one sweep row.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Solver(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_solver_failures_are_recoverable() {
        assert!(EvaluationError::from(SolverError::Infeasible).is_recoverable());
        assert!(!EvaluationError::from(InputError::NoFacilities).is_recoverable());
        let metric = MetricError::NegativeVss {
            threshold: 8.0,
            rp: 1.0,
            eev: 2.0,
            vss: -1.0,
        };
        assert!(!EvaluationError::from(metric).is_recoverable());
    }

    #[test]
    fn kind_names_match_taxonomy() {
        assert_eq!(
            EvaluationError::from(InputError::EmptyThresholds).kind(),
            "InputInvariantViolation"
        );
        assert_eq!(
            EvaluationError::from(SolverError::NodeLimitExceeded { limit: 10 }).kind(),
            "SolverFailure"
        );
    }

    #[test]
    fn messages_name_offending_inputs() {
        let err = InputError::MissingTravelTime {
            scenario: "High".into(),
            facility: "C".into(),
        };
        assert_eq!(
            err.to_string(),
            "Missing travel time for scenario 'High', facility 'C'"
        );
    }
}
