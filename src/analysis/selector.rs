//! One interface over the ways of computing the RP decision.

use {
    super::recourse::{expected_value_of, solve_rp},
    crate::{
        config::{DF, Hours, OBJECTIVE_CROSS_CHECK_TOLERANCE},
        error::SolverError,
        models::{Decision, ScenarioModel, SelectorKind},
        solver::{BinaryProgramSolver, BranchAndBound, SelectionProgram},
    },
};

/// Produces the here-and-now (RP) decision for a model and threshold.
pub trait Selector: Send + Sync {
    fn kind(&self) -> SelectorKind;

    fn select(&self, model: &ScenarioModel, threshold: Hours) -> Result<Decision, SolverError>;
}

/// Scores every facility directly. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedFormSelector;

impl Selector for ClosedFormSelector {
    fn kind(&self) -> SelectorKind {
        SelectorKind::ClosedForm
    }

    fn select(&self, model: &ScenarioModel, threshold: Hours) -> Result<Decision, SolverError> {
        Ok(solve_rp(model, threshold))
    }
}

/// Builds the select-one binary program and hands it to `S`.
#[derive(Debug, Clone, Default)]
pub struct MilpSelector<S = BranchAndBound> {
    solver: S,
}

impl<S: BinaryProgramSolver> MilpSelector<S> {
    pub fn new(solver: S) -> Self {
        Self { solver }
    }
}

impl<S: BinaryProgramSolver> Selector for MilpSelector<S> {
    fn kind(&self) -> SelectorKind {
        SelectorKind::Milp
    }

    fn select(&self, model: &ScenarioModel, threshold: Hours) -> Result<Decision, SolverError> {
        let formulation = SelectionProgram::build(model, threshold);
        let assignment = crate::trace_time!("milp_solve", 10_000, {
            self.solver.solve(&formulation.program)
        })?;
        let idx = formulation.selected_facility(&assignment)?;

        // Value the chosen facility the same way the other policies are valued.
        let value = expected_value_of(model, idx, threshold);
        let id = model.facilities()[idx].id.clone();
        if (value - assignment.objective).abs() > OBJECTIVE_CROSS_CHECK_TOLERANCE {
            log::warn!(
                "[milp] threshold={}: solver objective {:.6} disagrees with closed form {:.6} for {}",
                threshold,
                assignment.objective,
                value,
                id
            );
        }
        if DF.log_selection {
            log::debug!(
                "[milp] threshold={} -> {} ({:.4}, {} nodes)",
                threshold,
                id,
                value,
                assignment.nodes
            );
        }
        Ok(Decision::select(id, value))
    }
}

pub fn selector_for(kind: SelectorKind) -> Box<dyn Selector> {
    match kind {
        SelectorKind::ClosedForm => Box::new(ClosedFormSelector),
        SelectorKind::Milp => Box::new(MilpSelector::<BranchAndBound>::default()),
    }
}
