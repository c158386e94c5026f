//! Binary program formulation of the RP decision and an in-process solver for it.

mod branch_bound;
mod formulation;
mod program;

pub use {
    branch_bound::{BinaryProgramSolver, BranchAndBound},
    formulation::SelectionProgram,
    program::{Assignment, BinaryProgram, LinearConstraint, Relation},
};
