//! Depth-first branch and bound for small binary programs.
//!
//! Variables are fixed in index order, `1` before `0`. A node is cut when some row can no
//! longer be satisfied by any completion, or when fixed objective plus every remaining
//! positive coefficient falls below the incumbent. Only strict improvements replace the
//! incumbent, so among equal optima the first one in search order wins.

use {
    super::program::{Assignment, BinaryProgram, Relation},
    crate::{
        config::{CONSTRAINT_EPSILON, DEFAULT_NODE_LIMIT, DF},
        error::SolverError,
    },
};

const BOUND_SLACK: f64 = 1e-9;

/// Anything that can solve a [`BinaryProgram`] to optimality.
pub trait BinaryProgramSolver: Send + Sync {
    fn solve(&self, program: &BinaryProgram) -> Result<Assignment, SolverError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchAndBound {
    node_limit: usize,
}

impl BranchAndBound {
    pub fn new(node_limit: usize) -> Self {
        Self {
            node_limit: node_limit.max(1),
        }
    }
}

impl Default for BranchAndBound {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_LIMIT)
    }
}

impl BinaryProgramSolver for BranchAndBound {
    fn solve(&self, program: &BinaryProgram) -> Result<Assignment, SolverError> {
        let n = program.variable_count();

        // optimistic_tail[i] = sum of positive objective coefficients from i onwards
        let mut optimistic_tail = vec![0.0; n + 1];
        for i in (0..n).rev() {
            optimistic_tail[i] = optimistic_tail[i + 1] + program.objective()[i].max(0.0);
        }

        let mut search = Search {
            program,
            values: vec![false; n],
            optimistic_tail,
            nodes: 0,
            node_limit: self.node_limit,
            best: None,
        };
        search.descend(0, 0.0)?;

        let nodes = search.nodes;
        let (values, objective) = search.best.ok_or(SolverError::Infeasible)?;
        if DF.log_solver {
            log::debug!(
                "[bnb] {} vars, {} rows: objective {:.6} after {} nodes",
                n,
                program.constraints().len(),
                objective,
                nodes
            );
        }
        Ok(Assignment {
            values,
            objective,
            nodes,
        })
    }
}

struct Search<'a> {
    program: &'a BinaryProgram,
    // Only the first `depth` entries are meaningful at a node
    values: Vec<bool>,
    optimistic_tail: Vec<f64>,
    nodes: usize,
    node_limit: usize,
    best: Option<(Vec<bool>, f64)>,
}

impl Search<'_> {
    fn descend(&mut self, depth: usize, fixed_objective: f64) -> Result<(), SolverError> {
        self.nodes += 1;
        if self.nodes > self.node_limit {
            return Err(SolverError::NodeLimitExceeded {
                limit: self.node_limit,
            });
        }

        if !self.rows_satisfiable(depth) {
            return Ok(());
        }

        let incumbent = self.best.as_ref().map(|(_, objective)| *objective);

        if depth == self.values.len() {
            if incumbent.is_none_or(|best| fixed_objective > best) {
                self.best = Some((self.values.clone(), fixed_objective));
            }
            return Ok(());
        }

        // The tail is summed in a different order than the leaf objective, so the bound
        // only cuts when it is clearly below the incumbent.
        let bound = fixed_objective + self.optimistic_tail[depth];
        if incumbent.is_some_and(|best| bound < best - BOUND_SLACK * best.abs().max(1.0)) {
            return Ok(());
        }

        let coef = self.program.objective()[depth];
        for choice in [true, false] {
            self.values[depth] = choice;
            let objective = if choice {
                fixed_objective + coef
            } else {
                fixed_objective
            };
            self.descend(depth + 1, objective)?;
        }
        self.values[depth] = false;
        Ok(())
    }

    /// Can every row still hold for some completion of the first `depth` variables?
    fn rows_satisfiable(&self, depth: usize) -> bool {
        self.program.constraints().iter().all(|row| {
            let (mut lo, mut hi) = (0.0, 0.0);
            for &(var, coef) in &row.terms {
                if var < depth {
                    if self.values[var] {
                        lo += coef;
                        hi += coef;
                    }
                } else {
                    lo += coef.min(0.0);
                    hi += coef.max(0.0);
                }
            }
            match row.relation {
                Relation::LessEq => lo <= row.rhs + CONSTRAINT_EPSILON,
                Relation::GreaterEq => hi >= row.rhs - CONSTRAINT_EPSILON,
                Relation::Equal => {
                    lo <= row.rhs + CONSTRAINT_EPSILON && hi >= row.rhs - CONSTRAINT_EPSILON
                }
            }
        })
    }
}
