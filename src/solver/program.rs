//! A pure binary linear program: maximize `c·x` over `x ∈ {0,1}^n` subject to linear rows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    LessEq,
    Equal,
    GreaterEq,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    pub label: String,
    /// (variable index, coefficient)
    pub terms: Vec<(usize, f64)>,
    pub relation: Relation,
    pub rhs: f64,
}

impl LinearConstraint {
    pub fn lhs(&self, values: &[bool]) -> f64 {
        self.terms
            .iter()
            .filter(|(var, _)| values[*var])
            .map(|(_, coef)| coef)
            .sum()
    }

    pub fn is_satisfied(&self, values: &[bool], eps: f64) -> bool {
        let lhs = self.lhs(values);
        match self.relation {
            Relation::LessEq => lhs <= self.rhs + eps,
            Relation::Equal => (lhs - self.rhs).abs() <= eps,
            Relation::GreaterEq => lhs >= self.rhs - eps,
        }
    }
}

/// Maximization problem over named binary variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinaryProgram {
    names: Vec<String>,
    objective: Vec<f64>,
    constraints: Vec<LinearConstraint>,
}

impl BinaryProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable with its objective coefficient and returns its index.
    pub fn add_variable(&mut self, name: impl Into<String>, objective: f64) -> usize {
        self.names.push(name.into());
        self.objective.push(objective);
        self.names.len() - 1
    }

    pub fn add_constraint(
        &mut self,
        label: impl Into<String>,
        terms: Vec<(usize, f64)>,
        relation: Relation,
        rhs: f64,
    ) {
        self.constraints.push(LinearConstraint {
            label: label.into(),
            terms,
            relation,
            rhs,
        });
    }

    pub fn variable_count(&self) -> usize {
        self.names.len()
    }

    pub fn name(&self, var: usize) -> &str {
        &self.names[var]
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }
}

/// Optimal 0/1 assignment returned by a solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub values: Vec<bool>,
    pub objective: f64,
    /// Search nodes visited, for diagnostics.
    pub nodes: usize,
}
