//! The RP decision written as a binary program.
//!
//! ```text
//! max  Σ_f Σ_s p[s] * value[f] * y[f,s]
//! s.t. Σ_f x[f] = 1
//!      y[f,s] <= x[f]                      for all f, s
//!      y[f,s]  = 0                         where travel_time[s][f] > threshold
//!      x, y binary
//! ```

use {
    super::program::{Assignment, BinaryProgram, Relation},
    crate::{
        analysis::feasible, config::Hours, error::SolverError, models::ScenarioModel,
    },
};

/// Program plus the variable index of each facility's select variable.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionProgram {
    pub program: BinaryProgram,
    select_vars: Vec<usize>,
}

impl SelectionProgram {
    pub fn build(model: &ScenarioModel, threshold: Hours) -> Self {
        let mut program = BinaryProgram::new();

        // Select variables first, in facility id order: the solver's search order
        // then matches the smallest-id tie-break of the closed form.
        let select_vars: Vec<usize> = model
            .facilities()
            .iter()
            .map(|f| program.add_variable(format!("x[{}]", f.id), 0.0))
            .collect();

        program.add_constraint(
            "select_one",
            select_vars.iter().map(|&x| (x, 1.0)).collect(),
            Relation::Equal,
            1.0,
        );

        for (f, facility) in model.facilities().iter().enumerate() {
            for (s, scenario) in model.scenarios().iter().enumerate() {
                let y = program.add_variable(
                    format!("y[{},{}]", facility.id, scenario.id),
                    scenario.probability * facility.value,
                );
                program.add_constraint(
                    format!("link[{},{}]", facility.id, scenario.id),
                    vec![(y, 1.0), (select_vars[f], -1.0)],
                    Relation::LessEq,
                    0.0,
                );
                if !feasible(model.travel_time(s, f), threshold) {
                    program.add_constraint(
                        format!("time_limit[{},{}]", facility.id, scenario.id),
                        vec![(y, 1.0)],
                        Relation::Equal,
                        0.0,
                    );
                }
            }
        }

        Self {
            program,
            select_vars,
        }
    }

    /// Index of the one facility the assignment selects.
    pub fn selected_facility(&self, assignment: &Assignment) -> Result<usize, SolverError> {
        let selected: Vec<usize> = self
            .select_vars
            .iter()
            .enumerate()
            .filter(|(_, var)| assignment.values.get(**var).copied().unwrap_or(false))
            .map(|(f, _)| f)
            .collect();

        match selected.as_slice() {
            [f] => Ok(*f),
            _ => Err(SolverError::MalformedAssignment {
                selected: selected.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::demo_instance,
        solver::{BinaryProgramSolver, BranchAndBound},
    };

    #[test]
    fn demo_program_shape() {
        let model = demo_instance().validate().unwrap();
        let sp = SelectionProgram::build(&model, Hours::new(8.0));
        // 6 select + 30 payoff variables
        assert_eq!(sp.program.variable_count(), 36);
        let time_limits = sp
            .program
            .constraints()
            .iter()
            .filter(|c| c.label.starts_with("time_limit"))
            .count();
        // Pairs above 8h: B-X, C-H, C-X, D-X, E-H, E-X
        assert_eq!(time_limits, 6);
        assert_eq!(sp.program.name(0), "x[A]");
    }

    #[test]
    fn demo_solves_to_e() {
        let model = demo_instance().validate().unwrap();
        let sp = SelectionProgram::build(&model, Hours::new(8.0));
        let assignment = BranchAndBound::default().solve(&sp.program).unwrap();
        let f = sp.selected_facility(&assignment).unwrap();
        assert_eq!(model.facilities()[f].id.as_str(), "E");
        assert!((assignment.objective - 17.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_assignment_without_single_selection() {
        let model = demo_instance().validate().unwrap();
        let sp = SelectionProgram::build(&model, Hours::new(8.0));
        let none = Assignment {
            values: vec![false; 36],
            objective: 0.0,
            nodes: 0,
        };
        assert_eq!(
            sp.selected_facility(&none),
            Err(SolverError::MalformedAssignment { selected: 0 })
        );
    }
}
