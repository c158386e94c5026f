//! EEV: decide on probability-weighted average travel times, then value that choice
//! against the real scenarios.

use {
    super::{
        feasibility::{average_travel_time, feasible},
        recourse::{argmax_by_id, expected_value_of},
    },
    crate::{
        config::{DF, Hours},
        models::{Decision, ExpectedValueDecision, ScenarioModel},
    },
};

pub fn solve_eev(model: &ScenarioModel, threshold: Hours) -> ExpectedValueDecision {
    // 1. Facilities the averaged-data planner believes are reachable
    let candidates = model
        .facilities()
        .iter()
        .enumerate()
        .filter(|(f, _)| feasible(average_travel_time(model, *f), threshold))
        .map(|(f, facility)| (f, facility.value));

    // 2. Highest value among them; planner expects to collect it in full
    let Some((idx, planned_value)) = argmax_by_id(candidates) else {
        if DF.log_selection {
            log::debug!("[eev] threshold={}: no facility feasible on average", threshold);
        }
        return ExpectedValueDecision {
            decision: Decision::none(),
            planned_value: 0.0,
        };
    };

    // 3. What it is really worth
    let value = expected_value_of(model, idx, threshold);
    let id = model.facilities()[idx].id.clone();
    if DF.log_selection {
        log::debug!(
            "[eev] threshold={} -> {} (planned {:.4}, actual {:.4})",
            threshold,
            id,
            planned_value,
            value
        );
    }

    ExpectedValueDecision {
        decision: Decision::select(id, value),
        planned_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::demo_instance, models::InstanceSpec};

    #[test]
    fn demo_picks_c_on_averages() {
        let model = demo_instance().validate().unwrap();
        let eev = solve_eev(&model, Hours::new(8.0));
        // E averages 8.1h and drops out; C (22) is the best remaining value
        assert_eq!(eev.decision.facility_label(), "C");
        assert_eq!(eev.planned_value, 22.0);
        assert!((eev.decision.expected_value - 15.4).abs() < 1e-9);
    }

    #[test]
    fn no_candidate_gives_none() {
        let model = demo_instance().validate().unwrap();
        let eev = solve_eev(&model, Hours::new(4.0));
        // Smallest average is A at 4.4h
        assert_eq!(eev.decision, Decision::none());
        assert_eq!(eev.planned_value, 0.0);
    }

    #[test]
    fn planning_distribution_drives_choice_but_not_valuation() {
        // Planner thinks the slow scenario is rare; it is actually likely.
        let model = InstanceSpec::builder()
            .facility("near", 10.0)
            .facility("far", 30.0)
            .scenario("calm", 0.2, &[1.0, 3.0])
            .scenario("jam", 0.8, &[2.0, 9.0])
            .planning("calm", 0.9)
            .planning("jam", 0.1)
            .build()
            .unwrap();
        let eev = solve_eev(&model, Hours::new(4.0));
        // planner's average for far: 0.9*3 + 0.1*9 = 3.6 <= 4
        assert_eq!(eev.decision.facility_label(), "far");
        assert!((eev.decision.expected_value - 6.0).abs() < 1e-9);
    }
}
