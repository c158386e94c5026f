//! RP: the here-and-now commitment that accounts for every scenario.
//!
//! With one facility chosen up front and a payoff that only depends on whether that
//! facility is reached in each scenario, the recourse problem reduces to scoring every
//! facility and taking the best. Ties go to the smallest facility id.

use {
    super::feasibility::feasible,
    crate::{
        config::{DF, Hours},
        models::{Decision, ScenarioModel},
    },
};

/// `value[f] * P(travel_time[s][f] <= threshold)`, summed scenario by scenario.
pub fn expected_value_of(model: &ScenarioModel, facility: usize, threshold: Hours) -> f64 {
    let value = model.facilities()[facility].value;
    model
        .scenarios()
        .iter()
        .enumerate()
        .map(|(s, scenario)| {
            if feasible(model.travel_time(s, facility), threshold) {
                scenario.probability * value
            } else {
                0.0
            }
        })
        .sum()
}

/// Index and score of the best facility among `candidates` (given in id order).
/// Only a strictly better score replaces the incumbent, so ties keep the smaller id.
pub(crate) fn argmax_by_id(
    candidates: impl IntoIterator<Item = (usize, f64)>,
) -> Option<(usize, f64)> {
    candidates
        .into_iter()
        .fold(None, |best, (idx, score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ => Some((idx, score)),
        })
}

pub fn solve_rp(model: &ScenarioModel, threshold: Hours) -> Decision {
    let scored =
        (0..model.facilities().len()).map(|f| (f, expected_value_of(model, f, threshold)));

    match argmax_by_id(scored) {
        Some((idx, value)) => {
            let id = model.facilities()[idx].id.clone();
            if DF.log_selection {
                log::debug!("[rp] threshold={} -> {} ({:.4})", threshold, id, value);
            }
            Decision::select(id, value)
        }
        // Unreachable for a validated model, which always has a facility.
        None => Decision::none(),
    }
}
