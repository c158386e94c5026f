//! WS: the value of an oracle that learns the scenario before choosing.

use {
    super::{feasibility::feasible, recourse::argmax_by_id},
    crate::{
        config::Hours,
        domain::{FacilityId, ScenarioId},
        models::ScenarioModel,
    },
    serde::{Deserialize, Serialize},
};

/// Best reachable facility for one scenario, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioWinner {
    pub scenario: ScenarioId,
    pub facility: Option<FacilityId>,
    pub value: f64,
}

/// Per-scenario winners in scenario order. Ties go to the smallest id.
pub fn scenario_winners(model: &ScenarioModel, threshold: Hours) -> Vec<ScenarioWinner> {
    model
        .scenarios()
        .iter()
        .enumerate()
        .map(|(s, scenario)| {
            let reachable = model
                .facilities()
                .iter()
                .enumerate()
                .filter(|(f, _)| feasible(model.travel_time(s, *f), threshold))
                .map(|(f, facility)| (f, facility.value));

            match argmax_by_id(reachable) {
                Some((f, value)) => ScenarioWinner {
                    scenario: scenario.id.clone(),
                    facility: Some(model.facilities()[f].id.clone()),
                    value,
                },
                None => ScenarioWinner {
                    scenario: scenario.id.clone(),
                    facility: None,
                    value: 0.0,
                },
            }
        })
        .collect()
}

/// `Σ_s p[s] * best[s]`, with `best[s] = 0` when nothing is reachable in `s`.
pub fn solve_ws(model: &ScenarioModel, threshold: Hours) -> f64 {
    model
        .scenarios()
        .iter()
        .zip(scenario_winners(model, threshold))
        .map(|(scenario, winner)| scenario.probability * winner.value)
        .sum()
}
