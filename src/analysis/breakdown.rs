//! Per-facility intermediate quantities behind the RP and EEV choices.

use {
    super::{
        feasibility::{feasible, feasible_mass},
        recourse::expected_value_of,
    },
    crate::{
        config::Hours,
        domain::FacilityId,
        models::ScenarioModel,
        utils::weighted_mean_and_stddev,
    },
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityScore {
    pub id: FacilityId,
    pub value: f64,
    /// Planning-weighted mean travel time.
    pub average_time: Hours,
    pub time_stddev: Hours,
    /// Outcome probability of arriving in time.
    pub feasible_mass: f64,
    pub expected_value: f64,
    pub feasible_on_average: bool,
}

/// One score per facility, in facility id order.
pub fn facility_scores(model: &ScenarioModel, threshold: Hours) -> Vec<FacilityScore> {
    let scenario_count = model.scenarios().len();
    let weights: Vec<f64> = (0..scenario_count)
        .map(|s| model.planning_probability(s).value())
        .collect();

    model
        .facilities()
        .iter()
        .enumerate()
        .map(|(f, facility)| {
            let times: Vec<f64> = (0..scenario_count)
                .map(|s| model.travel_time(s, f).value())
                .collect();
            let (mean, stddev) = weighted_mean_and_stddev(&times, &weights);
            let average_time = Hours::new(mean);

            FacilityScore {
                id: facility.id.clone(),
                value: facility.value,
                average_time,
                time_stddev: Hours::new(stddev),
                feasible_mass: feasible_mass(model, f, threshold),
                expected_value: expected_value_of(model, f, threshold),
                feasible_on_average: feasible(average_time, threshold),
            }
        })
        .collect()
}
