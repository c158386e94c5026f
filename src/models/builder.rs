//! Fluent construction of instances in code (tests, demos, embedding callers).

use {
    crate::{
        config::{Hours, Prob},
        domain::{Facility, FacilityId, Scenario, ScenarioId},
        error::InputError,
        models::{InstanceSpec, ScenarioModel, TravelTable},
    },
    std::collections::BTreeMap,
};

/// Builds an [`InstanceSpec`]. Travel times for a scenario are given in the order
/// facilities were added; validation happens in [`InstanceBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct InstanceBuilder {
    name: String,
    facilities: Vec<Facility>,
    scenarios: Vec<Scenario>,
    travel_times: TravelTable,
    planning: Option<BTreeMap<ScenarioId, Prob>>,
}

impl InstanceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn facility(mut self, id: impl Into<String>, value: f64) -> Self {
        self.facilities.push(Facility::new(id, value));
        self
    }

    /// Adds a scenario and its travel times, one per facility added so far.
    /// Extra or missing times are left for validation to report.
    #[must_use]
    pub fn scenario(mut self, id: impl Into<String>, probability: f64, hours: &[f64]) -> Self {
        let scenario = Scenario::new(id, probability);
        let row: BTreeMap<FacilityId, Hours> = self
            .facilities
            .iter()
            .zip(hours)
            .map(|(f, &h)| (f.id.clone(), Hours::new(h)))
            .collect();
        self.travel_times.insert(scenario.id.clone(), row);
        self.scenarios.push(scenario);
        self
    }

    /// Overrides the planning probability of one scenario (used only to average times for EEV).
    #[must_use]
    pub fn planning(mut self, id: impl Into<String>, probability: f64) -> Self {
        self.planning
            .get_or_insert_with(BTreeMap::new)
            .insert(ScenarioId::new(id), Prob::new(probability));
        self
    }

    pub fn spec(self) -> InstanceSpec {
        InstanceSpec {
            name: self.name,
            facilities: self.facilities,
            scenarios: self.scenarios,
            travel_times: self.travel_times,
            planning_probabilities: self.planning,
        }
    }

    pub fn build(self) -> Result<ScenarioModel, InputError> {
        self.spec().validate()
    }
}

impl InstanceSpec {
    pub fn builder() -> InstanceBuilder {
        InstanceBuilder::new()
    }
}
