//! Raw instance input and the validated, immutable scenario model built from it.

use {
    crate::{
        config::{Hours, PROB_SUM_TOLERANCE, Prob},
        domain::{Facility, FacilityId, Scenario, ScenarioId},
        error::InputError,
    },
    itertools::Itertools,
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Travel times keyed by scenario, then facility.
pub type TravelTable = BTreeMap<ScenarioId, BTreeMap<FacilityId, Hours>>;

/// Instance as it arrives from a loader. Nothing here has been checked yet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InstanceSpec {
    #[serde(default)]
    pub name: String,
    pub facilities: Vec<Facility>,
    pub scenarios: Vec<Scenario>,
    pub travel_times: TravelTable,
    /// Distribution a planner uses to average travel times for the EEV decision.
    /// Outcomes are always valued with `scenarios[..].probability`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planning_probabilities: Option<BTreeMap<ScenarioId, Prob>>,
}

impl InstanceSpec {
    /// Checks every input invariant and builds the model.
    pub fn validate(self) -> Result<ScenarioModel, InputError> {
        ScenarioModel::try_from(self)
    }
}

/// Validated instance. Facilities are stored in identifier order, scenarios in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioModel {
    name: String,
    facilities: Vec<Facility>,
    scenarios: Vec<Scenario>,
    planning: Vec<Prob>,
    distinct_planning: bool,
    // [scenario][facility]
    times: Vec<Vec<Hours>>,
}

impl ScenarioModel {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    #[inline]
    pub fn travel_time(&self, scenario: usize, facility: usize) -> Hours {
        self.times[scenario][facility]
    }

    /// Probability the planner assigns to `scenario` when averaging travel times.
    #[inline]
    pub fn planning_probability(&self, scenario: usize) -> Prob {
        self.planning[scenario]
    }

    pub fn has_distinct_planning(&self) -> bool {
        self.distinct_planning
    }

    pub fn facility_index(&self, id: &FacilityId) -> Option<usize> {
        self.facilities.binary_search_by(|f| f.id.cmp(id)).ok()
    }

    /// (shortest, longest) travel time over the whole table.
    pub fn travel_time_bounds(&self) -> (Hours, Hours) {
        self.times
            .iter()
            .flatten()
            .fold((Hours::new(f64::INFINITY), Hours::ZERO), |(lo, hi), &t| {
                (
                    if t < lo { t } else { lo },
                    if t > hi { t } else { hi },
                )
            })
    }

    /// Back to the loader representation, e.g. for saving.
    pub fn to_spec(&self) -> InstanceSpec {
        let travel_times = self
            .scenarios
            .iter()
            .zip(&self.times)
            .map(|(s, row)| {
                let by_facility = self
                    .facilities
                    .iter()
                    .zip(row)
                    .map(|(f, &t)| (f.id.clone(), t))
                    .collect();
                (s.id.clone(), by_facility)
            })
            .collect();

        let planning_probabilities = self.distinct_planning.then(|| {
            self.scenarios
                .iter()
                .zip(&self.planning)
                .map(|(s, &p)| (s.id.clone(), p))
                .collect()
        });

        InstanceSpec {
            name: self.name.clone(),
            facilities: self.facilities.clone(),
            scenarios: self.scenarios.clone(),
            travel_times,
            planning_probabilities,
        }
    }
}

impl TryFrom<InstanceSpec> for ScenarioModel {
    type Error = InputError;

    fn try_from(spec: InstanceSpec) -> Result<Self, InputError> {
        let InstanceSpec {
            name,
            mut facilities,
            scenarios,
            mut travel_times,
            planning_probabilities,
        } = spec;

        // 1. Facilities
        if facilities.is_empty() {
            return Err(InputError::NoFacilities);
        }
        if facilities.iter().any(|f| f.id.as_str().is_empty()) {
            return Err(InputError::EmptyFacilityId);
        }
        if let Some(dup) = facilities.iter().map(|f| &f.id).duplicates().next() {
            return Err(InputError::DuplicateFacility {
                id: dup.to_string(),
            });
        }
        if let Some(bad) = facilities
            .iter()
            .find(|f| !(f.value.is_finite() && f.value >= 0.0))
        {
            return Err(InputError::InvalidFacilityValue {
                id: bad.id.to_string(),
                value: bad.value,
            });
        }
        facilities.sort_by(|a, b| a.id.cmp(&b.id));

        // 2. Scenarios and the outcome distribution
        if scenarios.is_empty() {
            return Err(InputError::NoScenarios);
        }
        if scenarios.iter().any(|s| s.id.as_str().is_empty()) {
            return Err(InputError::EmptyScenarioId);
        }
        if let Some(dup) = scenarios.iter().map(|s| &s.id).duplicates().next() {
            return Err(InputError::DuplicateScenario {
                id: dup.to_string(),
            });
        }
        let outcome: Vec<(&ScenarioId, Prob)> =
            scenarios.iter().map(|s| (&s.id, s.probability)).collect();
        check_distribution("Scenario", &outcome)?;

        // 3. Planning distribution (defaults to the outcome distribution)
        let (planning, distinct_planning) = match planning_probabilities {
            None => (scenarios.iter().map(|s| s.probability).collect(), false),
            Some(map) => {
                if let Some(unknown) = map.keys().find(|k| !scenarios.iter().any(|s| &s.id == *k))
                {
                    return Err(InputError::UnknownPlanningScenario {
                        scenario: unknown.to_string(),
                    });
                }
                let mut planning = Vec::with_capacity(scenarios.len());
                for s in &scenarios {
                    let p = map.get(&s.id).copied().ok_or_else(|| {
                        InputError::MissingPlanningProbability {
                            scenario: s.id.to_string(),
                        }
                    })?;
                    planning.push(p);
                }
                let weighted: Vec<(&ScenarioId, Prob)> =
                    scenarios.iter().map(|s| &s.id).zip(planning.iter().copied()).collect();
                check_distribution("Planning", &weighted)?;
                (planning, true)
            }
        };

        // 4. Travel table: no unknown keys, every pair present, every time valid
        if let Some(unknown) = travel_times
            .keys()
            .find(|k| !scenarios.iter().any(|s| &s.id == *k))
        {
            return Err(InputError::UnknownScenario {
                scenario: unknown.to_string(),
            });
        }
        let mut times = Vec::with_capacity(scenarios.len());
        for s in &scenarios {
            let mut row_map = travel_times.remove(&s.id).unwrap_or_default();
            let mut row = Vec::with_capacity(facilities.len());
            for f in &facilities {
                let hours = row_map
                    .remove(&f.id)
                    .ok_or_else(|| InputError::MissingTravelTime {
                        scenario: s.id.to_string(),
                        facility: f.id.to_string(),
                    })?;
                if !hours.is_valid() {
                    return Err(InputError::InvalidTravelTime {
                        scenario: s.id.to_string(),
                        facility: f.id.to_string(),
                        hours: hours.value(),
                    });
                }
                row.push(hours);
            }
            if let Some(extra) = row_map.keys().next() {
                return Err(InputError::UnknownFacility {
                    scenario: s.id.to_string(),
                    facility: extra.to_string(),
                });
            }
            times.push(row);
        }

        Ok(Self {
            name,
            facilities,
            scenarios,
            planning,
            distinct_planning,
            times,
        })
    }
}

fn check_distribution(
    distribution: &'static str,
    probs: &[(&ScenarioId, Prob)],
) -> Result<(), InputError> {
    if let Some((id, p)) = probs.iter().find(|(_, p)| !p.is_valid()) {
        return Err(InputError::ProbabilityOutOfRange {
            id: id.to_string(),
            probability: p.value(),
        });
    }
    let sum: f64 = probs.iter().map(|(_, p)| p.value()).sum();
    if (sum - 1.0).abs() > PROB_SUM_TOLERANCE {
        return Err(InputError::ProbabilitySum {
            distribution,
            sum,
            tolerance: PROB_SUM_TOLERANCE,
        });
    }
    Ok(())
}
