use {
    crate::domain::FacilityId,
    serde::{Deserialize, Serialize},
};

/// Output of one policy: the committed facility (if any) and its true expected value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub facility: Option<FacilityId>,
    pub expected_value: f64,
}

impl Decision {
    pub fn select(facility: FacilityId, expected_value: f64) -> Self {
        Self {
            facility: Some(facility),
            expected_value,
        }
    }

    /// No facility qualifies under the policy's information.
    pub fn none() -> Self {
        Self {
            facility: None,
            expected_value: 0.0,
        }
    }

    pub fn facility_label(&self) -> &str {
        self.facility.as_ref().map_or("none", FacilityId::as_str)
    }
}

/// EEV outcome. `planned_value` is what the averaged-data planner expects to get;
/// `decision.expected_value` is what that choice is actually worth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedValueDecision {
    pub decision: Decision,
    pub planned_value: f64,
}
