use serde::{Deserialize, Serialize};

/// Stable identifier of a destination facility.
/// Ordering is lexicographic and is the tie-break order for every selector.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct FacilityId(String);

impl FacilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FacilityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for FacilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate destination and the value obtained if it is reached in time
/// (e.g. expected life-years saved).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Facility {
    pub id: FacilityId,
    pub value: f64,
}

impl Facility {
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: FacilityId::new(id),
            value,
        }
    }
}
