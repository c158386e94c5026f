// Domain types and value objects
mod facility;
mod scenario;

pub use facility::{Facility, FacilityId};
pub use scenario::{Scenario, ScenarioId};
