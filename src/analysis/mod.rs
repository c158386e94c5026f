// Decision policies and the metrics derived from them
pub mod breakdown;
pub mod expected_value;
pub mod feasibility;
pub mod metrics;
pub mod recourse;
pub mod selector;
pub mod wait_and_see;

pub use {
    breakdown::{FacilityScore, facility_scores},
    expected_value::solve_eev,
    feasibility::{average_travel_time, feasible, feasible_mass},
    metrics::StochasticMetrics,
    recourse::{expected_value_of, solve_rp},
    selector::{ClosedFormSelector, MilpSelector, Selector, selector_for},
    wait_and_see::{ScenarioWinner, scenario_winners, solve_ws},
};
