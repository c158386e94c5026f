//! Reachability test shared by every policy.

use crate::{config::Hours, models::ScenarioModel};

/// A facility is usable when the trip takes at most `threshold`.
/// Equality counts as feasible.
#[inline]
pub fn feasible(time: Hours, threshold: Hours) -> bool {
    time <= threshold
}

/// Travel time to `facility` averaged with the planning distribution.
pub fn average_travel_time(model: &ScenarioModel, facility: usize) -> Hours {
    (0..model.scenarios().len()).fold(Hours::ZERO, |acc, s| {
        acc + model.planning_probability(s) * model.travel_time(s, facility)
    })
}

/// Outcome probability of the scenarios in which `facility` is reached in time.
pub fn feasible_mass(model: &ScenarioModel, facility: usize, threshold: Hours) -> f64 {
    model
        .scenarios()
        .iter()
        .enumerate()
        .filter(|(s, _)| feasible(model.travel_time(*s, facility), threshold))
        .map(|(_, scenario)| scenario.probability.value())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::demo_instance;

    #[test]
    fn boundary_is_inclusive() {
        assert!(feasible(Hours::new(8.0), Hours::new(8.0)));
        assert!(feasible(Hours::new(7.99), Hours::new(8.0)));
        assert!(!feasible(Hours::new(8.01), Hours::new(8.0)));
        assert!(feasible(Hours::ZERO, Hours::ZERO));
    }

    #[test]
    fn demo_average_times() {
        let model = demo_instance().validate().unwrap();
        let a = model.facility_index(&"A".into()).unwrap();
        let e = model.facility_index(&"E".into()).unwrap();
        // 0.1*2 + 0.2*3 + 0.4*4 + 0.2*6 + 0.1*8
        assert!((average_travel_time(&model, a).value() - 4.4).abs() < 1e-9);
        // 0.1*5 + 0.2*6 + 0.4*8 + 0.2*10 + 0.1*12
        assert!((average_travel_time(&model, e).value() - 8.1).abs() < 1e-9);
    }

    #[test]
    fn demo_feasible_mass() {
        let model = demo_instance().validate().unwrap();
        let a = model.facility_index(&"A".into()).unwrap();
        let c = model.facility_index(&"C".into()).unwrap();
        assert!((feasible_mass(&model, a, Hours::new(8.0)) - 1.0).abs() < 1e-9);
        // C: 4, 5, 7 feasible; 9, 10 not
        assert!((feasible_mass(&model, c, Hours::new(8.0)) - 0.7).abs() < 1e-9);
        assert_eq!(feasible_mass(&model, c, Hours::new(1.0)), 0.0);
    }
}
