use crate::models::InstanceSpec;

pub struct DemoFacility {
    pub id: &'static str,
    /// Expected life-years saved if the organ arrives in time
    pub value: f64,
}

pub struct DemoScenario {
    pub id: &'static str,
    pub probability: f64,
    /// Hours to each facility, same order as `DemoConfig::facilities`
    pub hours: &'static [f64],
}

pub struct DemoConfig {
    pub name: &'static str,
    pub facilities: &'static [DemoFacility],
    pub scenarios: &'static [DemoScenario],
}

pub const DEMO: DemoConfig = DemoConfig {
    name: "Six-hospital organ transport",
    facilities: &[
        DemoFacility { id: "A", value: 15.0 },
        DemoFacility { id: "B", value: 18.0 },
        DemoFacility { id: "C", value: 22.0 },
        DemoFacility { id: "D", value: 19.0 },
        DemoFacility { id: "E", value: 25.0 },
        DemoFacility { id: "F", value: 17.0 },
    ],
    scenarios: &[
        DemoScenario { id: "Very Low", probability: 0.1, hours: &[2.0, 3.0, 4.0, 3.0, 5.0, 2.0] },
        DemoScenario { id: "Low", probability: 0.2, hours: &[3.0, 4.0, 5.0, 4.0, 6.0, 3.0] },
        DemoScenario { id: "Medium", probability: 0.4, hours: &[4.0, 6.0, 7.0, 5.0, 8.0, 5.0] },
        DemoScenario { id: "High", probability: 0.2, hours: &[6.0, 8.0, 9.0, 7.0, 10.0, 6.0] },
        DemoScenario { id: "Extreme", probability: 0.1, hours: &[8.0, 9.0, 10.0, 9.0, 12.0, 8.0] },
    ],
};

/// The built-in instance, unvalidated.
pub fn demo_instance() -> InstanceSpec {
    let builder = DEMO
        .facilities
        .iter()
        .fold(InstanceSpec::builder().name(DEMO.name), |b, f| {
            b.facility(f.id, f.value)
        });
    DEMO.scenarios
        .iter()
        .fold(builder, |b, s| b.scenario(s.id, s.probability, s.hours))
        .spec()
}
