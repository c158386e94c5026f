//! EVPI and VSS.

use {
    crate::{config::Hours, error::MetricError},
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticMetrics {
    /// WS - RP: the most that eliminating uncertainty could be worth.
    pub evpi: f64,
    /// RP - EEV: what ignoring uncertainty in the decision costs.
    pub vss: f64,
}

impl StochasticMetrics {
    /// Both values are returned with their sign. A negative one is an error, never clamped.
    pub fn compute(threshold: Hours, rp: f64, eev: f64, ws: f64) -> Result<Self, MetricError> {
        let evpi = ws - rp;
        let vss = rp - eev;

        if evpi < 0.0 {
            return Err(MetricError::NegativeEvpi {
                threshold: threshold.value(),
                ws,
                rp,
                evpi,
            });
        }
        if vss < 0.0 {
            return Err(MetricError::NegativeVss {
                threshold: threshold.value(),
                rp,
                eev,
                vss,
            });
        }

        Ok(Self { evpi, vss })
    }
}
