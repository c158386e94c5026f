use {
    crate::{config::Hours, models::Evaluation},
    serde::{Deserialize, Serialize},
};

/// One line of a threshold sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub threshold: Hours,
    pub rp_value: f64,
    pub eev_value: f64,
    pub ws_value: f64,
    pub evpi: f64,
    pub vss: f64,
    pub rp_facility: String,
}

impl From<&Evaluation> for ResultRow {
    fn from(eval: &Evaluation) -> Self {
        Self {
            threshold: eval.threshold,
            rp_value: eval.rp.expected_value,
            eev_value: eval.eev.decision.expected_value,
            ws_value: eval.ws,
            evpi: eval.metrics.evpi,
            vss: eval.metrics.vss,
            rp_facility: eval.rp.facility_label().to_string(),
        }
    }
}
