use {
    crate::{
        analysis::StochasticMetrics,
        config::Hours,
        models::{Decision, ExpectedValueDecision, SelectorKind},
    },
    serde::{Deserialize, Serialize},
};

/// Everything one pass of the pipeline produces for a single threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub threshold: Hours,
    pub selector: SelectorKind,
    pub rp: Decision,
    pub eev: ExpectedValueDecision,
    pub ws: f64,
    pub metrics: StochasticMetrics,
}
