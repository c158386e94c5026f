use crate::{
    analysis::{Selector, StochasticMetrics, selector_for, solve_eev, solve_ws},
    config::{DF, Hours},
    error::{EvaluationError, InputError},
    models::{Evaluation, ScenarioModel, SelectorKind},
};

/// Runs RP, EEV and WS against one immutable model and derives EVPI/VSS.
/// Holds no per-threshold state: every call gets a fresh threshold.
pub struct DecisionEngine {
    model: ScenarioModel,
    selector: Box<dyn Selector>,
}

impl DecisionEngine {
    pub fn new(model: ScenarioModel, kind: SelectorKind) -> Self {
        Self::with_selector(model, selector_for(kind))
    }

    /// Use a caller-provided RP selector (e.g. a MILP selector with a custom solver).
    pub fn with_selector(model: ScenarioModel, selector: Box<dyn Selector>) -> Self {
        Self { model, selector }
    }

    pub fn model(&self) -> &ScenarioModel {
        &self.model
    }

    pub fn selector_kind(&self) -> SelectorKind {
        self.selector.kind()
    }

    pub fn evaluate(&self, threshold: Hours) -> Result<Evaluation, EvaluationError> {
        // 1. Reject bad thresholds before computing anything
        if !threshold.is_valid() {
            return Err(InputError::InvalidThreshold {
                hours: threshold.value(),
            }
            .into());
        }

        // 2. Policies
        let rp = self.selector.select(&self.model, threshold)?;
        let eev = solve_eev(&self.model, threshold);
        let ws = solve_ws(&self.model, threshold);

        // 3. Metrics (fatal if negative)
        let metrics = StochasticMetrics::compute(
            threshold,
            rp.expected_value,
            eev.decision.expected_value,
            ws,
        )?;

        if DF.log_selection {
            log::debug!(
                "[engine] threshold={} RP={} ({:.4}) EEV={} ({:.4}) WS={:.4} EVPI={:.4} VSS={:.4}",
                threshold,
                rp.facility_label(),
                rp.expected_value,
                eev.decision.facility_label(),
                eev.decision.expected_value,
                ws,
                metrics.evpi,
                metrics.vss
            );
        }

        Ok(Evaluation {
            threshold,
            selector: self.selector.kind(),
            rp,
            eev,
            ws,
            metrics,
        })
    }
}
