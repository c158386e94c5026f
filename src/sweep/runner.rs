use {
    super::{SweepReport, SweepRow},
    crate::{
        config::{DF, Hours, check_thresholds},
        engine::DecisionEngine,
        error::EvaluationError,
        models::ResultRow,
    },
    rayon::prelude::*,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SweepOptions {
    /// Evaluate thresholds on the rayon pool. Row order is unaffected.
    pub parallel: bool,
}

/// Re-runs the pipeline for every threshold.
///
/// Thresholds must be strictly increasing. Recoverable failures (solver) become
/// `SweepRow::Failed` and the sweep goes on; anything else aborts it.
pub fn run_sweep(
    engine: &DecisionEngine,
    thresholds: &[f64],
    options: SweepOptions,
) -> Result<SweepReport, EvaluationError> {
    check_thresholds(thresholds)?;

    log::info!(
        "Sweeping {} thresholds ({}h..{}h) with {} selector{}",
        thresholds.len(),
        thresholds[0],
        thresholds[thresholds.len() - 1],
        engine.selector_kind(),
        if options.parallel { " in parallel" } else { "" }
    );

    let rows = crate::trace_time!("sweep", 50_000, {
        if options.parallel {
            thresholds
                .par_iter()
                .map(|&t| run_single_threshold(engine, t))
                .collect::<Result<Vec<_>, _>>()
        } else {
            thresholds
                .iter()
                .map(|&t| run_single_threshold(engine, t))
                .collect::<Result<Vec<_>, _>>()
        }
    })?;

    let report = SweepReport {
        selector: engine.selector_kind(),
        rows,
    };
    log::info!(
        "Sweep complete: {} rows, {} failed",
        report.rows.len(),
        report.failed_count()
    );
    Ok(report)
}

fn run_single_threshold(engine: &DecisionEngine, hours: f64) -> Result<SweepRow, EvaluationError> {
    let threshold = Hours::new(hours);
    match engine.evaluate(threshold) {
        Ok(eval) => {
            let row = ResultRow::from(&eval);
            if DF.log_sweep {
                log::debug!(
                    "[sweep] {} -> RP {} {:.2} | EEV {:.2} | WS {:.2}",
                    threshold,
                    row.rp_facility,
                    row.rp_value,
                    row.eev_value,
                    row.ws_value
                );
            }
            Ok(SweepRow::Solved(row))
        }
        Err(e) if e.is_recoverable() => {
            log::warn!("[sweep] {} failed, continuing: {}", threshold, e);
            Ok(SweepRow::Failed {
                threshold,
                kind: e.kind().to_string(),
                reason: e.to_string(),
            })
        }
        Err(e) => Err(e),
    }
}
