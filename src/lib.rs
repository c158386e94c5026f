#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod solver;
pub mod sweep;
mod utils;

// Re-export commonly used types outside of crate (for the binary and integration tests)
pub use config::{Hours, Prob, demo_instance};
pub use engine::DecisionEngine;
pub use error::{EvaluationError, InputError, MetricError, SolverError};
pub use models::{Evaluation, InstanceSpec, ScenarioModel, SelectorKind};
pub use sweep::{SweepOptions, SweepReport, run_sweep};

// CLI argument parsing
use {
    crate::{
        analysis::{facility_scores, scenario_winners},
        config::{DEFAULT_THRESHOLD_LEVELS, DEFAULT_VIABILITY_HOURS, ThresholdRange},
        models::ResultRow,
        sweep::{SweepReporter, SweepRow},
    },
    clap::Parser,
    std::path::PathBuf,
    strum_macros::Display,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON instance file. The built-in six-hospital instance is used when omitted
    #[arg(long)]
    pub instance: Option<PathBuf>,

    /// Viability threshold in hours for a single evaluation
    #[arg(long, default_value_t = DEFAULT_VIABILITY_HOURS)]
    pub viability: f64,

    /// Sweep an inclusive threshold range, e.g. 2:12:0.5. Bare `--sweep` uses 1h..13h
    #[arg(long, num_args = 0..=1, conflicts_with = "thresholds")]
    pub sweep: Option<Option<ThresholdRange>>,

    /// Sweep an explicit, strictly increasing list of thresholds, e.g. 4,6,8
    #[arg(long, value_delimiter = ',')]
    pub thresholds: Option<Vec<f64>>,

    #[arg(long, value_enum, default_value_t = SelectorKind::ClosedForm)]
    pub selector: SelectorKind,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Evaluate sweep thresholds on the rayon pool
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Print per-facility and per-scenario intermediates (single evaluation only)
    #[arg(long, default_value_t = false)]
    pub explain: bool,

    /// Write the built-in instance to this path as JSON and exit
    #[arg(long)]
    pub write_demo: Option<PathBuf>,
}

impl Cli {
    fn sweep_thresholds(&self) -> Option<Vec<f64>> {
        match (&self.sweep, &self.thresholds) {
            (Some(Some(range)), _) => Some(range.values()),
            (Some(None), _) => Some(DEFAULT_THRESHOLD_LEVELS.to_vec()),
            (None, Some(list)) => Some(list.clone()),
            (None, None) => None,
        }
    }
}

/// Entry point for the binary.
pub fn run(args: Cli) -> anyhow::Result<()> {
    if let Some(path) = &args.write_demo {
        data::save_instance(path, &demo_instance())?;
        log::info!("Wrote demo instance to {}", path.display());
        return Ok(());
    }

    let model = match &args.instance {
        Some(path) => data::load_instance(path)?,
        None => demo_instance().validate()?,
    };
    let engine = DecisionEngine::new(model, args.selector);

    match args.sweep_thresholds() {
        Some(thresholds) => {
            if args.explain {
                log::warn!("--explain only applies to a single evaluation, ignoring it");
            }
            let options = SweepOptions {
                parallel: args.parallel,
            };
            let report = run_sweep(&engine, &thresholds, options)?;
            print_sweep(&report, args.format)?;
            if report.failed_count() > 0 {
                log::warn!(
                    "{} of {} thresholds failed",
                    report.failed_count(),
                    report.rows.len()
                );
            }
        }
        None => {
            let threshold = Hours::new(args.viability);
            let evaluation = engine.evaluate(threshold)?;
            print_evaluation(&engine, &evaluation, args.format, args.explain)?;
        }
    }
    Ok(())
}

fn print_evaluation(
    engine: &DecisionEngine,
    evaluation: &Evaluation,
    format: OutputFormat,
    explain: bool,
) -> anyhow::Result<()> {
    let threshold = evaluation.threshold;
    match format {
        OutputFormat::Table => {
            println!("{}", report::summary_table(evaluation));
            if explain {
                let scores = facility_scores(engine.model(), threshold);
                let winners = scenario_winners(engine.model(), threshold);
                println!("{}", report::scores_table(&scores));
                println!("{}", report::winners_table(&winners));
            }
        }
        OutputFormat::Csv => {
            let mut reporter = SweepReporter::new();
            reporter.add_row(&SweepRow::Solved(ResultRow::from(evaluation)));
            print!("{}", reporter.render());
        }
        OutputFormat::Json => {
            let json = if explain {
                serde_json::json!({
                    "evaluation": evaluation,
                    "facilities": facility_scores(engine.model(), threshold),
                    "winners": scenario_winners(engine.model(), threshold),
                })
            } else {
                serde_json::to_value(evaluation)?
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

fn print_sweep(outcome: &SweepReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => println!("{}", report::sweep_table(outcome)),
        OutputFormat::Csv => print!("{}", SweepReporter::from_report(outcome).render()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(outcome)?),
    }
    Ok(())
}
