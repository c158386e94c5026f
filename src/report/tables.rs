//! Plain-text tables for the terminal.

use {
    crate::{
        analysis::{FacilityScore, ScenarioWinner},
        models::Evaluation,
        sweep::{SweepReport, SweepRow},
    },
    tabled::{Table, Tabled, settings::Style},
};

#[derive(Tabled)]
struct SummaryLine {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct ScoreLine {
    #[tabled(rename = "Facility")]
    facility: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Avg time")]
    average_time: String,
    #[tabled(rename = "Std dev")]
    stddev: String,
    #[tabled(rename = "P(on time)")]
    feasible_mass: String,
    #[tabled(rename = "E[value]")]
    expected_value: String,
    #[tabled(rename = "OK on avg")]
    feasible_on_average: &'static str,
}

#[derive(Tabled)]
struct WinnerLine {
    #[tabled(rename = "Scenario")]
    scenario: String,
    #[tabled(rename = "Best facility")]
    facility: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct SweepLine {
    #[tabled(rename = "Threshold")]
    threshold: String,
    #[tabled(rename = "RP facility")]
    facility: String,
    #[tabled(rename = "RP")]
    rp: String,
    #[tabled(rename = "EEV")]
    eev: String,
    #[tabled(rename = "WS")]
    ws: String,
    #[tabled(rename = "EVPI")]
    evpi: String,
    #[tabled(rename = "VSS")]
    vss: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn two_dp(v: f64) -> String {
    format!("{v:.2}")
}

pub fn summary_table(eval: &Evaluation) -> String {
    let eev = &eval.eev;
    let lines = vec![
        SummaryLine {
            metric: "Viability threshold",
            value: eval.threshold.to_string(),
        },
        SummaryLine {
            metric: "Selector",
            value: eval.selector.to_string(),
        },
        SummaryLine {
            metric: "RP facility",
            value: eval.rp.facility_label().to_string(),
        },
        SummaryLine {
            metric: "RP expected value",
            value: two_dp(eval.rp.expected_value),
        },
        SummaryLine {
            metric: "EEV facility",
            value: eev.decision.facility_label().to_string(),
        },
        SummaryLine {
            metric: "EEV planned value",
            value: two_dp(eev.planned_value),
        },
        SummaryLine {
            metric: "EEV expected value",
            value: two_dp(eev.decision.expected_value),
        },
        SummaryLine {
            metric: "WS expected value",
            value: two_dp(eval.ws),
        },
        SummaryLine {
            metric: "EVPI (WS - RP)",
            value: two_dp(eval.metrics.evpi),
        },
        SummaryLine {
            metric: "VSS (RP - EEV)",
            value: two_dp(eval.metrics.vss),
        },
    ];
    Table::new(lines).with(Style::rounded()).to_string()
}

pub fn scores_table(scores: &[FacilityScore]) -> String {
    let lines = scores.iter().map(|s| ScoreLine {
        facility: s.id.to_string(),
        value: two_dp(s.value),
        average_time: s.average_time.to_string(),
        stddev: s.time_stddev.to_string(),
        feasible_mass: two_dp(s.feasible_mass),
        expected_value: two_dp(s.expected_value),
        feasible_on_average: if s.feasible_on_average { "yes" } else { "no" },
    });
    Table::new(lines).with(Style::rounded()).to_string()
}

pub fn winners_table(winners: &[ScenarioWinner]) -> String {
    let lines = winners.iter().map(|w| WinnerLine {
        scenario: w.scenario.to_string(),
        facility: w
            .facility
            .as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string),
        value: two_dp(w.value),
    });
    Table::new(lines).with(Style::rounded()).to_string()
}

pub fn sweep_table(report: &SweepReport) -> String {
    let lines = report.rows.iter().map(|row| match row {
        SweepRow::Solved(r) => SweepLine {
            threshold: r.threshold.to_string(),
            facility: r.rp_facility.clone(),
            rp: two_dp(r.rp_value),
            eev: two_dp(r.eev_value),
            ws: two_dp(r.ws_value),
            evpi: two_dp(r.evpi),
            vss: two_dp(r.vss),
            status: "ok".to_string(),
        },
        SweepRow::Failed {
            threshold, kind, ..
        } => SweepLine {
            threshold: threshold.to_string(),
            facility: "-".to_string(),
            rp: "-".to_string(),
            eev: "-".to_string(),
            ws: "-".to_string(),
            evpi: "-".to_string(),
            vss: "-".to_string(),
            status: kind.clone(),
        },
    });
    Table::new(lines).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::{facility_scores, scenario_winners},
        config::{Hours, demo_instance},
        engine::DecisionEngine,
        models::SelectorKind,
        sweep::{SweepOptions, run_sweep},
    };

    #[test]
    fn summary_shows_two_decimals() {
        let engine = DecisionEngine::new(
            demo_instance().validate().unwrap(),
            SelectorKind::ClosedForm,
        );
        let table = summary_table(&engine.evaluate(Hours::new(8.0)).unwrap());
        assert!(table.contains("RP facility"));
        assert!(table.contains("17.50"));
        assert!(table.contains("15.40"));
        assert!(table.contains("23.00"));
        assert!(table.contains("2.10"));
    }

    #[test]
    fn breakdown_tables_list_everything() {
        let model = demo_instance().validate().unwrap();
        let scores = scores_table(&facility_scores(&model, Hours::new(8.0)));
        for id in ["A", "B", "C", "D", "E", "F"] {
            assert!(scores.contains(id));
        }
        let winners = winners_table(&scenario_winners(&model, Hours::new(8.0)));
        assert!(winners.contains("Extreme"));
    }

    #[test]
    fn sweep_table_has_row_per_threshold() {
        let engine = DecisionEngine::new(
            demo_instance().validate().unwrap(),
            SelectorKind::ClosedForm,
        );
        let report = run_sweep(&engine, &[2.0, 8.0, 12.0], SweepOptions::default()).unwrap();
        let table = sweep_table(&report);
        assert!(table.contains("2.00h"));
        assert!(table.contains("8.00h"));
        assert!(table.contains("12.00h"));
    }
}
