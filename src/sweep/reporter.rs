use {
    super::{SweepReport, SweepRow},
    chrono::Local,
};

/// CSV rendering of sweep rows, one line per threshold.
pub struct SweepReporter {
    buffer: Vec<String>,
}

impl SweepReporter {
    pub const HEADER: &'static str = "Timestamp,Threshold_H,RP_Facility,RP,EEV,WS,EVPI,VSS,Status";

    pub fn new() -> Self {
        Self {
            buffer: vec![Self::HEADER.to_string()],
        }
    }

    pub fn from_report(report: &SweepReport) -> Self {
        let mut reporter = Self::new();
        for row in &report.rows {
            reporter.add_row(row);
        }
        reporter
    }

    pub fn add_row(&mut self, row: &SweepRow) {
        let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = match row {
            SweepRow::Solved(r) => format!(
                "{},{:.2},{},{:.2},{:.2},{:.2},{:.2},{:.2},ok",
                ts,
                r.threshold.value(),
                r.rp_facility,
                r.rp_value,
                r.eev_value,
                r.ws_value,
                r.evpi,
                r.vss
            ),
            SweepRow::Failed {
                threshold, kind, ..
            } => format!("{},{:.2},,,,,,,{}", ts, threshold.value(), kind),
        };
        self.buffer.push(line);
    }

    pub fn render(&self) -> String {
        let mut out = self.buffer.join("\n");
        out.push('\n');
        out
    }
}

impl Default for SweepReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Hours,
        models::{ResultRow, SelectorKind},
    };

    #[test]
    fn renders_solved_and_failed_rows() {
        let report = SweepReport {
            selector: SelectorKind::Milp,
            rows: vec![
                SweepRow::Solved(ResultRow {
                    threshold: Hours::new(8.0),
                    rp_value: 17.5,
                    eev_value: 15.4,
                    ws_value: 23.0,
                    evpi: 5.5,
                    vss: 2.1,
                    rp_facility: "E".into(),
                }),
                SweepRow::Failed {
                    threshold: Hours::new(9.0),
                    kind: "SolverFailure".into(),
                    reason: "Binary program is infeasible".into(),
                },
            ],
        };
        let csv = SweepReporter::from_report(&report).render();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], SweepReporter::HEADER);
        // Drop the timestamp column
        let tail = |line: &str| line.split_once(',').map(|(_, rest)| rest.to_string());
        assert_eq!(tail(lines[1]).unwrap(), "8.00,E,17.50,15.40,23.00,5.50,2.10,ok");
        assert_eq!(tail(lines[2]).unwrap(), "9.00,,,,,,,SolverFailure");
    }
}
