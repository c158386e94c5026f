//! Sensitivity sweep settings.

use {
    super::constants::MAX_SWEEP_POINTS,
    crate::{error::InputError, utils::linspace_steps},
    std::str::FromStr,
};

// Whole hours from "nothing reachable" to "everything reachable" for the demo
pub const DEFAULT_THRESHOLD_LEVELS: &[f64] = &[
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0,
];

/// Inclusive `start:end:step` range of thresholds, in hours.
/// Only built through `FromStr`, which caps the expansion at `MAX_SWEEP_POINTS`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRange {
    start: f64,
    end: f64,
    step: f64,
}

impl ThresholdRange {
    pub fn values(&self) -> Vec<f64> {
        point_count(self.start, self.end, self.step)
            .map_or_else(Vec::new, |count| linspace_steps(self.start, self.step, count))
    }
}

/// Points in the inclusive range, or `None` past `MAX_SWEEP_POINTS`.
fn point_count(start: f64, end: f64, step: f64) -> Option<usize> {
    // Tolerate end points that land a hair short because of decimal steps
    let steps = ((end - start) / step + 1e-9).floor();
    if !(steps.is_finite() && steps >= 0.0 && steps < MAX_SWEEP_POINTS as f64) {
        return None;
    }
    (steps as usize).checked_add(1)
}

impl FromStr for ThresholdRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [start, end, step] = parts.as_slice() else {
            return Err(format!("expected start:end:step, got '{s}'"));
        };
        let parse = |field: &str, name: &str| {
            field
                .parse::<f64>()
                .map_err(|e| format!("invalid {name} '{field}': {e}"))
        };
        let range = Self {
            start: parse(*start, "start")?,
            end: parse(*end, "end")?,
            step: parse(*step, "step")?,
        };

        if !(range.start.is_finite() && range.end.is_finite() && range.step.is_finite()) {
            return Err("range bounds must be finite".to_string());
        }
        if range.step <= 0.0 {
            return Err(format!("step must be positive, got {}", range.step));
        }
        if range.end < range.start {
            return Err(format!(
                "end {} is below start {}",
                range.end, range.start
            ));
        }
        if point_count(range.start, range.end, range.step).is_none() {
            return Err(format!("range expands to more than {MAX_SWEEP_POINTS} thresholds"));
        }
        Ok(range)
    }
}

/// Thresholds must be valid hours and strictly increasing.
pub fn check_thresholds(thresholds: &[f64]) -> Result<(), InputError> {
    if thresholds.is_empty() {
        return Err(InputError::EmptyThresholds);
    }
    if let Some(&bad) = thresholds.iter().find(|t| !(t.is_finite() && **t >= 0.0)) {
        return Err(InputError::InvalidThreshold { hours: bad });
    }
    if let Some(pair) = thresholds.windows(2).find(|w| w[1] <= w[0]) {
        return Err(InputError::UnorderedThresholds {
            previous: pair[0],
            next: pair[1],
        });
    }
    Ok(())
}
