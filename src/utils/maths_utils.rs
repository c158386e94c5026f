/// Weighted mean and (population) standard deviation.
/// Weights need not sum to 1; a zero total weight gives (0.0, 0.0).
#[inline]
pub fn weighted_mean_and_stddev(data: &[f64], weights: &[f64]) -> (f64, f64) {
    debug_assert_eq!(data.len(), weights.len());

    let total: f64 = weights.iter().sum();
    if total <= f64::EPSILON {
        return (0.0, 0.0);
    }

    let mean = data.iter().zip(weights).map(|(x, w)| x * w).sum::<f64>() / total;

    let variance: f64 = data
        .iter()
        .zip(weights)
        .map(|(value, w)| {
            let diff = mean - *value;
            w * diff * diff
        })
        .sum::<f64>()
        / total;

    (mean, variance.sqrt())
}

/// `count` evenly spaced values starting at `start`. Each value is computed from its
/// index so no rounding error accumulates across steps.
pub fn linspace_steps(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_stats() {
        let (mean, sd) = weighted_mean_and_stddev(&[2.0, 4.0], &[0.5, 0.5]);
        assert!((mean - 3.0).abs() < 1e-12);
        assert!((sd - 1.0).abs() < 1e-12);

        let (mean, sd) = weighted_mean_and_stddev(&[5.0, 100.0], &[1.0, 0.0]);
        assert_eq!(mean, 5.0);
        assert_eq!(sd, 0.0);

        assert_eq!(weighted_mean_and_stddev(&[], &[]), (0.0, 0.0));
    }

    #[test]
    fn linspace_has_no_drift() {
        let v = linspace_steps(0.0, 0.1, 31);
        assert_eq!(v.len(), 31);
        assert!((v[30] - 3.0).abs() < 1e-12);
    }
}
