//! Scalar value objects shared across the engine.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// A duration in hours. Travel times and viability thresholds both use it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Hours(f64);

impl Hours {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Finite and non-negative.
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl From<f64> for Hours {
    fn from(val: f64) -> Self {
        Self(val)
    }
}

impl Add for Hours {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::fmt::Display for Hours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}h", self.0)
    }
}

/// A scenario probability. Not clamped: out-of-range values are rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Prob(f64);

impl Prob {
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// In (0, 1].
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 > 0.0 && self.0 <= 1.0
    }
}

impl Mul<f64> for Prob {
    type Output = f64;
    fn mul(self, rhs: f64) -> f64 {
        self.0 * rhs
    }
}

impl Mul<Hours> for Prob {
    type Output = Hours;
    fn mul(self, rhs: Hours) -> Hours {
        Hours(self.0 * rhs.0)
    }
}

impl std::fmt::Display for Prob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0 * 100.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_validity() {
        assert!(Hours::new(0.0).is_valid());
        assert!(Hours::new(8.0).is_valid());
        assert!(!Hours::new(-0.5).is_valid());
        assert!(!Hours::new(f64::NAN).is_valid());
        assert!(!Hours::new(f64::INFINITY).is_valid());
    }

    #[test]
    fn prob_validity_excludes_zero() {
        assert!(Prob::new(1.0).is_valid());
        assert!(Prob::new(0.1).is_valid());
        assert!(!Prob::new(0.0).is_valid());
        assert!(!Prob::new(1.01).is_valid());
    }

    #[test]
    fn weighted_hours() {
        let weighted = Prob::new(0.25) * Hours::new(8.0);
        assert_eq!(weighted, Hours::new(2.0));
        assert_eq!(weighted + Hours::new(1.0), Hours::new(3.0));
    }
}
