//! Configuration module for organ-dispatch.

// Can all be private now because we have a public re-export.
mod debug;
mod demo;
mod sweep;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::{
    CONSTRAINT_EPSILON, DEFAULT_NODE_LIMIT, DEFAULT_VIABILITY_HOURS, MAX_SWEEP_POINTS,
    OBJECTIVE_CROSS_CHECK_TOLERANCE, PROB_SUM_TOLERANCE,
};
pub use debug::DF;
pub use demo::{DEMO, demo_instance};
pub use sweep::{DEFAULT_THRESHOLD_LEVELS, ThresholdRange, check_thresholds};
pub use types::{Hours, Prob};
