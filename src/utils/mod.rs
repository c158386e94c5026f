mod maths_utils;
mod perf;

pub(crate) use maths_utils::{linspace_steps, weighted_mean_and_stddev};
