mod tables;

pub use tables::{scores_table, summary_table, sweep_table, winners_table};
