mod builder;
mod decision;
mod evaluation;
mod instance;
mod result_row;
mod selector_kind;

pub use {
    builder::InstanceBuilder,
    decision::{Decision, ExpectedValueDecision},
    evaluation::Evaluation,
    instance::{InstanceSpec, ScenarioModel, TravelTable},
    result_row::ResultRow,
    selector_kind::SelectorKind,
};
