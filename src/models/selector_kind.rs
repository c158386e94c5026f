use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// How the RP (here-and-now) decision is computed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    Ord,
    PartialOrd,
    Default,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorKind {
    /// Enumerate facilities and score each one directly.
    #[strum(to_string = "Closed form")]
    #[default]
    ClosedForm,

    /// Emit the select-one binary program and hand it to a branch and bound solver.
    /// Kept as a cross-check and for structural extensions where enumeration stops applying.
    #[strum(to_string = "MILP")]
    Milp,
}
