mod core;

pub use self::core::DecisionEngine;
