//! Service layer: the evaluation pipeline and per-selection session state.
//!
//! Services consume the registry only through the definition contract
//! (input specs plus the formula/interpretation pair), never through any
//! specific KPI.

pub mod evaluator;

pub mod session;

pub use evaluator::{evaluate, format_value, EvaluationError};
pub use session::EvaluationSession;
