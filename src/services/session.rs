//! Per-selection evaluation session.
//!
//! An [`EvaluationSession`] holds the transient state for the currently
//! selected KPI: the raw text inputs plus the outcome of the last calculate
//! action. Result and error are mutually exclusive at all times and are only
//! written by [`EvaluationSession::calculate`]; editing an input touches the
//! raw inputs alone.

use std::collections::HashMap;

use crate::models::{CalculationResult, KpiDefinition};
use crate::registry;
use crate::services::evaluator::{self, EvaluationError};

/// Mutable state scoped to one selected KPI.
///
/// Single-threaded by design: one session is only ever driven by one logical
/// thread of control, one action at a time.
#[derive(Debug, Clone)]
pub struct EvaluationSession {
    definition: &'static KpiDefinition,
    raw_inputs: HashMap<String, String>,
    result: Option<CalculationResult>,
    error: Option<EvaluationError>,
}

impl EvaluationSession {
    /// Start a session on the default (first) KPI.
    pub fn new() -> Self {
        Self::with_definition(registry::get_registry().default_definition())
    }

    /// Start a session on the given KPI; an unknown id falls back to the
    /// default selection.
    pub fn for_kpi(id: &str) -> Self {
        Self::with_definition(registry::get_registry().get_or_default(id))
    }

    fn with_definition(definition: &'static KpiDefinition) -> Self {
        Self {
            definition,
            raw_inputs: HashMap::new(),
            result: None,
            error: None,
        }
    }

    /// The active KPI definition.
    pub fn definition(&self) -> &'static KpiDefinition {
        self.definition
    }

    pub fn kpi_id(&self) -> &str {
        &self.definition.id
    }

    /// Switch the active KPI, atomically discarding all prior state
    /// (inputs, result, error). Re-selecting the KPI that is already active
    /// is a no-op; an unknown id resolves through the default selection
    /// policy first.
    pub fn select(&mut self, id: &str) {
        let next = registry::get_registry().get_or_default(id);
        if next.id != self.definition.id {
            *self = Self::with_definition(next);
        }
    }

    /// Record raw text for one input field. Only the raw inputs change;
    /// result and error are left to the next calculate action.
    pub fn set_input(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.raw_inputs.insert(id.into(), value.into());
    }

    pub fn raw_input(&self, id: &str) -> Option<&str> {
        self.raw_inputs.get(id).map(String::as_str)
    }

    pub fn raw_inputs(&self) -> &HashMap<String, String> {
        &self.raw_inputs
    }

    /// Run the evaluation pipeline over the current inputs, setting exactly
    /// one of result/error and clearing the other.
    pub fn calculate(&mut self) {
        match evaluator::evaluate(self.definition, &self.raw_inputs) {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err);
            }
        }
    }

    /// Clear inputs, result and error without changing the selection.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.raw_inputs.clear();
        self.result = None;
        self.error = None;
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<EvaluationError> {
        self.error
    }
}

impl Default for EvaluationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_on_first_kpi() {
        let session = EvaluationSession::new();
        assert_eq!(session.kpi_id(), "mtbf");
        assert!(session.raw_inputs().is_empty());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_unknown_id_falls_back_to_default() {
        let session = EvaluationSession::for_kpi("nope");
        assert_eq!(session.kpi_id(), "mtbf");
    }

    #[test]
    fn test_calculate_sets_result_and_clears_error() {
        let mut session = EvaluationSession::for_kpi("mtbf");
        session.calculate();
        assert_eq!(session.error(), Some(EvaluationError::MissingInput));
        assert!(session.result().is_none());

        session.set_input("operatingTime", "1000");
        session.set_input("failures", "4");
        session.calculate();
        assert!(session.error().is_none());
        assert_eq!(session.result().unwrap().formatted_value, "250");
    }

    #[test]
    fn test_calculate_sets_error_and_clears_result() {
        let mut session = EvaluationSession::for_kpi("mtbf");
        session.set_input("operatingTime", "1000");
        session.set_input("failures", "4");
        session.calculate();
        assert!(session.result().is_some());

        session.set_input("failures", "0");
        session.calculate();
        assert!(session.result().is_none());
        assert_eq!(session.error(), Some(EvaluationError::InvalidCalculation));
    }

    #[test]
    fn test_editing_input_leaves_outcome_untouched() {
        let mut session = EvaluationSession::for_kpi("mtbf");
        session.set_input("operatingTime", "1000");
        session.set_input("failures", "4");
        session.calculate();
        assert!(session.result().is_some());

        session.set_input("failures", "5");
        assert!(session.result().is_some());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut session = EvaluationSession::for_kpi("oee");
        session.set_input("availability", "90");
        session.calculate();
        session.reset();
        let after_first = (
            session.raw_inputs().clone(),
            session.result().cloned(),
            session.error(),
        );
        session.reset();
        assert!(session.raw_inputs().is_empty());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
        assert_eq!(after_first.0, *session.raw_inputs());
        assert_eq!(after_first.1, session.result().cloned());
        assert_eq!(after_first.2, session.error());
    }

    #[test]
    fn test_switching_kpi_discards_state() {
        let mut session = EvaluationSession::for_kpi("mtbf");
        session.set_input("operatingTime", "1000");
        session.set_input("failures", "4");
        session.calculate();
        assert!(session.result().is_some());

        session.select("mttr");
        assert_eq!(session.kpi_id(), "mttr");
        assert!(session.raw_inputs().is_empty());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_reselecting_active_kpi_keeps_state() {
        let mut session = EvaluationSession::for_kpi("mtbf");
        session.set_input("operatingTime", "1000");
        session.select("mtbf");
        assert_eq!(session.raw_input("operatingTime"), Some("1000"));
    }
}
