//! Core data types for KPI definitions and calculation results.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::registry::KpiKind;

/// A single numeric input required by a KPI formula.
///
/// `placeholder` and `unit` are display hints only; they carry no semantic
/// weight in the evaluation pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct InputSpec {
    /// Input key, unique within its KPI
    pub id: String,
    /// Display label
    pub label: String,
    /// Example value shown in an empty field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Display unit suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl InputSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            placeholder: None,
            unit: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// A self-contained KPI definition: display metadata, the ordered input
/// specs, and the formula/interpretation pair carried by [`KpiKind`].
///
/// Definitions are built once at process start and never mutated. Every
/// input id read by the formula appears in `inputs`, and `inputs` contains
/// no duplicate ids.
#[derive(Debug, Clone, Serialize)]
pub struct KpiDefinition {
    /// Unique key, also used as the REST resource id
    pub id: String,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// Display unit for the result (e.g. "%", "ore")
    pub unit: String,
    /// Ordered input specs (order = display/entry order)
    pub inputs: Vec<InputSpec>,
    /// Formula and interpretation, dispatched by variant
    #[serde(skip)]
    pub kind: KpiKind,
}

impl KpiDefinition {
    /// Evaluate the KPI formula over a numeric input map.
    ///
    /// Returns `None` when the formula is undefined for these inputs
    /// (division by zero).
    pub fn calculate(&self, values: &HashMap<String, f64>) -> Option<f64> {
        self.kind.calculate(values)
    }

    /// Interpretation message for a computed value.
    pub fn interpret(&self, value: f64) -> String {
        self.kind.interpret(value)
    }
}

/// Outcome of a successful evaluation: the raw value plus everything the
/// display layer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Raw computed value
    pub value: f64,
    /// Display rendering of `value` (see `services::evaluator::format_value`)
    pub formatted_value: String,
    /// Display unit taken from the KPI definition
    pub unit: String,
    /// Interpretation message for `value`
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_spec_builder() {
        let spec = InputSpec::new("operatingTime", "Tempo operativo totale")
            .with_placeholder("Es. 1000")
            .with_unit("ore");

        assert_eq!(spec.id, "operatingTime");
        assert_eq!(spec.label, "Tempo operativo totale");
        assert_eq!(spec.placeholder.as_deref(), Some("Es. 1000"));
        assert_eq!(spec.unit.as_deref(), Some("ore"));
    }

    #[test]
    fn test_input_spec_optional_hints_absent() {
        let spec = InputSpec::new("failures", "Numero di guasti");
        assert!(spec.placeholder.is_none());
        assert!(spec.unit.is_none());

        let json = serde_json::to_value(&spec).unwrap();
        assert!(json.get("placeholder").is_none());
        assert!(json.get("unit").is_none());
    }

    #[test]
    fn test_calculation_result_serialization() {
        let result = CalculationResult {
            value: 250.0,
            formatted_value: "250".to_string(),
            unit: "ore".to_string(),
            message: "ok".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["value"], 250.0);
        assert_eq!(json["formatted_value"], "250");
        assert_eq!(json["unit"], "ore");
    }
}
