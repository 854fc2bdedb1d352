//! KPI evaluation pipeline.
//!
//! Turns raw user-entered strings into a [`CalculationResult`] through
//! ordered, short-circuiting steps: presence check, decimal parse, formula
//! evaluation, finiteness check, display formatting, interpretation.
//!
//! Exactly two user-facing failures exist. A parse failure is never its own
//! error: the NaN sentinel flows through the formula's zero-default and can
//! only surface indirectly as [`EvaluationError::InvalidCalculation`].

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{CalculationResult, KpiDefinition};

/// User-facing evaluation failures. Both are recoverable: the session stays
/// editable and the user may correct inputs and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// One or more required fields are blank or missing. Deliberately does
    /// not name the offending field.
    #[error("Per favore compila tutti i campi richiesti.")]
    MissingInput,
    /// The formula returned no value (e.g. division by zero) or a
    /// non-finite number.
    #[error("Errore nel calcolo. Verifica che i valori inseriti siano corretti (es. divisione per zero).")]
    InvalidCalculation,
}

/// Run the full pipeline for one KPI over raw string inputs.
pub fn evaluate(
    definition: &KpiDefinition,
    raw_inputs: &HashMap<String, String>,
) -> Result<CalculationResult, EvaluationError> {
    // 1. Presence: every declared input must exist and be non-blank after
    //    trimming.
    let missing = definition
        .inputs
        .iter()
        .any(|spec| raw_inputs.get(&spec.id).is_none_or(|raw| raw.trim().is_empty()));
    if missing {
        return Err(EvaluationError::MissingInput);
    }

    // 2. Parse. Unparseable entries become NaN sentinels; the zero-default
    //    inside each formula absorbs them.
    let values = parse_inputs(raw_inputs);

    // 3./4. Calculate, then reject null or non-finite outcomes.
    let value = definition
        .calculate(&values)
        .filter(|v| v.is_finite())
        .ok_or(EvaluationError::InvalidCalculation)?;

    log::debug!("evaluated kpi '{}': {}", definition.id, value);

    // 5./6. Format and interpret.
    Ok(CalculationResult {
        value,
        formatted_value: format_value(value),
        unit: definition.unit.clone(),
        message: definition.interpret(value),
    })
}

/// Locale-free decimal parse of every entry; failures become NaN.
fn parse_inputs(raw_inputs: &HashMap<String, String>) -> HashMap<String, f64> {
    raw_inputs
        .iter()
        .map(|(id, raw)| (id.clone(), raw.trim().parse::<f64>().unwrap_or(f64::NAN)))
        .collect()
}

/// Display formatting for a computed value.
///
/// Mathematical integers render without decimals; magnitudes below 0.1 keep
/// five decimals so very small rates stay readable; everything else gets
/// two decimals.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value)
    } else if value.abs() < 0.1 {
        format!("{:.5}", value)
    } else {
        format!("{:.2}", value)
    }
}
