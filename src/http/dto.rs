//! Data Transfer Objects for the HTTP API.
//!
//! The core types already derive `Serialize` and are re-exported here; this
//! module only adds the request/response envelopes specific to the REST
//! surface.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Re-export core types that are already serializable
pub use crate::models::{CalculationResult, InputSpec, KpiDefinition};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Number of KPI definitions in the registry
    pub kpi_count: usize,
}

/// One entry of the KPI selection surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiSummary {
    pub id: String,
    pub title: String,
    pub unit: String,
}

impl From<&KpiDefinition> for KpiSummary {
    fn from(def: &KpiDefinition) -> Self {
        Self {
            id: def.id.clone(),
            title: def.title.clone(),
            unit: def.unit.clone(),
        }
    }
}

/// Response for the KPI list endpoint; ordering matches the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiListResponse {
    pub kpis: Vec<KpiSummary>,
    pub total: usize,
}

/// Request body for evaluating a KPI.
///
/// Values stay strings end to end; the evaluation pipeline owns parsing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EvaluateRequest {
    /// Raw input values keyed by input id
    #[serde(default)]
    pub inputs: HashMap<String, String>,
}
