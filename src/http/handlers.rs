//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! registry and the evaluation pipeline.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{EvaluateRequest, HealthResponse, KpiListResponse, KpiSummary};
use super::error::AppError;
use super::state::AppState;
use crate::models::{CalculationResult, KpiDefinition};
use crate::services::evaluator;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        kpi_count: state.registry.len(),
    }))
}

// =============================================================================
// KPI Registry
// =============================================================================

/// GET /v1/kpis
///
/// List all KPI definitions in registry (display) order.
pub async fn list_kpis(State(state): State<AppState>) -> HandlerResult<KpiListResponse> {
    let kpis: Vec<KpiSummary> = state.registry.definitions().iter().map(Into::into).collect();
    let total = kpis.len();

    Ok(Json(KpiListResponse { kpis, total }))
}

/// GET /v1/kpis/{id}
///
/// Full definition for one KPI, including its ordered input specs.
pub async fn get_kpi(
    State(state): State<AppState>,
    Path(kpi_id): Path<String>,
) -> HandlerResult<KpiDefinition> {
    let definition = state
        .registry
        .get(&kpi_id)
        .ok_or_else(|| AppError::NotFound(format!("KPI '{}' not found", kpi_id)))?;

    Ok(Json(definition.clone()))
}

// =============================================================================
// Evaluation
// =============================================================================

/// POST /v1/kpis/{id}/evaluate
///
/// Run the evaluation pipeline for one KPI over raw string inputs. Pipeline
/// failures map to 422 with a stable error code; see `http::error`.
pub async fn evaluate_kpi(
    State(state): State<AppState>,
    Path(kpi_id): Path<String>,
    Json(request): Json<EvaluateRequest>,
) -> HandlerResult<CalculationResult> {
    let definition = state
        .registry
        .get(&kpi_id)
        .ok_or_else(|| AppError::NotFound(format!("KPI '{}' not found", kpi_id)))?;

    let result = evaluator::evaluate(definition, &request.inputs)?;
    Ok(Json(result))
}
