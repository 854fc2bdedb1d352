//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::EvaluationError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
///
/// Malformed bodies and bad parameters never reach the handlers; axum's
/// extractors reject them first, so no bad-request variant exists here.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Evaluation pipeline failure (missing input, invalid calculation)
    Evaluation(EvaluationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::Evaluation(err) => {
                let code = match err {
                    EvaluationError::MissingInput => "MISSING_INPUT",
                    EvaluationError::InvalidCalculation => "INVALID_CALCULATION",
                };
                // Recoverable user errors: the client keeps its inputs and retries
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ApiError::new(code, err.to_string()),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<EvaluationError> for AppError {
    fn from(err: EvaluationError) -> Self {
        AppError::Evaluation(err)
    }
}
