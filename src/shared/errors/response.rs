use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::AppError;
use crate::log_error;

/// Problem body returned for 4xx/5xx responses that carry detail.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ProblemDetails {
    fn new(status: StatusCode, title: &str) -> Self {
        Self {
            title: title.to_string(),
            status: status.as_u16(),
            detail: None,
            errors: BTreeMap::new(),
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_)
            | AppError::ConstraintViolation(_)
            | AppError::Configuration(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::NotFound(_) => status.into_response(),
            AppError::ValidationError(errors) => {
                let mut problem =
                    ProblemDetails::new(status, "One or more validation errors occurred.");
                problem.errors = errors.fields().clone();
                (status, Json(problem)).into_response()
            }
            AppError::InvalidInput(message) => {
                let problem = ProblemDetails::new(status, "The request could not be understood.")
                    .with_detail(message);
                (status, Json(problem)).into_response()
            }
            other => {
                log_error!("Request failed: {}", other);
                let problem = ProblemDetails::new(status, "An unexpected error occurred.");
                (status, Json(problem)).into_response()
            }
        }
    }
}
