use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::DomainError;

pub type ApiResult<T> = Result<T, ApiProblem>;

/// HTTP-facing error. Every failure serializes to the same envelope:
/// `{"type": "<kind>", "message": "<text>"}`.
#[derive(Debug)]
pub struct ApiProblem {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl ApiProblem {
    pub fn from_domain(error: DomainError) -> Self {
        let (status, kind) = match &error {
            DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "EntityNotFoundException"),
            DomainError::Forbidden(_) => (StatusCode::FORBIDDEN, "AccessDeniedException"),
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "ValidationException"),
            DomainError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        Self {
            status,
            kind,
            message: error.to_string(),
        }
    }
}

impl From<DomainError> for ApiProblem {
    fn from(error: DomainError) -> Self {
        Self::from_domain(error)
    }
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

impl IntoResponse for ApiProblem {
    fn into_response(self) -> Response {
        let payload = ErrorEnvelope {
            kind: self.kind.to_string(),
            message: self.message,
        };

        (self.status, Json(payload)).into_response()
    }
}
