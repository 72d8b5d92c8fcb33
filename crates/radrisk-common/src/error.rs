use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RadRiskError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange { field: &'static str, value: i64, min: i64, max: i64 },

    #[error("Unknown risk model: {0}")]
    UnknownModel(String),

    #[error("Unknown hormesis variant: {0}")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, RadRiskError>;

/// Errors returned from HTTP handlers, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_)   => StatusCode::NOT_FOUND,
            ApiError::Internal(_)   => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RadRiskError> for ApiError {
    fn from(err: RadRiskError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = RadRiskError::OutOfRange { field: "flights", value: 51, min: 0, max: 50 };
        assert_eq!(err.to_string(), "flights must be between 0 and 50, got 51");
    }

    #[test]
    fn test_domain_error_is_bad_request() {
        let api: ApiError = RadRiskError::UnknownModel("quadratic".into()).into();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.to_string(), "Unknown risk model: quadratic");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Internal("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
