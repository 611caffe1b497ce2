//! Error types for the resource API.
//!
//! [`ApiError`] has exactly two kinds. A `BadRequest` is raised while
//! extracting the body, before the store is touched, so it never mutates
//! state. An `Internal` error means the store rejected the operation; any
//! in-flight transaction has already been rolled back by the time it is
//! returned. Both convert into an Axum HTTP response via
//! [`IntoResponse`](axum::response::IntoResponse).

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use damping_db::DbError;

/// Errors that can occur in the resource API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is missing a required field or is not usable JSON.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The store failed to read or write.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Build the error returned when persisting a new `entity` fails.
    pub fn create_failed(entity: &str, err: &DbError) -> Self {
        if err.is_constraint_violation() {
            tracing::warn!(entity, error = %err, "Create rejected by store constraint");
        } else {
            tracing::error!(entity, error = %err, "Create failed");
        }
        Self::Internal(format!("failed to create {entity}: {err}"))
    }

    /// Build the error returned when listing `entity` rows fails.
    pub fn list_failed(entity: &str, err: &DbError) -> Self {
        tracing::error!(entity, error = %err, "List failed");
        Self::Internal(format!("failed to list {entity}: {err}"))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        tracing::debug!(%message, "Rejected request body");
        Self::BadRequest(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest(String::from("missing field `brand`")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_500() {
        let err = ApiError::create_failed("sensor", &DbError::Config(String::from("boom")));
        assert!(err.to_string().contains("failed to create sensor"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
