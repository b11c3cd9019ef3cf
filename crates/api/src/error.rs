//! API error type with HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kitroute_core::reports::ReportError;
use kitroute_shared::AppError;
use serde_json::json;

/// Error returned by handlers, rendered as `{"error": code, "message": msg}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %err.message(), code = err.error_code(), "Request failed");
        }

        let body = json!({
            "error": err.error_code(),
            "message": err.message(),
        });
        (status, Json(body)).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        Self(err.into())
    }
}

/// Shorthand for a 400 response.
pub fn validation(message: impl Into<String>) -> ApiError {
    ApiError(AppError::Validation(message.into()))
}
