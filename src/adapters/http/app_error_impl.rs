use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        match &self {
            AppError::Unauthorized(auth) => {
                tracing::warn!(code = auth.code(), error = %auth, "Request not authorized")
            }
            AppError::NotFound => tracing::debug!("Resource not found"),
            _ => tracing::error!(error = ?self, "Request failed"),
        }

        error_resp(self.code())
    }
}

/// Uniform error envelope: `{success: false, error: <status>, message}`.
fn error_resp(code: ErrorCode) -> Response {
    let status =
        StatusCode::from_u16(code.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
        "success": false,
        "error": code.status(),
        "message": code.message(),
    });
    (status, Json(body)).into_response()
}
