use crate::shared::errors::AppError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Wrapper that maps domain errors onto HTTP status codes.
///
/// The engine knows nothing about HTTP; this is the only place where the
/// mapping lives.
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) | AppError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            AppError::StorageError(_) | AppError::SerializationError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}
