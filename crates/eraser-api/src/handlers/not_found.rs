use crate::error::error_response;
use axum::{http::Uri, response::Response};
use eraser_core::AppError;

/// Fallback for unknown paths and unsupported methods on known paths
pub async fn not_found(uri: Uri) -> Response {
    error_response(AppError::NotFound(uri.path().to_string()))
}
