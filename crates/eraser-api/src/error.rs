//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Domain errors convert
//! into `AppError` first, so status, body and log level come from one place.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eraser_core::{AppError, ErrorMetadata, LogLevel};
use eraser_processing::{CleanError, ValidationError};
use serde::Serialize;

const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from eraser-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(
                error = %error,
                error_type = error_type,
                detailed = %error.detailed_message(),
                "Error occurred"
            );
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = ErrorResponse {
            error: app_error.client_message(),
            details: app_error.details(),
        };

        (status, Json(body)).into_response()
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        let app = match err {
            ValidationError::MissingFile => AppError::NoFile,
            ValidationError::UnsupportedContentType { content_type } => {
                AppError::UnsupportedMediaType(content_type)
            }
            ValidationError::FileTooLarge { size, max } => AppError::PayloadTooLarge {
                size: Some(size),
                max_mb: max / BYTES_PER_MB,
            },
            ValidationError::DuplicateField => AppError::InvalidInput(err.to_string()),
        };
        HttpAppError(app)
    }
}

impl From<CleanError> for HttpAppError {
    fn from(err: CleanError) -> Self {
        let app = match err {
            CleanError::NoFile => AppError::NoFile,
            CleanError::Processing(e) => AppError::ImageProcessing(e.to_string()),
        };
        HttpAppError(app)
    }
}

/// Map a multipart stream failure, given the configured cap in MB.
///
/// The body limit surfaces as a 413 from the multipart reader; anything else
/// means the client did not send a usable form.
pub fn from_multipart_error(err: MultipartError, max_mb: usize) -> HttpAppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return HttpAppError(AppError::PayloadTooLarge { size: None, max_mb });
    }
    tracing::debug!(error = %err.body_text(), "Malformed multipart body");
    HttpAppError(AppError::NoFile)
}

/// Render an error without going through a handler (fallbacks, panic hook)
pub fn error_response(err: AppError) -> Response {
    HttpAppError(err).into_response()
}
