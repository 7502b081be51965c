//! Route configuration and setup

use crate::constants::MULTIPART_OVERHEAD_BYTES;
use crate::error::error_response;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    http::{header, HeaderValue, Method},
    response::Response,
    routing::{get, post},
    Router,
};
use eraser_core::{AppError, Config};
use std::any::Any;
use std::path::Path;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let static_dir = Path::new(config.static_dir());
    let static_files =
        ServeDir::new(static_dir).not_found_service(handlers::not_found::not_found.into_service());
    let favicon = ServeFile::new(static_dir.join("favicon.ico"));

    // Multipart reads are capped by the body limit; the handler enforces the exact cap
    let body_limit = config
        .max_upload_size_bytes()
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    let http_concurrency_limit = config.http_concurrency_limit();
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    let app = Router::new()
        .route("/", get(handlers::landing::landing_page))
        .route("/health", get(handlers::health::health_check))
        .route("/clean", post(handlers::clean::clean_image))
        .route_service("/favicon.ico", favicon)
        .nest_service("/static", static_files)
        .fallback(handlers::not_found::not_found)
        .method_not_allowed_fallback(handlers::not_found::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state);

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        cors.allow_origin(AnyOrigin)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;
        cors.allow_origin(origins)
    };
    Ok(cors)
}

/// Turn a handler panic into the generic 500 body
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    error_response(AppError::Internal(format!("Handler panicked: {}", message)))
}
