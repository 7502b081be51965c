//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use eraser_core::Config;
use eraser_processing::CleaningPipeline;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment(),
        max_upload_size_mb = config.max_upload_size_mb(),
        "Configuration loaded and validated successfully"
    );

    let state = Arc::new(AppState::new(config.clone(), CleaningPipeline::default()));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
