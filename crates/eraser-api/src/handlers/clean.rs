use crate::constants::{CLEANED_FILENAME_PREFIX, METADATA_AFTER};
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::extract_image_upload;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::IntoResponse,
    Json,
};
use eraser_core::AppError;
use eraser_processing::MetadataSnapshot;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct CleanResponse {
    pub success: bool,
    pub image_url: String,
    pub filename: String,
    pub metadata_before: MetadataSnapshot,
    pub metadata_after: &'static str,
    pub original_size: usize,
    pub processed_size: usize,
}

/// Strip all metadata from an uploaded image and return the cleaned copy inline.
#[tracing::instrument(skip(state, multipart))]
pub async fn clean_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(rejection = %rejection, "Request is not a multipart form");
        AppError::NoFile
    })?;

    let upload = extract_image_upload(
        multipart,
        &state.validator,
        state.config.max_upload_size_mb(),
    )
    .await?;

    let filename = format!("{}{}", CLEANED_FILENAME_PREFIX, upload.original_filename());
    tracing::debug!(filename = %filename, "Upload validated, cleaning");

    let pipeline = state.pipeline.clone();
    let outcome = tokio::task::spawn_blocking(move || pipeline.clean(&upload))
        .await
        .map_err(|e| AppError::Internal(format!("Cleaning task failed: {}", e)))??;

    tracing::info!(
        original_size = outcome.original_size,
        processed_size = outcome.processed_size,
        "Image processed"
    );

    Ok(Json(CleanResponse {
        success: true,
        image_url: outcome.cleaned.to_data_uri(),
        filename,
        metadata_before: outcome.metadata_before,
        metadata_after: METADATA_AFTER,
        original_size: outcome.original_size,
        processed_size: outcome.processed_size,
    }))
}
