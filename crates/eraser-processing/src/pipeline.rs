//! Cleaning pipeline: summarize, then re-encode without metadata

use crate::error::CodecError;
use crate::image::{ImageCodec, JpegCodec};
use crate::metadata::{MetadataSnapshot, MetadataSummarizer};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use eraser_core::UploadedImage;
use std::sync::Arc;

/// Media type of every cleaned image
pub const CLEANED_MIME: &str = "image/jpeg";

#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("No image file uploaded")]
    NoFile,

    #[error(transparent)]
    Processing(#[from] CodecError),
}

/// Re-encoded image bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedImage {
    data: Vec<u8>,
}

impl CleanedImage {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Inline `data:` URI with base64 payload
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", CLEANED_MIME, STANDARD.encode(&self.data))
    }
}

#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub cleaned: CleanedImage,
    pub metadata_before: MetadataSnapshot,
    pub original_size: usize,
    pub processed_size: usize,
}

/// Metadata cleaning pipeline
///
/// Stateless apart from the codec, so one instance is shared by all requests.
#[derive(Clone)]
pub struct CleaningPipeline {
    codec: Arc<dyn ImageCodec>,
}

impl CleaningPipeline {
    pub fn new(codec: Arc<dyn ImageCodec>) -> Self {
        Self { codec }
    }

    /// Run the pipeline on an upload. Blocking; call from the blocking pool.
    pub fn clean(&self, upload: &UploadedImage) -> Result<CleanOutcome, CleanError> {
        if upload.is_empty() {
            return Err(CleanError::NoFile);
        }

        tracing::debug!(
            mime = %upload.mime(),
            size = upload.size(),
            "Summarizing metadata"
        );
        let metadata_before = MetadataSummarizer::summarize(self.codec.as_ref(), upload.bytes());

        tracing::debug!("Re-encoding image");
        let cleaned = CleanedImage::new(self.codec.reencode(upload.data())?);

        Ok(CleanOutcome {
            original_size: upload.size(),
            processed_size: cleaned.size(),
            cleaned,
            metadata_before,
        })
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new(Arc::new(JpegCodec::default()))
    }
}

impl std::fmt::Debug for CleaningPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CleaningPipeline").finish_non_exhaustive()
    }
}
